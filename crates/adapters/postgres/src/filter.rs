//! 动态过滤条件
//!
//! 每个可选过滤字段生成一个谓词，空值或空白字符串不产生谓词；所有谓词以
//! `AND` 连接。值始终通过 `push_bind` 绑定，不拼接进 SQL。

use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

/// 谓词绑定值
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
    Decimal(Decimal),
}

impl FilterValue {
    fn is_blank(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s.trim().is_empty())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        FilterValue::Text(value.clone())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<Decimal> for FilterValue {
    fn from(value: Decimal) -> Self {
        FilterValue::Decimal(value)
    }
}

/// 比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ge,
    Le,
}

impl Comparison {
    fn as_sql(&self) -> &'static str {
        match self {
            Comparison::Eq => " = ",
            Comparison::Ge => " >= ",
            Comparison::Le => " <= ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    /// 不区分大小写的子串匹配
    Contains { column: &'static str, pattern: String },
    Compare {
        column: &'static str,
        op: Comparison,
        value: FilterValue,
    },
}

/// 过滤条件集合
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column ILIKE '%value%'`
    pub fn contains(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.predicates.push(Predicate::Contains {
                column,
                pattern: contains_pattern(v),
            });
        }
        self
    }

    /// `column = value`
    pub fn equals<V: Into<FilterValue>>(self, column: &'static str, value: Option<V>) -> Self {
        self.compare(column, Comparison::Eq, value)
    }

    /// `column >= value`
    pub fn at_least<V: Into<FilterValue>>(self, column: &'static str, value: Option<V>) -> Self {
        self.compare(column, Comparison::Ge, value)
    }

    /// `column <= value`
    pub fn at_most<V: Into<FilterValue>>(self, column: &'static str, value: Option<V>) -> Self {
        self.compare(column, Comparison::Le, value)
    }

    fn compare<V: Into<FilterValue>>(
        mut self,
        column: &'static str,
        op: Comparison,
        value: Option<V>,
    ) -> Self {
        if let Some(value) = value.map(Into::into).filter(|v| !v.is_blank()) {
            self.predicates.push(Predicate::Compare { column, op, value });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// 追加 ` WHERE ... AND ...`，没有谓词时不追加任何内容
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                Predicate::Contains { column, pattern } => {
                    builder.push(*column);
                    builder.push(" ILIKE ");
                    builder.push_bind(pattern.clone());
                }
                Predicate::Compare { column, op, value } => {
                    builder.push(*column);
                    builder.push(op.as_sql());
                    match value {
                        FilterValue::Text(v) => builder.push_bind(v.clone()),
                        FilterValue::Bool(v) => builder.push_bind(*v),
                        FilterValue::Decimal(v) => builder.push_bind(*v),
                    };
                }
            }
        }
    }
}

/// 转义 LIKE 通配符后包上 `%...%`
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
