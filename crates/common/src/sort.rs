//! 排序参数
//!
//! `sort` 请求参数沿用 `prop[,prop...][,asc|desc]` 约定，可重复出现。

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[display("ASC")]
    Asc,
    #[display("DESC")]
    Desc,
}

impl SortDirection {
    fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

/// 尚未校验的排序参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortParam {
    pub property: String,
    pub direction: SortDirection,
}

impl SortParam {
    /// 解析单个 `sort` 值
    ///
    /// 末尾的 `asc` / `desc` 作用于同一个值里的所有属性；空白片段被忽略。
    pub fn parse(raw: &str) -> Vec<SortParam> {
        let mut tokens: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let direction = match tokens.last().and_then(|t| SortDirection::parse(t)) {
            Some(direction) => {
                tokens.pop();
                direction
            }
            None => SortDirection::Asc,
        };

        tokens
            .into_iter()
            .map(|property| SortParam {
                property: property.to_string(),
                direction,
            })
            .collect()
    }

    /// 解析所有 `sort` 值，保持出现顺序
    pub fn parse_all<S: AsRef<str>>(values: &[S]) -> Vec<SortParam> {
        values.iter().flat_map(|v| Self::parse(v.as_ref())).collect()
    }
}

/// 可排序字段（白名单）
pub trait SortField: Copy + PartialEq + Sized {
    /// 外部属性名到字段的映射，未知属性返回 `None`
    fn from_property(property: &str) -> Option<Self>;
}

/// 未知的排序属性
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Unknown sort property '{_0}'")]
pub struct UnknownSortProperty(pub String);

impl std::error::Error for UnknownSortProperty {}

/// 经过白名单校验的排序项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<K> {
    pub field: K,
    pub direction: SortDirection,
}

impl<K: SortField> SortOrder<K> {
    pub fn asc(field: K) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: K) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// 将原始参数解析为排序项，遇到白名单外的属性立即失败
    pub fn resolve(params: &[SortParam]) -> Result<Vec<Self>, UnknownSortProperty> {
        params
            .iter()
            .map(|p| {
                K::from_property(&p.property)
                    .map(|field| SortOrder {
                        field,
                        direction: p.direction,
                    })
                    .ok_or_else(|| UnknownSortProperty(p.property.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        Name,
        Price,
    }

    impl SortField for Field {
        fn from_property(property: &str) -> Option<Self> {
            match property {
                "name" => Some(Field::Name),
                "price" => Some(Field::Price),
                _ => None,
            }
        }
    }

    #[test]
    fn test_parse_property_with_direction() {
        let params = SortParam::parse("price,desc");
        assert_eq!(
            params,
            vec![SortParam {
                property: "price".to_string(),
                direction: SortDirection::Desc
            }]
        );
    }

    #[test]
    fn test_parse_defaults_to_ascending() {
        let params = SortParam::parse("name");
        assert_eq!(params[0].direction, SortDirection::Asc);
    }

    #[test]
    fn test_parse_direction_applies_to_all_properties() {
        let params = SortParam::parse("name,price,DESC");
        assert_eq!(params.len(), 2);
        assert!(params.iter().all(|p| p.direction == SortDirection::Desc));
    }

    #[test]
    fn test_parse_ignores_blank_segments() {
        assert!(SortParam::parse("").is_empty());
        assert!(SortParam::parse(" , ").is_empty());
        assert!(SortParam::parse("desc").is_empty());
    }

    #[test]
    fn test_parse_all_keeps_order() {
        let params = SortParam::parse_all(&["price,desc", "name"]);
        assert_eq!(params[0].property, "price");
        assert_eq!(params[1].property, "name");
        assert_eq!(params[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_resolve_known_fields() {
        let params = SortParam::parse_all(&["price,desc", "name"]);
        let orders = SortOrder::<Field>::resolve(&params).unwrap();
        assert_eq!(orders, vec![SortOrder::desc(Field::Price), SortOrder::asc(Field::Name)]);
    }

    #[test]
    fn test_resolve_rejects_unknown_field() {
        let params = SortParam::parse("name,up");
        let err = SortOrder::<Field>::resolve(&params).unwrap_err();
        assert_eq!(err, UnknownSortProperty("up".to_string()));
        assert_eq!(err.to_string(), "Unknown sort property 'up'");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(SortDirection::Asc.to_string(), "ASC");
        assert_eq!(SortDirection::Desc.to_string(), "DESC");
    }
}
