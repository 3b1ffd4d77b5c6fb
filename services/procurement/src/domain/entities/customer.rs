//! 客户

use purchase_common::SortField;
use purchase_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 客户记录，以 `customer_code` 为业务主键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// 客户编码，更新时以路径中的编码为准
    #[serde(default)]
    pub customer_code: String,
    pub customer_name: String,
    /// 纳税人识别号（ИНН）
    #[serde(default)]
    pub customer_inn: Option<String>,
    /// 税务登记原因代码（КПП）
    #[serde(default)]
    pub customer_kpp: Option<String>,
    #[serde(default)]
    pub customer_legal_address: Option<String>,
    #[serde(default)]
    pub customer_postal_address: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    /// 上级客户编码
    #[serde(default)]
    pub customer_code_main: Option<String>,
    #[serde(default)]
    pub is_organization: bool,
    #[serde(default)]
    pub is_person: bool,
}

impl Customer {
    /// 新建客户时的必填校验
    pub fn validate(&self) -> AppResult<()> {
        if self.customer_code.trim().is_empty() {
            return Err(AppError::validation("customerCode must not be blank"));
        }
        if self.customer_name.trim().is_empty() {
            return Err(AppError::validation("customerName must not be blank"));
        }
        Ok(())
    }
}

/// 客户列表过滤条件，`None` 表示不过滤
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// 编码包含
    pub customer_code: Option<String>,
    /// 名称包含
    pub name: Option<String>,
    /// ИНН 精确匹配
    pub inn: Option<String>,
    /// КПП 精确匹配
    pub customer_kpp: Option<String>,
    pub is_organization: Option<bool>,
    pub is_person: Option<bool>,
    pub customer_legal_address: Option<String>,
    pub customer_postal_address: Option<String>,
    pub customer_email: Option<String>,
    pub customer_code_main: Option<String>,
}

/// 客户可排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSortField {
    CustomerCode,
    CustomerName,
    CustomerInn,
    CustomerKpp,
    IsOrganization,
    IsPerson,
    CustomerLegalAddress,
    CustomerPostalAddress,
    CustomerEmail,
    CustomerCodeMain,
}

impl SortField for CustomerSortField {
    fn from_property(property: &str) -> Option<Self> {
        let field = match property {
            "customerCode" => Self::CustomerCode,
            "customerName" => Self::CustomerName,
            "customerInn" => Self::CustomerInn,
            "customerKpp" => Self::CustomerKpp,
            "isOrganization" => Self::IsOrganization,
            "isPerson" => Self::IsPerson,
            "customerLegalAddress" => Self::CustomerLegalAddress,
            "customerPostalAddress" => Self::CustomerPostalAddress,
            "customerEmail" => Self::CustomerEmail,
            "customerCodeMain" => Self::CustomerCodeMain,
            _ => return None,
        };
        Some(field)
    }
}
