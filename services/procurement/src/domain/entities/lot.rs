//! 采购批次

use chrono::NaiveDateTime;
use purchase_common::SortField;
use purchase_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 采购批次记录，以 `lot_name` 为业务主键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// 批次名称，更新时以路径中的名称为准
    #[serde(default)]
    pub lot_name: String,
    /// 所属客户编码
    pub customer_code: String,
    /// 以 JSON 数字输出，保留小数位（如 `1500.50`）
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub currency_code: String,
    /// 增值税税率（НДС）
    pub nds_rate: String,
    pub place_delivery: String,
    /// 交付时间，格式 `2023-12-15T10:00:00`
    pub date_delivery: NaiveDateTime,
}

impl Lot {
    /// 新建批次时的必填校验
    pub fn validate(&self) -> AppResult<()> {
        if self.lot_name.trim().is_empty() {
            return Err(AppError::validation("lotName must not be blank"));
        }
        Ok(())
    }
}

/// 批次列表过滤条件，`None` 表示不过滤
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotFilter {
    /// 名称包含
    pub lot_name: Option<String>,
    /// 客户编码精确匹配
    pub customer_code: Option<String>,
    /// 价格下限（含）
    pub min_price: Option<Decimal>,
    /// 价格上限（含）
    pub max_price: Option<Decimal>,
    pub currency_code: Option<String>,
    pub nds_rate: Option<String>,
    /// 交付地点包含
    pub place_delivery: Option<String>,
}

/// 批次可排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotSortField {
    LotName,
    CustomerCode,
    Price,
    CurrencyCode,
    DateDelivery,
    NdsRate,
    PlaceDelivery,
}

impl SortField for LotSortField {
    fn from_property(property: &str) -> Option<Self> {
        let field = match property {
            "lotName" => Self::LotName,
            "customerCode" => Self::CustomerCode,
            "price" => Self::Price,
            "currencyCode" => Self::CurrencyCode,
            "dateDelivery" => Self::DateDelivery,
            "ndsRate" => Self::NdsRate,
            "placeDelivery" => Self::PlaceDelivery,
            _ => return None,
        };
        Some(field)
    }
}
