//! 响应 DTO

use purchase_common::PagedResult;
use serde::Serialize;

/// 分页响应，字段与 Spring `Page` 的 JSON 形式保持一致
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> From<PagedResult<T>> for PageResponse<T> {
    fn from(page: PagedResult<T>) -> Self {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        let number_of_elements = page.items.len();
        Self {
            total_elements: page.total,
            total_pages,
            number: page.page,
            size: page.page_size,
            number_of_elements,
            first,
            last,
            empty: number_of_elements == 0,
            content: page.items,
        }
    }
}
