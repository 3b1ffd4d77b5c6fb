//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// 每页条数上限
pub const MAX_PAGE_SIZE: u32 = 2000;

/// 分页参数（页码从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// 从请求参数构造，越界值按约定归一化
    ///
    /// 负页码视为 0；`size < 1` 使用默认值；超过上限时截断。
    pub fn from_request(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.unwrap_or(0).clamp(0, u32::MAX as i64) as u32;
        let page_size = match size {
            Some(s) if s >= 1 => s.min(MAX_PAGE_SIZE as i64) as u32,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        self.page as u64 * self.page_size as u64
    }

    pub fn limit(&self) -> u64 {
        self.page_size as u64
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as u64) as u32
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination::from_request(None, None);
        assert_eq!(p, Pagination::new(0, DEFAULT_PAGE_SIZE));
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_pagination_normalizes_out_of_range() {
        assert_eq!(Pagination::from_request(Some(-3), Some(0)), Pagination::new(0, 20));
        assert_eq!(Pagination::from_request(Some(2), Some(-1)).page_size, 20);
        assert_eq!(Pagination::from_request(Some(1), Some(5000)).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_offset() {
        let p = Pagination::from_request(Some(3), Some(25));
        assert_eq!(p.offset(), 75);
        assert_eq!(p.limit(), 25);
    }

    #[test]
    fn test_paged_result_page_math() {
        let pagination = Pagination::new(0, 20);
        let page = PagedResult::new(vec![1, 2, 3], 41, &pagination);
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_first());
        assert!(!page.is_last());

        let last = PagedResult::new(vec![41], 41, &Pagination::new(2, 20));
        assert!(last.is_last());
    }

    #[test]
    fn test_empty_result_is_first_and_last() {
        let page: PagedResult<i32> = PagedResult::new(vec![], 0, &Pagination::default());
        assert_eq!(page.total_pages(), 0);
        assert!(page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn test_largest_page_is_last() {
        let pagination = Pagination::from_request(Some(i64::MAX), Some(20));
        assert_eq!(pagination.page, u32::MAX);
        let page: PagedResult<i32> = PagedResult::new(vec![], 5, &pagination);
        assert!(!page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = PagedResult::new(vec![1, 2], 10, &Pagination::new(1, 2));
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total, 10);
        assert_eq!(mapped.page, 1);
    }
}
