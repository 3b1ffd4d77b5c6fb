//! 客户仓储接口

use purchase_ports::PageableRepository;

use crate::domain::entities::{Customer, CustomerFilter, CustomerSortField};

/// 客户仓储接口，以客户编码为主键
pub trait CustomerRepository:
    PageableRepository<Customer, str, CustomerFilter, CustomerSortField>
{
}

impl<T> CustomerRepository for T where
    T: PageableRepository<Customer, str, CustomerFilter, CustomerSortField>
{
}
