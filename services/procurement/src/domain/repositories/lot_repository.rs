//! 批次仓储接口

use purchase_ports::PageableRepository;

use crate::domain::entities::{Lot, LotFilter, LotSortField};

/// 批次仓储接口，以批次名称为主键
pub trait LotRepository: PageableRepository<Lot, str, LotFilter, LotSortField> {}

impl<T> LotRepository for T where T: PageableRepository<Lot, str, LotFilter, LotSortField> {}
