//! Repository trait 定义

use async_trait::async_trait;
use purchase_common::{PagedResult, Pagination, SortOrder};
use purchase_errors::AppResult;

/// 基础 Repository trait，以业务主键 `K` 定位整条记录
#[async_trait]
pub trait Repository<T, K>: Send + Sync
where
    T: Send + Sync,
    K: Sync + ?Sized,
{
    /// 根据主键查找
    async fn find_by_key(&self, key: &K) -> AppResult<Option<T>>;

    /// 插入新记录，返回数据库中保存的结果
    async fn insert(&self, entity: &T) -> AppResult<T>;

    /// 用 `entity` 整体覆盖主键为 `key` 的记录，不存在时返回 `NotFound`
    async fn replace(&self, key: &K, entity: &T) -> AppResult<T>;

    /// 删除记录，不存在时返回 `NotFound`
    async fn delete(&self, key: &K) -> AppResult<()>;
}

/// 支持过滤、排序和分页查询的 Repository
#[async_trait]
pub trait PageableRepository<T, K, F, S>: Repository<T, K>
where
    T: Send + Sync,
    K: Sync + ?Sized,
    F: Sync,
    S: Sync,
{
    /// 查询一页数据，`total` 为忽略分页后的匹配总数
    async fn find_all(
        &self,
        filter: &F,
        pagination: &Pagination,
        sort: &[SortOrder<S>],
    ) -> AppResult<PagedResult<T>>;
}
