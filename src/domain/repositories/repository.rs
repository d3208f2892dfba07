use async_trait::async_trait;

use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

/// Generic persistence contract implemented once per aggregate.
///
/// Operations are asynchronous and may suspend on I/O; none of them opens
/// a transaction, since the unit of work owns the transaction boundary.
/// Cancellation is cooperative: dropping the returned future abandons the
/// operation and the transaction boundary prevents partial writes.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>>;

    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn find_page(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<T>>;

    /// Insert and return the stored entity with its assigned id.
    async fn save(&self, entity: &T) -> AppResult<T>;

    /// Update an existing row; fails with `NotFound` for an unknown id.
    async fn update(&self, entity: &T) -> AppResult<T>;

    /// Delete by id; the schema cascades to owned children.
    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn exists(&self, id: i32) -> AppResult<bool>;
}
