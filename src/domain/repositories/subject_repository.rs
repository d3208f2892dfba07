use async_trait::async_trait;

use crate::domain::entities::Subject;
use crate::domain::repositories::Repository;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait SubjectRepository: Repository<Subject> {
    /// Case-insensitive lookup by name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Subject>>;

    /// Store-level uniqueness probe. `exclude_id` ignores the subject being
    /// updated so renames to the same name do not collide with themselves.
    async fn exists_by_name(&self, name: &str, exclude_id: Option<i32>) -> AppResult<bool>;
}
