use crate::shared::application::pagination::PaginationParams;

/// Query for listing subjects, paginated
#[derive(Debug, Clone, Default)]
pub struct ListSubjectsQuery {
    pub pagination: PaginationParams,
}

impl ListSubjectsQuery {
    pub fn new(pagination: PaginationParams) -> Self {
        Self { pagination }
    }
}
