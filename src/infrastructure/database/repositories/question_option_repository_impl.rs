use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists as exists_dsl, select};
use diesel::prelude::*;

use crate::domain::entities::{AggregateRoot, QuestionOption};
use crate::domain::repositories::{QuestionOptionRepository, Repository};
use crate::infrastructure::database::models::{
    NewQuestionOptionRow, QuestionOptionChangeset, QuestionOptionModel,
};
use crate::infrastructure::database::schema::question_options;
use crate::infrastructure::database::session::DbSession;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

pub struct QuestionOptionRepositoryImpl {
    session: Arc<DbSession>,
}

impl QuestionOptionRepositoryImpl {
    pub fn new(session: Arc<DbSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Repository<QuestionOption> for QuestionOptionRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<QuestionOption>> {
        self.session
            .run(move |conn| {
                let model = question_options::table
                    .filter(question_options::id.eq(id))
                    .first::<QuestionOptionModel>(conn)
                    .optional()?;
                model.map(|m| m.into_entity()).transpose()
            })
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<QuestionOption>> {
        self.session
            .run(|conn| {
                let models = question_options::table
                    .order(question_options::id.asc())
                    .load::<QuestionOptionModel>(conn)?;
                models.into_iter().map(|m| m.into_entity()).collect()
            })
            .await
    }

    async fn find_page(
        &self,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<QuestionOption>> {
        self.session
            .run(move |conn| {
                let total = question_options::table.count().get_result::<i64>(conn)?;
                let models = question_options::table
                    .order(question_options::id.asc())
                    .offset(pagination.offset())
                    .limit(pagination.limit())
                    .load::<QuestionOptionModel>(conn)?;
                let items = models
                    .into_iter()
                    .map(|m| m.into_entity())
                    .collect::<AppResult<Vec<_>>>()?;
                Ok(PaginatedResult::new(items, total as u64, &pagination))
            })
            .await
    }

    async fn save(&self, entity: &QuestionOption) -> AppResult<QuestionOption> {
        let new_row = NewQuestionOptionRow::from_entity(entity);
        self.session
            .run(move |conn| {
                let model = diesel::insert_into(question_options::table)
                    .values(&new_row)
                    .get_result::<QuestionOptionModel>(conn)?;
                LogContext::db_operation("insert", "question_options", None);
                model.into_entity()
            })
            .await
    }

    async fn update(&self, entity: &QuestionOption) -> AppResult<QuestionOption> {
        let id = entity.id();
        let changes = QuestionOptionChangeset::from_entity(entity);
        self.session
            .run(move |conn| {
                let model =
                    diesel::update(question_options::table.filter(question_options::id.eq(id)))
                        .set(&changes)
                        .get_result::<QuestionOptionModel>(conn)
                        .optional()?;
                let Some(model) = model else {
                    return Err(AppError::NotFound(format!(
                        "Option with ID {} not found",
                        id
                    )));
                };
                model.into_entity()
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.session
            .run(move |conn| {
                let n = diesel::delete(
                    question_options::table.filter(question_options::id.eq(id)),
                )
                .execute(conn)?;
                if n == 0 {
                    return Err(AppError::NotFound(format!(
                        "Option with ID {} not found",
                        id
                    )));
                }
                Ok(())
            })
            .await
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.session
            .run(move |conn| {
                let found = select(exists_dsl(
                    question_options::table.filter(question_options::id.eq(id)),
                ))
                .get_result::<bool>(conn)?;
                Ok(found)
            })
            .await
    }
}

#[async_trait]
impl QuestionOptionRepository for QuestionOptionRepositoryImpl {
    async fn find_by_question(&self, question_id: i32) -> AppResult<Vec<QuestionOption>> {
        self.session
            .run(move |conn| {
                let models = question_options::table
                    .filter(question_options::question_id.eq(question_id))
                    .order(question_options::id.asc())
                    .load::<QuestionOptionModel>(conn)?;
                models.into_iter().map(|m| m.into_entity()).collect()
            })
            .await
    }
}
