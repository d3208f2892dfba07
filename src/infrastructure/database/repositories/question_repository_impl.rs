use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists as exists_dsl, select, sql};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};

use crate::domain::entities::{AggregateRoot, Question};
use crate::domain::repositories::{QuestionRepository, Repository};
use crate::infrastructure::database::models::{
    NewQuestion, NewQuestionOptionRow, QuestionChangeset, QuestionModel, QuestionOptionModel,
};
use crate::infrastructure::database::schema::{question_options, questions};
use crate::infrastructure::database::session::DbSession;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

pub struct QuestionRepositoryImpl {
    session: Arc<DbSession>,
}

impl QuestionRepositoryImpl {
    pub fn new(session: Arc<DbSession>) -> Self {
        Self { session }
    }
}

/// Hydrate one question with its full option collection, which the
/// correct-answer rule depends on.
fn load_question(conn: &mut PgConnection, model: QuestionModel) -> AppResult<Question> {
    let option_rows = QuestionOptionModel::belonging_to(&model)
        .order(question_options::id.asc())
        .load::<QuestionOptionModel>(conn)?;
    let loaded = option_rows
        .into_iter()
        .map(|o| o.into_entity())
        .collect::<AppResult<Vec<_>>>()?;
    model.into_entity(loaded)
}

/// Batch-hydrate questions, grouping option rows per question.
fn load_questions(conn: &mut PgConnection, models: Vec<QuestionModel>) -> AppResult<Vec<Question>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let option_rows: Vec<QuestionOptionModel> =
        QuestionOptionModel::belonging_to(&models).load::<QuestionOptionModel>(conn)?;
    let grouped = option_rows.grouped_by(&models);

    models
        .into_iter()
        .zip(grouped)
        .map(|(model, rows)| {
            let loaded = rows
                .into_iter()
                .map(|o| o.into_entity())
                .collect::<AppResult<Vec<_>>>()?;
            model.into_entity(loaded)
        })
        .collect()
}

#[async_trait]
impl Repository<Question> for QuestionRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>> {
        self.session
            .run(move |conn| {
                let model = questions::table
                    .filter(questions::id.eq(id))
                    .first::<QuestionModel>(conn)
                    .optional()?;
                match model {
                    Some(m) => Ok(Some(load_question(conn, m)?)),
                    None => Ok(None),
                }
            })
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        self.session
            .run(|conn| {
                let models = questions::table
                    .order(questions::id.asc())
                    .load::<QuestionModel>(conn)?;
                load_questions(conn, models)
            })
            .await
    }

    async fn find_page(
        &self,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Question>> {
        self.session
            .run(move |conn| {
                let total = questions::table.count().get_result::<i64>(conn)?;
                let models = questions::table
                    .order(questions::id.asc())
                    .offset(pagination.offset())
                    .limit(pagination.limit())
                    .load::<QuestionModel>(conn)?;
                let items = load_questions(conn, models)?;
                Ok(PaginatedResult::new(items, total as u64, &pagination))
            })
            .await
    }

    /// Persists the aggregate: the question row plus every loaded option.
    async fn save(&self, entity: &Question) -> AppResult<Question> {
        let new_row = NewQuestion::from_entity(entity);
        let mut option_rows: Vec<NewQuestionOptionRow> = entity
            .options()
            .iter()
            .map(NewQuestionOptionRow::from_entity)
            .collect();

        self.session
            .run(move |conn| {
                let start = std::time::Instant::now();
                let model = diesel::insert_into(questions::table)
                    .values(&new_row)
                    .get_result::<QuestionModel>(conn)?;

                for row in option_rows.iter_mut() {
                    row.question_id = model.id;
                }
                let option_models = if option_rows.is_empty() {
                    Vec::new()
                } else {
                    diesel::insert_into(question_options::table)
                        .values(&option_rows)
                        .get_results::<QuestionOptionModel>(conn)?
                };

                LogContext::db_operation(
                    "insert",
                    "questions",
                    Some(start.elapsed().as_millis() as u64),
                );

                let options = option_models
                    .into_iter()
                    .map(|m| m.into_entity())
                    .collect::<AppResult<Vec<_>>>()?;
                model.into_entity(options)
            })
            .await
    }

    async fn update(&self, entity: &Question) -> AppResult<Question> {
        let id = entity.id();
        let changes = QuestionChangeset::from_entity(entity);
        self.session
            .run(move |conn| {
                let model = diesel::update(questions::table.filter(questions::id.eq(id)))
                    .set(&changes)
                    .get_result::<QuestionModel>(conn)
                    .optional()?;
                let Some(model) = model else {
                    return Err(AppError::NotFound(format!(
                        "Question with ID {} not found",
                        id
                    )));
                };
                load_question(conn, model)
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.session
            .run(move |conn| {
                // relies on ON DELETE CASCADE for the option rows
                let n =
                    diesel::delete(questions::table.filter(questions::id.eq(id))).execute(conn)?;
                if n == 0 {
                    return Err(AppError::NotFound(format!(
                        "Question with ID {} not found",
                        id
                    )));
                }
                LogContext::db_operation("delete", "questions", None);
                Ok(())
            })
            .await
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.session
            .run(move |conn| {
                let found = select(exists_dsl(questions::table.filter(questions::id.eq(id))))
                    .get_result::<bool>(conn)?;
                Ok(found)
            })
            .await
    }
}

#[async_trait]
impl QuestionRepository for QuestionRepositoryImpl {
    async fn find_by_topic(&self, topic_id: i32) -> AppResult<Vec<Question>> {
        self.session
            .run(move |conn| {
                let models = questions::table
                    .filter(questions::topic_id.eq(topic_id))
                    .order(questions::id.asc())
                    .load::<QuestionModel>(conn)?;
                load_questions(conn, models)
            })
            .await
    }

    async fn exists_by_text_and_topic(
        &self,
        text: &str,
        topic_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        let needle = text.to_string();
        self.session
            .run(move |conn| {
                let count: i64 = match exclude_id {
                    Some(exclude) => {
                        let pred = sql::<Bool>("LOWER(question_text) = LOWER(")
                            .bind::<Text, _>(needle.as_str())
                            .sql(")");
                        questions::table
                            .filter(pred)
                            .filter(questions::topic_id.eq(topic_id))
                            .filter(questions::id.ne(exclude))
                            .count()
                            .get_result(conn)?
                    }
                    None => {
                        let pred = sql::<Bool>("LOWER(question_text) = LOWER(")
                            .bind::<Text, _>(needle.as_str())
                            .sql(")");
                        questions::table
                            .filter(pred)
                            .filter(questions::topic_id.eq(topic_id))
                            .count()
                            .get_result(conn)?
                    }
                };
                Ok(count > 0)
            })
            .await
    }
}
