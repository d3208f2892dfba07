use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists as exists_dsl, select, sql};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};

use crate::domain::entities::{AggregateRoot, Topic};
use crate::domain::repositories::{Repository, TopicRepository};
use crate::infrastructure::database::models::{
    NewTopic, QuestionModel, TopicChangeset, TopicModel,
};
use crate::infrastructure::database::schema::{questions, topics};
use crate::infrastructure::database::session::DbSession;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

pub struct TopicRepositoryImpl {
    session: Arc<DbSession>,
}

impl TopicRepositoryImpl {
    pub fn new(session: Arc<DbSession>) -> Self {
        Self { session }
    }
}

/// Hydrate one topic with its question collection. Options stay unloaded
/// at this level; question aggregates load them through their own
/// repository.
fn load_topic(conn: &mut PgConnection, model: TopicModel) -> AppResult<Topic> {
    let question_rows = QuestionModel::belonging_to(&model)
        .order(questions::id.asc())
        .load::<QuestionModel>(conn)?;
    let loaded = question_rows
        .into_iter()
        .map(|q| q.into_entity(Vec::new()))
        .collect::<AppResult<Vec<_>>>()?;
    model.into_entity(loaded)
}

/// Batch-hydrate topics, grouping question rows per topic.
fn load_topics(conn: &mut PgConnection, models: Vec<TopicModel>) -> AppResult<Vec<Topic>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let question_rows: Vec<QuestionModel> =
        QuestionModel::belonging_to(&models).load::<QuestionModel>(conn)?;
    let grouped = question_rows.grouped_by(&models);

    models
        .into_iter()
        .zip(grouped)
        .map(|(model, rows)| {
            let loaded = rows
                .into_iter()
                .map(|q| q.into_entity(Vec::new()))
                .collect::<AppResult<Vec<_>>>()?;
            model.into_entity(loaded)
        })
        .collect()
}

#[async_trait]
impl Repository<Topic> for TopicRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Topic>> {
        self.session
            .run(move |conn| {
                let model = topics::table
                    .filter(topics::id.eq(id))
                    .first::<TopicModel>(conn)
                    .optional()?;
                match model {
                    Some(m) => Ok(Some(load_topic(conn, m)?)),
                    None => Ok(None),
                }
            })
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<Topic>> {
        self.session
            .run(|conn| {
                let models = topics::table
                    .order(topics::name.asc())
                    .load::<TopicModel>(conn)?;
                load_topics(conn, models)
            })
            .await
    }

    async fn find_page(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Topic>> {
        self.session
            .run(move |conn| {
                let total = topics::table.count().get_result::<i64>(conn)?;
                let models = topics::table
                    .order(topics::name.asc())
                    .offset(pagination.offset())
                    .limit(pagination.limit())
                    .load::<TopicModel>(conn)?;
                let items = load_topics(conn, models)?;
                Ok(PaginatedResult::new(items, total as u64, &pagination))
            })
            .await
    }

    async fn save(&self, entity: &Topic) -> AppResult<Topic> {
        let new_row = NewTopic::from_entity(entity);
        self.session
            .run(move |conn| {
                let start = std::time::Instant::now();
                let model = diesel::insert_into(topics::table)
                    .values(&new_row)
                    .get_result::<TopicModel>(conn)?;
                LogContext::db_operation(
                    "insert",
                    "topics",
                    Some(start.elapsed().as_millis() as u64),
                );
                model.into_entity(Vec::new())
            })
            .await
    }

    async fn update(&self, entity: &Topic) -> AppResult<Topic> {
        let id = entity.id();
        let changes = TopicChangeset::from_entity(entity);
        self.session
            .run(move |conn| {
                let model = diesel::update(topics::table.filter(topics::id.eq(id)))
                    .set(&changes)
                    .get_result::<TopicModel>(conn)
                    .optional()?;
                let Some(model) = model else {
                    return Err(AppError::NotFound(format!("Topic with ID {} not found", id)));
                };
                load_topic(conn, model)
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.session
            .run(move |conn| {
                // relies on ON DELETE CASCADE through questions and options
                let n = diesel::delete(topics::table.filter(topics::id.eq(id))).execute(conn)?;
                if n == 0 {
                    return Err(AppError::NotFound(format!("Topic with ID {} not found", id)));
                }
                LogContext::db_operation("delete", "topics", None);
                Ok(())
            })
            .await
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.session
            .run(move |conn| {
                let found = select(exists_dsl(topics::table.filter(topics::id.eq(id))))
                    .get_result::<bool>(conn)?;
                Ok(found)
            })
            .await
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryImpl {
    async fn find_by_subject(&self, subject_id: i32) -> AppResult<Vec<Topic>> {
        self.session
            .run(move |conn| {
                let models = topics::table
                    .filter(topics::subject_id.eq(subject_id))
                    .order(topics::name.asc())
                    .load::<TopicModel>(conn)?;
                load_topics(conn, models)
            })
            .await
    }

    async fn exists_by_name_and_subject(
        &self,
        name: &str,
        subject_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        let needle = name.to_string();
        self.session
            .run(move |conn| {
                let count: i64 = match exclude_id {
                    Some(exclude) => {
                        let pred = sql::<Bool>("LOWER(name) = LOWER(")
                            .bind::<Text, _>(needle.as_str())
                            .sql(")");
                        topics::table
                            .filter(pred)
                            .filter(topics::subject_id.eq(subject_id))
                            .filter(topics::id.ne(exclude))
                            .count()
                            .get_result(conn)?
                    }
                    None => {
                        let pred = sql::<Bool>("LOWER(name) = LOWER(")
                            .bind::<Text, _>(needle.as_str())
                            .sql(")");
                        topics::table
                            .filter(pred)
                            .filter(topics::subject_id.eq(subject_id))
                            .count()
                            .get_result(conn)?
                    }
                };
                Ok(count > 0)
            })
            .await
    }
}
