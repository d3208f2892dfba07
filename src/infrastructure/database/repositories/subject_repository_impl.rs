use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists as exists_dsl, select, sql};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};

use crate::domain::entities::{AggregateRoot, Subject};
use crate::domain::repositories::{Repository, SubjectRepository};
use crate::infrastructure::database::models::{
    NewSubject, SubjectChangeset, SubjectModel, TopicModel,
};
use crate::infrastructure::database::schema::{subjects, topics};
use crate::infrastructure::database::session::DbSession;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

pub struct SubjectRepositoryImpl {
    session: Arc<DbSession>,
}

impl SubjectRepositoryImpl {
    pub fn new(session: Arc<DbSession>) -> Self {
        Self { session }
    }
}

/// Hydrate one subject with its topic collection (one level deep).
fn load_subject(conn: &mut PgConnection, model: SubjectModel) -> AppResult<Subject> {
    let topic_rows = TopicModel::belonging_to(&model)
        .order(topics::name.asc())
        .load::<TopicModel>(conn)?;
    let loaded = topic_rows
        .into_iter()
        .map(|t| t.into_entity(Vec::new()))
        .collect::<AppResult<Vec<_>>>()?;
    model.into_entity(loaded)
}

/// Batch-hydrate subjects, grouping topic rows per subject.
fn load_subjects(conn: &mut PgConnection, models: Vec<SubjectModel>) -> AppResult<Vec<Subject>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let topic_rows: Vec<TopicModel> = TopicModel::belonging_to(&models).load::<TopicModel>(conn)?;
    let grouped = topic_rows.grouped_by(&models);

    models
        .into_iter()
        .zip(grouped)
        .map(|(model, rows)| {
            let loaded = rows
                .into_iter()
                .map(|t| t.into_entity(Vec::new()))
                .collect::<AppResult<Vec<_>>>()?;
            model.into_entity(loaded)
        })
        .collect()
}

#[async_trait]
impl Repository<Subject> for SubjectRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subject>> {
        self.session
            .run(move |conn| {
                let model = subjects::table
                    .filter(subjects::id.eq(id))
                    .first::<SubjectModel>(conn)
                    .optional()?;
                match model {
                    Some(m) => Ok(Some(load_subject(conn, m)?)),
                    None => Ok(None),
                }
            })
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<Subject>> {
        self.session
            .run(|conn| {
                let models = subjects::table
                    .order(subjects::name.asc())
                    .load::<SubjectModel>(conn)?;
                load_subjects(conn, models)
            })
            .await
    }

    async fn find_page(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Subject>> {
        self.session
            .run(move |conn| {
                let total = subjects::table.count().get_result::<i64>(conn)?;
                let models = subjects::table
                    .order(subjects::name.asc())
                    .offset(pagination.offset())
                    .limit(pagination.limit())
                    .load::<SubjectModel>(conn)?;
                let items = load_subjects(conn, models)?;
                Ok(PaginatedResult::new(items, total as u64, &pagination))
            })
            .await
    }

    async fn save(&self, entity: &Subject) -> AppResult<Subject> {
        let new_row = NewSubject::from_entity(entity);
        self.session
            .run(move |conn| {
                let start = std::time::Instant::now();
                let model = diesel::insert_into(subjects::table)
                    .values(&new_row)
                    .get_result::<SubjectModel>(conn)?;
                LogContext::db_operation(
                    "insert",
                    "subjects",
                    Some(start.elapsed().as_millis() as u64),
                );
                model.into_entity(Vec::new())
            })
            .await
    }

    async fn update(&self, entity: &Subject) -> AppResult<Subject> {
        let id = entity.id();
        let changes = SubjectChangeset::from_entity(entity);
        self.session
            .run(move |conn| {
                let model = diesel::update(subjects::table.filter(subjects::id.eq(id)))
                    .set(&changes)
                    .get_result::<SubjectModel>(conn)
                    .optional()?;
                let Some(model) = model else {
                    return Err(AppError::NotFound(format!(
                        "Subject with ID {} not found",
                        id
                    )));
                };
                load_subject(conn, model)
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.session
            .run(move |conn| {
                // relies on ON DELETE CASCADE through topics and questions
                let n = diesel::delete(subjects::table.filter(subjects::id.eq(id)))
                    .execute(conn)?;
                if n == 0 {
                    return Err(AppError::NotFound(format!(
                        "Subject with ID {} not found",
                        id
                    )));
                }
                LogContext::db_operation("delete", "subjects", None);
                Ok(())
            })
            .await
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.session
            .run(move |conn| {
                let found = select(exists_dsl(subjects::table.filter(subjects::id.eq(id))))
                    .get_result::<bool>(conn)?;
                Ok(found)
            })
            .await
    }
}

#[async_trait]
impl SubjectRepository for SubjectRepositoryImpl {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Subject>> {
        let needle = name.to_string();
        self.session
            .run(move |conn| {
                // Case-insensitive equality with bindings (no interpolation).
                let pred = sql::<Bool>("LOWER(name) = LOWER(")
                    .bind::<Text, _>(needle.as_str())
                    .sql(")");

                let model = subjects::table
                    .filter(pred)
                    .first::<SubjectModel>(conn)
                    .optional()?;
                match model {
                    Some(m) => Ok(Some(load_subject(conn, m)?)),
                    None => Ok(None),
                }
            })
            .await
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let needle = name.to_string();
        self.session
            .run(move |conn| {
                let count: i64 = match exclude_id {
                    Some(exclude) => {
                        let pred = sql::<Bool>("LOWER(name) = LOWER(")
                            .bind::<Text, _>(needle.as_str())
                            .sql(")");
                        subjects::table
                            .filter(pred)
                            .filter(subjects::id.ne(exclude))
                            .count()
                            .get_result(conn)?
                    }
                    None => {
                        let pred = sql::<Bool>("LOWER(name) = LOWER(")
                            .bind::<Text, _>(needle.as_str())
                            .sql(")");
                        subjects::table.filter(pred).count().get_result(conn)?
                    }
                };
                Ok(count > 0)
            })
            .await
    }
}
