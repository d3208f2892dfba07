use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use tokio::sync::Mutex;
use tokio::task;

use crate::infrastructure::database::connection::{Database, DbConnection};
use crate::shared::errors::{AppError, AppResult};

/// Transaction-aware connection source shared by the repositories and the
/// unit of work.
///
/// While a transaction is open every `run` call is serialized onto the
/// transaction's connection; otherwise each call borrows a pooled
/// connection. Diesel is synchronous, so closures execute on the blocking
/// thread pool.
pub struct DbSession {
    db: Arc<Database>,
    tx: Mutex<Option<DbConnection>>,
}

impl DbSession {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            tx: Mutex::new(None),
        }
    }

    /// Execute a closure against the active transaction connection, or a
    /// pooled one when no transaction is open.
    pub async fn run<R, F>(&self, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut PgConnection) -> AppResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let taken = self.tx.lock().await.take();
        match taken {
            Some(mut conn) => {
                let (conn, out) = task::spawn_blocking(move || {
                    let out = f(&mut conn);
                    (conn, out)
                })
                .await?;
                *self.tx.lock().await = Some(conn);
                out
            }
            None => {
                let db = Arc::clone(&self.db);
                task::spawn_blocking(move || {
                    let mut conn = db.get_connection()?;
                    f(&mut conn)
                })
                .await?
            }
        }
    }

    /// Open a transaction. Nested transactions are not supported.
    pub async fn begin(&self) -> AppResult<()> {
        let mut guard = self.tx.lock().await;
        if guard.is_some() {
            return Err(AppError::Database(
                "Transaction already active on this session".to_string(),
            ));
        }

        let db = Arc::clone(&self.db);
        let conn = task::spawn_blocking(move || -> AppResult<DbConnection> {
            let mut conn = db.get_connection()?;
            conn.batch_execute("BEGIN")
                .map_err(AppError::from)?;
            Ok(conn)
        })
        .await??;

        *guard = Some(conn);
        Ok(())
    }

    /// Commit the open transaction; a no-op when none is active.
    pub async fn commit(&self) -> AppResult<()> {
        let taken = self.tx.lock().await.take();
        match taken {
            Some(mut conn) => {
                task::spawn_blocking(move || {
                    conn.batch_execute("COMMIT").map_err(AppError::from)
                })
                .await?
            }
            None => Ok(()),
        }
    }

    /// Roll back the open transaction; a no-op when none is active.
    pub async fn rollback(&self) -> AppResult<()> {
        let taken = self.tx.lock().await.take();
        match taken {
            Some(mut conn) => {
                task::spawn_blocking(move || {
                    conn.batch_execute("ROLLBACK").map_err(AppError::from)
                })
                .await?
            }
            None => Ok(()),
        }
    }
}
