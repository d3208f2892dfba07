pub mod add_question_option;
pub mod create_question;
pub mod create_subject;
pub mod create_topic;
pub mod delete_question;
pub mod delete_subject;
pub mod delete_topic;
pub mod remove_question_option;
pub mod update_question;
pub mod update_question_option;
pub mod update_subject;
pub mod update_topic;

use crate::application::ports::UnitOfWork;
use crate::log_warn;
use crate::shared::errors::AppResult;

/// Roll the transaction back after a failed write, preserving the
/// original error.
pub(crate) async fn rollback_on_error<T>(
    unit_of_work: &dyn UnitOfWork,
    result: AppResult<T>,
) -> AppResult<T> {
    if result.is_err() {
        if let Err(rollback_err) = unit_of_work.rollback_transaction().await {
            log_warn!("Rollback after failed write also failed: {}", rollback_err);
        }
    }
    result
}
