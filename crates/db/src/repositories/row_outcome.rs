//! Row outcome repository.
//!
//! Outcomes are append-only: there is deliberately no update method here.

use std::sync::Arc;

use crate::entities::{RowOutcome, row_outcome};
use crate::entities::row_outcome::OutcomeStatus;
use rosterd_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Row outcome repository for database operations.
#[derive(Clone)]
pub struct RowOutcomeRepository {
    db: Arc<DatabaseConnection>,
}

impl RowOutcomeRepository {
    /// Create a new row outcome repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Append a row outcome.
    pub async fn create(&self, model: row_outcome::ActiveModel) -> AppResult<row_outcome::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find all outcomes for a job, in file order.
    pub async fn find_by_job(&self, job_id: &str) -> AppResult<Vec<row_outcome::Model>> {
        RowOutcome::find()
            .filter(row_outcome::Column::JobId.eq(job_id))
            .order_by_asc(row_outcome::Column::RowNumber)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find failed outcomes for a job, in file order.
    pub async fn find_failed_by_job(&self, job_id: &str) -> AppResult<Vec<row_outcome::Model>> {
        RowOutcome::find()
            .filter(row_outcome::Column::JobId.eq(job_id))
            .filter(row_outcome::Column::Status.eq(OutcomeStatus::Failed))
            .order_by_asc(row_outcome::Column::RowNumber)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count outcomes for a job with the given status.
    pub async fn count_by_job_and_status(
        &self,
        job_id: &str,
        status: OutcomeStatus,
    ) -> AppResult<u64> {
        RowOutcome::find()
            .filter(row_outcome::Column::JobId.eq(job_id))
            .filter(row_outcome::Column::Status.eq(status))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
