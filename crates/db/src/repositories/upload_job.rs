//! Upload job repository.

use std::sync::Arc;

use crate::entities::{UploadJob, upload_job};
use crate::entities::upload_job::JobStatus;
use chrono::Utc;
use rosterd_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

/// Upload job repository for database operations.
#[derive(Clone)]
pub struct UploadJobRepository {
    db: Arc<DatabaseConnection>,
}

impl UploadJobRepository {
    /// Create a new upload job repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an upload job by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<upload_job::Model>> {
        UploadJob::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an upload job by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<upload_job::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::JobNotFound(id.to_string()))
    }

    /// Find an upload job by ID and verify tenant ownership.
    pub async fn find_by_id_and_tenant(
        &self,
        id: &str,
        tenant_id: &str,
    ) -> AppResult<Option<upload_job::Model>> {
        UploadJob::find_by_id(id)
            .filter(upload_job::Column::TenantId.eq(tenant_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an upload job by ID and verify tenant ownership, returning an error if not found.
    pub async fn get_by_id_and_tenant(
        &self,
        id: &str,
        tenant_id: &str,
    ) -> AppResult<upload_job::Model> {
        self.find_by_id_and_tenant(id, tenant_id)
            .await?
            .ok_or_else(|| AppError::JobNotFound(id.to_string()))
    }

    /// Find all upload jobs for a tenant, most recent first.
    pub async fn find_by_tenant(
        &self,
        tenant_id: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<upload_job::Model>> {
        UploadJob::find()
            .filter(upload_job::Column::TenantId.eq(tenant_id))
            .order_by_desc(upload_job::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count upload jobs for a tenant.
    pub async fn count_by_tenant(&self, tenant_id: &str) -> AppResult<u64> {
        UploadJob::find()
            .filter(upload_job::Column::TenantId.eq(tenant_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new upload job.
    pub async fn create(&self, model: upload_job::ActiveModel) -> AppResult<upload_job::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Finalize a job with its row counts.
    ///
    /// The orchestrator that owns the job is the only caller; counts always
    /// satisfy `succeeded + failed == total`.
    pub async fn mark_completed(
        &self,
        id: &str,
        total: i32,
        succeeded: i32,
        failed: i32,
    ) -> AppResult<upload_job::Model> {
        let job = self.get_by_id(id).await?;
        let mut active: upload_job::ActiveModel = job.into();
        active.status = Set(JobStatus::Completed);
        active.total_rows = Set(total);
        active.succeeded_rows = Set(succeeded);
        active.failed_rows = Set(failed);
        active.completed_at = Set(Some(Utc::now().into()));
        self.update(active).await
    }

    /// Mark a job as rejected before any row was processed.
    pub async fn mark_parse_failed(
        &self,
        id: &str,
        error_message: &str,
    ) -> AppResult<upload_job::Model> {
        let job = self.get_by_id(id).await?;
        let mut active: upload_job::ActiveModel = job.into();
        active.status = Set(JobStatus::ParseFailed);
        active.error_message = Set(Some(error_message.to_string()));
        active.completed_at = Set(Some(Utc::now().into()));
        self.update(active).await
    }

    /// Update an upload job.
    async fn update(&self, model: upload_job::ActiveModel) -> AppResult<upload_job::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
