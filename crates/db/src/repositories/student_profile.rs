//! Student profile repository.

use std::sync::Arc;

use crate::entities::{StudentProfile, student_profile};
use rosterd_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Student profile repository for database operations.
#[derive(Clone)]
pub struct StudentProfileRepository {
    db: Arc<DatabaseConnection>,
}

impl StudentProfileRepository {
    /// Create a new student profile repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a profile by its account ID.
    pub async fn find_by_account_id(
        &self,
        account_id: &str,
    ) -> AppResult<Option<student_profile::Model>> {
        StudentProfile::find_by_id(account_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a profile by roll number within a tenant.
    pub async fn find_by_roll_number_in_tenant(
        &self,
        tenant_id: &str,
        roll_number: &str,
    ) -> AppResult<Option<student_profile::Model>> {
        StudentProfile::find()
            .filter(student_profile::Column::TenantId.eq(tenant_id))
            .filter(student_profile::Column::RollNumber.eq(roll_number.trim()))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new student profile.
    pub async fn create(
        &self,
        model: student_profile::ActiveModel,
    ) -> AppResult<student_profile::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
