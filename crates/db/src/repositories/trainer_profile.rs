//! Trainer profile repository.

use std::sync::Arc;

use crate::entities::{TrainerProfile, trainer_profile};
use rosterd_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

/// Trainer profile repository for database operations.
#[derive(Clone)]
pub struct TrainerProfileRepository {
    db: Arc<DatabaseConnection>,
}

impl TrainerProfileRepository {
    /// Create a new trainer profile repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a profile by its account ID.
    pub async fn find_by_account_id(
        &self,
        account_id: &str,
    ) -> AppResult<Option<trainer_profile::Model>> {
        TrainerProfile::find_by_id(account_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new trainer profile.
    pub async fn create(
        &self,
        model: trainer_profile::ActiveModel,
    ) -> AppResult<trainer_profile::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
