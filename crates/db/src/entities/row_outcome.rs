//! Row outcome entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Terminal status of a single roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The row was provisioned.
    #[sea_orm(string_value = "success")]
    Success,
    /// The row was rejected or provisioning failed.
    #[sea_orm(string_value = "failed")]
    Failed,
}

/// Per-row audit record, written exactly once per data row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "row_outcome")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Job this outcome belongs to.
    #[sea_orm(indexed)]
    pub job_id: String,

    /// 1-based data-row number matching the source file.
    pub row_number: i32,

    /// Outcome of the row.
    pub status: OutcomeStatus,

    /// Created account id, present only on success.
    #[sea_orm(nullable)]
    pub account_id: Option<String>,

    /// Snapshot of the original header/value pairs, for re-display.
    #[sea_orm(column_type = "JsonBinary")]
    pub row_values: Json,

    /// Human-readable failure reason, present only on failure.
    #[sea_orm(nullable)]
    pub error_message: Option<String>,

    /// When this outcome was recorded.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::upload_job::Entity",
        from = "Column::JobId",
        to = "super::upload_job::Column::Id",
        on_delete = "Cascade"
    )]
    UploadJob,
}

impl Related<super::upload_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UploadJob.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
