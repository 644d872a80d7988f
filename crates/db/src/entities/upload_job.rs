//! Upload job entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status of an upload job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Rows are being processed.
    #[sea_orm(string_value = "processing")]
    Processing,
    /// All rows reached an outcome (some may have failed).
    #[sea_orm(string_value = "completed")]
    Completed,
    /// The file was rejected before any row was read.
    #[sea_orm(string_value = "parse_failed")]
    ParseFailed,
}

/// Kind of member a roster file creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Student rosters.
    #[sea_orm(string_value = "student")]
    Student,
    /// Trainer rosters.
    #[sea_orm(string_value = "trainer")]
    Trainer,
}

/// One submitted roster upload and its aggregate outcome.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "upload_job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Tenant that owns this job.
    #[sea_orm(indexed)]
    pub tenant_id: String,

    /// Administrator account that submitted the file.
    pub initiated_by: String,

    /// Kind of member the file creates.
    pub member_kind: MemberKind,

    /// Name of the uploaded file, for display.
    pub file_name: String,

    /// Data rows processed. Set at finalization.
    #[sea_orm(default_value = 0)]
    pub total_rows: i32,

    /// Rows that provisioned successfully.
    #[sea_orm(default_value = 0)]
    pub succeeded_rows: i32,

    /// Rows that reached a failed outcome.
    #[sea_orm(default_value = 0)]
    pub failed_rows: i32,

    /// Current status.
    pub status: JobStatus,

    /// Job-level error, set only on parse failure.
    #[sea_orm(nullable)]
    pub error_message: Option<String>,

    /// When this job was created.
    pub created_at: DateTimeWithTimeZone,

    /// When this job reached a terminal status.
    #[sea_orm(nullable)]
    pub completed_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::row_outcome::Entity")]
    RowOutcomes,
}

impl Related<super::row_outcome::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RowOutcomes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
