//! Account entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// A learner enrolled at the institution.
    #[sea_orm(string_value = "student")]
    Student,
    /// A member of the training staff.
    #[sea_orm(string_value = "trainer")]
    Trainer,
    /// An institution administrator.
    #[sea_orm(string_value = "admin")]
    Admin,
}

/// An authentication account, scoped to one tenant.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Tenant (institution) this account belongs to.
    #[sea_orm(indexed)]
    pub tenant_id: String,

    /// Login email, as provided.
    pub email: String,

    /// Lowercased email, the natural key within the tenant.
    #[sea_orm(indexed)]
    pub email_lower: String,

    /// Full display name.
    pub name: String,

    /// Role assigned at creation.
    pub role: AccountRole,

    /// Argon2 hash of the current password.
    #[sea_orm(nullable)]
    pub password: Option<String>,

    /// Opaque API token.
    #[sea_orm(nullable)]
    pub token: Option<String>,

    /// Set for imported members carrying a temporary credential.
    #[sea_orm(default_value = false)]
    pub must_change_password: bool,

    /// Cleared until the member logs in for the first time.
    #[sea_orm(default_value = false)]
    pub is_active: bool,

    /// When this account was created.
    pub created_at: DateTimeWithTimeZone,

    /// When this account was last updated.
    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::student_profile::Entity")]
    StudentProfile,
    #[sea_orm(has_one = "super::trainer_profile::Entity")]
    TrainerProfile,
}

impl Related<super::student_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl Related<super::trainer_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainerProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
