//! Trainer profile entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain profile for a trainer, linked 1:1 to an account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trainer_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: String,

    /// Tenant (institution) this profile belongs to.
    #[sea_orm(indexed)]
    pub tenant_id: String,

    /// Primary teaching subject.
    pub specialization: String,

    /// Years of professional experience (0-60).
    pub years_of_experience: i32,

    /// Contact phone number.
    #[sea_orm(nullable)]
    pub phone: Option<String>,

    /// When this profile was created.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_delete = "Cascade"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
