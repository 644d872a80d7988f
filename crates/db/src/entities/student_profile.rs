//! Student profile entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain profile for a student, linked 1:1 to an account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: String,

    /// Tenant (institution) this profile belongs to.
    #[sea_orm(indexed)]
    pub tenant_id: String,

    /// Institution-assigned roll number, the second natural key for students.
    #[sea_orm(indexed)]
    pub roll_number: String,

    /// Year of study (1-5).
    pub year_of_study: i32,

    /// Department or programme.
    #[sea_orm(nullable)]
    pub department: Option<String>,

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
