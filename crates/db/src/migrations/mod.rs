//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_account_table;
mod m20250601_000002_create_student_profile_table;
mod m20250601_000003_create_trainer_profile_table;
mod m20250601_000004_create_upload_job_table;
mod m20250601_000005_create_row_outcome_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_account_table::Migration),
            Box::new(m20250601_000002_create_student_profile_table::Migration),
            Box::new(m20250601_000003_create_trainer_profile_table::Migration),
            Box::new(m20250601_000004_create_upload_job_table::Migration),
            Box::new(m20250601_000005_create_row_outcome_table::Migration),
        ]
    }
}
