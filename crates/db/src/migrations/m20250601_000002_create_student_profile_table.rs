//! Create student profile table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentProfile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfile::AccountId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentProfile::TenantId).string_len(32).not_null())
                    .col(ColumnDef::new(StudentProfile::RollNumber).string_len(64).not_null())
                    .col(ColumnDef::new(StudentProfile::YearOfStudy).integer().not_null())
                    .col(ColumnDef::new(StudentProfile::Department).string_len(256))
                    .col(ColumnDef::new(StudentProfile::Phone).string_len(32))
                    .col(
                        ColumnDef::new(StudentProfile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_profile_account")
                            .from(StudentProfile::Table, StudentProfile::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (tenant_id, roll_number) - the second natural key for students
        manager
            .create_index(
                Index::create()
                    .name("idx_student_profile_tenant_roll_number")
                    .table(StudentProfile::Table)
                    .col(StudentProfile::TenantId)
                    .col(StudentProfile::RollNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentProfile::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StudentProfile {
    Table,
    AccountId,
    TenantId,
    RollNumber,
    YearOfStudy,
    Department,
    Phone,
    CreatedAt,
}

#[derive(Iden)]
enum Account {
    Table,
    Id,
}
