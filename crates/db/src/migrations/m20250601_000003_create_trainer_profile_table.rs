//! Create trainer profile table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainerProfile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainerProfile::AccountId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainerProfile::TenantId).string_len(32).not_null())
                    .col(
                        ColumnDef::new(TrainerProfile::Specialization)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainerProfile::YearsOfExperience)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TrainerProfile::Phone).string_len(32))
                    .col(
                        ColumnDef::new(TrainerProfile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainer_profile_account")
                            .from(TrainerProfile::Table, TrainerProfile::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: tenant_id
        manager
            .create_index(
                Index::create()
                    .name("idx_trainer_profile_tenant_id")
                    .table(TrainerProfile::Table)
                    .col(TrainerProfile::TenantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainerProfile::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TrainerProfile {
    Table,
    AccountId,
    TenantId,
    Specialization,
    YearsOfExperience,
    Phone,
    CreatedAt,
}

#[derive(Iden)]
enum Account {
    Table,
    Id,
}
