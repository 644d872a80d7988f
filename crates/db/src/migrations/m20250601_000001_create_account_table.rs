//! Create account table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Account::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Account::TenantId).string_len(32).not_null())
                    .col(ColumnDef::new(Account::Email).string_len(256).not_null())
                    .col(ColumnDef::new(Account::EmailLower).string_len(256).not_null())
                    .col(ColumnDef::new(Account::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Account::Role).string_len(16).not_null())
                    .col(ColumnDef::new(Account::Password).string_len(256))
                    .col(ColumnDef::new(Account::Token).string_len(64))
                    .col(
                        ColumnDef::new(Account::MustChangePassword)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Account::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Account::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Account::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Unique index: (tenant_id, email_lower) - the natural key for duplicate checks
        manager
            .create_index(
                Index::create()
                    .name("idx_account_tenant_email_lower")
                    .table(Account::Table)
                    .col(Account::TenantId)
                    .col(Account::EmailLower)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Unique index: token
        manager
            .create_index(
                Index::create()
                    .name("idx_account_token")
                    .table(Account::Table)
                    .col(Account::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index: tenant_id
        manager
            .create_index(
                Index::create()
                    .name("idx_account_tenant_id")
                    .table(Account::Table)
                    .col(Account::TenantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Account {
    Table,
    Id,
    TenantId,
    Email,
    EmailLower,
    Name,
    Role,
    Password,
    Token,
    MustChangePassword,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
