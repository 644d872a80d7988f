//! Create upload job table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UploadJob::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UploadJob::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(UploadJob::TenantId).string_len(32).not_null())
                    .col(ColumnDef::new(UploadJob::InitiatedBy).string_len(32).not_null())
                    .col(ColumnDef::new(UploadJob::MemberKind).string_len(16).not_null())
                    .col(ColumnDef::new(UploadJob::FileName).string_len(512).not_null())
                    .col(
                        ColumnDef::new(UploadJob::TotalRows)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UploadJob::SucceededRows)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UploadJob::FailedRows)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(UploadJob::Status).string_len(16).not_null())
                    .col(ColumnDef::new(UploadJob::ErrorMessage).text())
                    .col(
                        ColumnDef::new(UploadJob::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(UploadJob::CompletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Index: (tenant_id, created_at) - history listing is always per tenant, by recency
        manager
            .create_index(
                Index::create()
                    .name("idx_upload_job_tenant_created_at")
                    .table(UploadJob::Table)
                    .col(UploadJob::TenantId)
                    .col(UploadJob::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UploadJob::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UploadJob {
    Table,
    Id,
    TenantId,
    InitiatedBy,
    MemberKind,
    FileName,
    TotalRows,
    SucceededRows,
    FailedRows,
    Status,
    ErrorMessage,
    CreatedAt,
    CompletedAt,
}
