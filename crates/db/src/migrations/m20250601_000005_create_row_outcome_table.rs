//! Create row outcome table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RowOutcome::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RowOutcome::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(RowOutcome::JobId).string_len(32).not_null())
                    .col(ColumnDef::new(RowOutcome::RowNumber).integer().not_null())
                    .col(ColumnDef::new(RowOutcome::Status).string_len(8).not_null())
                    .col(ColumnDef::new(RowOutcome::AccountId).string_len(32))
                    .col(ColumnDef::new(RowOutcome::RowValues).json_binary().not_null())
                    .col(ColumnDef::new(RowOutcome::ErrorMessage).text())
                    .col(
                        ColumnDef::new(RowOutcome::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_row_outcome_upload_job")
                            .from(RowOutcome::Table, RowOutcome::JobId)
                            .to(UploadJob::Table, UploadJob::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: (job_id, row_number) - exactly one outcome per data row
        manager
            .create_index(
                Index::create()
                    .name("idx_row_outcome_job_row_number")
                    .table(RowOutcome::Table)
                    .col(RowOutcome::JobId)
                    .col(RowOutcome::RowNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RowOutcome::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RowOutcome {
    Table,
    Id,
    JobId,
    RowNumber,
    Status,
    AccountId,
    RowValues,
    ErrorMessage,
    CreatedAt,
}

#[derive(Iden)]
enum UploadJob {
    Table,
    Id,
}
