//! Roster import orchestration.
//!
//! Drives one upload job end to end: parse gate, then the sequential
//! validate → duplicate-check → provision loop, then finalization. Every
//! data row reaches exactly one recorded outcome; nothing a single row does
//! can abort its siblings. There is intentionally no transaction around the
//! whole loop: the row-local transaction inside provisioning is the unit of
//! isolation.

use std::time::Duration;

use chrono::Utc;
use rosterd_common::{AppResult, Config, IdGenerator};
use rosterd_db::entities::row_outcome::OutcomeStatus;
use rosterd_db::entities::upload_job::{JobStatus, MemberKind};
use rosterd_db::entities::{row_outcome, upload_job};
use rosterd_db::repositories::{RowOutcomeRepository, UploadJobRepository};
use sea_orm::Set;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::duplicate::DuplicateChecker;
use super::provision::{ProvisionService, ProvisionedMember};
use super::roster::RosterDocument;
use super::validate::validate_member;
use super::welcome::WelcomeService;

/// Identity of the caller, passed explicitly into the pipeline.
///
/// Always taken from the authenticated request context, never from the
/// uploaded file.
#[derive(Debug, Clone)]
pub struct TenantContext {
    /// Tenant (institution) the upload belongs to.
    pub tenant_id: String,
    /// Account that initiated the upload.
    pub actor_id: String,
}

/// One failed row, as reported back to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFailure {
    /// 1-based data-row number in the uploaded file.
    pub row_number: u32,
    /// Human-readable reason.
    pub message: String,
    /// The original field values, for correction and re-upload.
    pub values: serde_json::Value,
}

/// Aggregate result of one upload job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Job ID.
    pub job_id: String,
    /// Terminal job status.
    pub status: JobStatus,
    /// Data rows processed.
    pub total_rows: u32,
    /// Rows that provisioned successfully.
    pub succeeded_rows: u32,
    /// Rows that failed.
    pub failed_rows: u32,
    /// Job-level error, set only when parsing rejected the file.
    pub error_message: Option<String>,
    /// Per-row failures, in file order.
    pub failures: Vec<RowFailure>,
}

/// One job with its row outcomes.
#[derive(Debug, Clone)]
pub struct JobDetail {
    /// The job record.
    pub job: upload_job::Model,
    /// Its row outcomes, in file order.
    pub outcomes: Vec<row_outcome::Model>,
}

/// Roster import service: the job orchestrator and result store front.
#[derive(Clone)]
pub struct ImportService {
    job_repo: UploadJobRepository,
    outcome_repo: RowOutcomeRepository,
    duplicates: DuplicateChecker,
    provisioner: ProvisionService,
    welcome: WelcomeService,
    id_gen: IdGenerator,
    max_rows: usize,
    welcome_timeout: Duration,
}

impl ImportService {
    /// Create a new import service.
    #[must_use]
    pub fn new(
        job_repo: UploadJobRepository,
        outcome_repo: RowOutcomeRepository,
        duplicates: DuplicateChecker,
        provisioner: ProvisionService,
        welcome: WelcomeService,
        config: &Config,
    ) -> Self {
        Self {
            job_repo,
            outcome_repo,
            duplicates,
            provisioner,
            welcome,
            id_gen: IdGenerator::new(),
            max_rows: config.import.max_rows,
            welcome_timeout: Duration::from_secs(config.email.send_timeout_secs),
        }
    }

    /// Run one upload job to completion.
    ///
    /// Rows are processed strictly in file order so the duplicate check for
    /// row K observes rows 1..K-1 of the same job. When `cancel` fires, the
    /// row in progress finishes, the loop stops, and the job finalizes with
    /// the counts accumulated so far; already-written outcomes are never
    /// discarded.
    pub async fn run(
        &self,
        ctx: &TenantContext,
        kind: MemberKind,
        file_name: &str,
        data: Vec<u8>,
        cancel: CancellationToken,
    ) -> AppResult<ImportSummary> {
        let job = self.create_job(ctx, kind, file_name).await?;

        tracing::info!(
            job_id = %job.id,
            tenant_id = %ctx.tenant_id,
            kind = ?kind,
            file_name = file_name,
            "Roster upload accepted"
        );

        // Parse gate: header mismatch or an undecodable file fails the whole
        // job before any row is read.
        let document = match RosterDocument::open(kind, data) {
            Ok(document) => document,
            Err(e) => return self.fail_before_rows(&job.id, &e.to_string()).await,
        };

        let rows: Vec<_> = document.rows().collect();
        if rows.len() > self.max_rows {
            let message = format!(
                "Roster has {} data rows, the limit is {}",
                rows.len(),
                self.max_rows
            );
            return self.fail_before_rows(&job.id, &message).await;
        }

        let mut succeeded: u32 = 0;
        let mut failures: Vec<RowFailure> = Vec::new();

        for parsed in rows {
            if cancel.is_cancelled() {
                tracing::info!(
                    job_id = %job.id,
                    "Upload cancelled, finalizing with rows processed so far"
                );
                break;
            }

            let failure = match parsed {
                Err(bad) => Some(RowFailure {
                    row_number: bad.row_number,
                    message: bad.message,
                    values: bad.snapshot,
                }),
                Ok(row) => {
                    let row_number = row.row_number;
                    let snapshot = row.snapshot();

                    match validate_member(kind, &row) {
                        Err(rejection) => Some(RowFailure {
                            row_number,
                            message: rejection.message,
                            values: snapshot,
                        }),
                        Ok(member) => {
                            match self.duplicates.check(&ctx.tenant_id, &member).await {
                                Err(e) => Some(RowFailure {
                                    row_number,
                                    message: e.to_string(),
                                    values: snapshot,
                                }),
                                Ok(Some(conflict)) => Some(RowFailure {
                                    row_number,
                                    message: conflict,
                                    values: snapshot,
                                }),
                                Ok(None) => {
                                    match self
                                        .provisioner
                                        .provision(&ctx.tenant_id, kind, &member)
                                        .await
                                    {
                                        Err(e) => Some(RowFailure {
                                            row_number,
                                            message: e.to_string(),
                                            values: snapshot,
                                        }),
                                        Ok(provisioned) => {
                                            self.dispatch_welcome(&provisioned).await;
                                            self.record_success(
                                                &job.id,
                                                row_number,
                                                &provisioned.account.id,
                                                snapshot,
                                            )
                                            .await?;
                                            succeeded += 1;
                                            None
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            };

            if let Some(failure) = failure {
                self.record_failure(&job.id, &failure).await?;
                failures.push(failure);
            }
        }

        let failed = failures.len() as u32;
        let total = succeeded + failed;

        let finalized = self
            .job_repo
            .mark_completed(&job.id, total as i32, succeeded as i32, failed as i32)
            .await?;

        tracing::info!(
            job_id = %finalized.id,
            total = total,
            succeeded = succeeded,
            failed = failed,
            "Roster upload completed"
        );

        Ok(ImportSummary {
            job_id: finalized.id,
            status: finalized.status,
            total_rows: total,
            succeeded_rows: succeeded,
            failed_rows: failed,
            error_message: None,
            failures,
        })
    }

    /// Fetch one job with its row outcomes, tenant-checked.
    pub async fn get_job(&self, tenant_id: &str, job_id: &str) -> AppResult<JobDetail> {
        let job = self.job_repo.get_by_id_and_tenant(job_id, tenant_id).await?;
        let outcomes = self.outcome_repo.find_by_job(&job.id).await?;
        Ok(JobDetail { job, outcomes })
    }

    /// List jobs for a tenant, most recent first.
    pub async fn list_jobs(
        &self,
        tenant_id: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<upload_job::Model>> {
        self.job_repo.find_by_tenant(tenant_id, limit, offset).await
    }

    /// Create the job record in its initial state.
    async fn create_job(
        &self,
        ctx: &TenantContext,
        kind: MemberKind,
        file_name: &str,
    ) -> AppResult<upload_job::Model> {
        let model = upload_job::ActiveModel {
            id: Set(self.id_gen.generate()),
            tenant_id: Set(ctx.tenant_id.clone()),
            initiated_by: Set(ctx.actor_id.clone()),
            member_kind: Set(kind),
            file_name: Set(file_name.to_string()),
            total_rows: Set(0),
            succeeded_rows: Set(0),
            failed_rows: Set(0),
            status: Set(JobStatus::Processing),
            error_message: Set(None),
            created_at: Set(Utc::now().into()),
            completed_at: Set(None),
        };
        self.job_repo.create(model).await
    }

    /// Terminate a job that was rejected before any row was read.
    async fn fail_before_rows(&self, job_id: &str, message: &str) -> AppResult<ImportSummary> {
        let job = self.job_repo.mark_parse_failed(job_id, message).await?;

        tracing::warn!(job_id = %job.id, error = message, "Roster upload rejected");

        Ok(ImportSummary {
            job_id: job.id,
            status: job.status,
            total_rows: 0,
            succeeded_rows: 0,
            failed_rows: 0,
            error_message: job.error_message,
            failures: Vec::new(),
        })
    }

    /// Record a successful row outcome.
    async fn record_success(
        &self,
        job_id: &str,
        row_number: u32,
        account_id: &str,
        values: serde_json::Value,
    ) -> AppResult<()> {
        let model = row_outcome::ActiveModel {
            id: Set(self.id_gen.generate()),
            job_id: Set(job_id.to_string()),
            row_number: Set(row_number as i32),
            status: Set(OutcomeStatus::Success),
            account_id: Set(Some(account_id.to_string())),
            row_values: Set(values),
            error_message: Set(None),
            created_at: Set(Utc::now().into()),
        };
        self.outcome_repo.create(model).await?;
        Ok(())
    }

    /// Record a failed row outcome.
    async fn record_failure(&self, job_id: &str, failure: &RowFailure) -> AppResult<()> {
        let model = row_outcome::ActiveModel {
            id: Set(self.id_gen.generate()),
            job_id: Set(job_id.to_string()),
            row_number: Set(failure.row_number as i32),
            status: Set(OutcomeStatus::Failed),
            account_id: Set(None),
            row_values: Set(failure.values.clone()),
            error_message: Set(Some(failure.message.clone())),
            created_at: Set(Utc::now().into()),
        };
        self.outcome_repo.create(model).await?;

        tracing::debug!(
            job_id = job_id,
            row = failure.row_number,
            reason = %failure.message,
            "Row failed"
        );
        Ok(())
    }

    /// Dispatch the welcome message, best-effort.
    ///
    /// Bounded by a timeout so a slow channel cannot stall row throughput;
    /// failure is logged and never fails the row.
    async fn dispatch_welcome(&self, provisioned: &ProvisionedMember) {
        let send = self
            .welcome
            .send_welcome(&provisioned.account, &provisioned.temp_password);

        match tokio::time::timeout(self.welcome_timeout, send).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(
                account_id = %provisioned.account.id,
                error = %e,
                "Welcome delivery failed"
            ),
            Err(_) => tracing::warn!(
                account_id = %provisioned.account.id,
                "Welcome delivery timed out"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rosterd_common::AppError;
    use rosterd_common::config::{
        DatabaseConfig, EmailConfig, ImportConfig, ServerConfig,
    };
    use rosterd_db::entities::account::AccountRole;
    use rosterd_db::entities::{account, student_profile};
    use rosterd_db::repositories::{AccountRepository, StudentProfileRepository};
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use std::sync::Arc;

    use crate::services::welcome::{NoOpWelcome, WelcomeDelivery};

    fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                url: "https://rosterd.example.edu".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost/test".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            email: EmailConfig::default(),
            import: ImportConfig::default(),
        }
    }

    fn create_test_service(db: Arc<DatabaseConnection>, welcome: WelcomeService) -> ImportService {
        let job_repo = UploadJobRepository::new(db.clone());
        let outcome_repo = RowOutcomeRepository::new(db.clone());
        let duplicates = DuplicateChecker::new(
            AccountRepository::new(db.clone()),
            StudentProfileRepository::new(db.clone()),
        );
        let provisioner = ProvisionService::new(db);
        let config = create_test_config();
        ImportService::new(
            job_repo,
            outcome_repo,
            duplicates,
            provisioner,
            welcome,
            &config,
        )
    }

    fn test_ctx() -> TenantContext {
        TenantContext {
            tenant_id: "t1".to_string(),
            actor_id: "admin1".to_string(),
        }
    }

    fn job_model(id: &str, status: JobStatus) -> upload_job::Model {
        upload_job::Model {
            id: id.to_string(),
            tenant_id: "t1".to_string(),
            initiated_by: "admin1".to_string(),
            member_kind: MemberKind::Student,
            file_name: "students.csv".to_string(),
            total_rows: 0,
            succeeded_rows: 0,
            failed_rows: 0,
            status,
            error_message: None,
            created_at: Utc::now().into(),
            completed_at: None,
        }
    }

    fn account_model(n: u32) -> account::Model {
        account::Model {
            id: format!("acct{n}"),
            tenant_id: "t1".to_string(),
            email: format!("member{n}@example.edu"),
            email_lower: format!("member{n}@example.edu"),
            name: format!("Member {n}"),
            role: AccountRole::Student,
            password: Some("$argon2id$hash".to_string()),
            token: None,
            must_change_password: true,
            is_active: false,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    fn profile_model(n: u32) -> student_profile::Model {
        student_profile::Model {
            account_id: format!("acct{n}"),
            tenant_id: "t1".to_string(),
            roll_number: format!("CS-10{n:02}"),
            year_of_study: 2,
            department: None,
            phone: None,
            created_at: Utc::now().into(),
        }
    }

    fn outcome_model(n: u32, status: OutcomeStatus) -> row_outcome::Model {
        row_outcome::Model {
            id: format!("out{n}"),
            job_id: "j1".to_string(),
            row_number: n as i32,
            status,
            account_id: None,
            row_values: serde_json::json!({}),
            error_message: None,
            created_at: Utc::now().into(),
        }
    }

    const fn no_accounts() -> Vec<account::Model> {
        Vec::new()
    }

    const fn no_profiles() -> Vec<student_profile::Model> {
        Vec::new()
    }

    #[tokio::test]
    async fn test_header_mismatch_fails_job_with_zero_rows() {
        // Sequence: job insert, then mark_parse_failed (fetch + update).
        let mut rejected = job_model("j1", JobStatus::ParseFailed);
        rejected.error_message = Some("Header mismatch".to_string());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([
                    [job_model("j1", JobStatus::Processing)],
                    [job_model("j1", JobStatus::Processing)],
                    [rejected],
                ])
                .into_connection(),
        );

        let service = create_test_service(db, Arc::new(NoOpWelcome));
        let data = b"full_name,email\nAsha,asha@example.edu\n".to_vec();

        let summary = service
            .run(
                &test_ctx(),
                MemberKind::Student,
                "students.csv",
                data,
                CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(summary.status, JobStatus::ParseFailed);
        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.succeeded_rows, 0);
        assert_eq!(summary.failed_rows, 0);
        assert!(summary.failures.is_empty());
        assert!(summary.error_message.is_some());
    }

    #[tokio::test]
    async fn test_row_limit_fails_job_before_processing() {
        let mut rejected = job_model("j1", JobStatus::ParseFailed);
        rejected.error_message = Some("Roster has 2 data rows, the limit is 1".to_string());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([
                    [job_model("j1", JobStatus::Processing)],
                    [job_model("j1", JobStatus::Processing)],
                    [rejected],
                ])
                .into_connection(),
        );

        let job_repo = UploadJobRepository::new(db.clone());
        let outcome_repo = RowOutcomeRepository::new(db.clone());
        let duplicates = DuplicateChecker::new(
            AccountRepository::new(db.clone()),
            StudentProfileRepository::new(db.clone()),
        );
        let provisioner = ProvisionService::new(db);
        let mut config = create_test_config();
        config.import.max_rows = 1;
        let service = ImportService::new(
            job_repo,
            outcome_repo,
            duplicates,
            provisioner,
            Arc::new(NoOpWelcome),
            &config,
        );

        let data = b"full_name,email,roll_number,year_of_study,department,phone\n\
A,a@example.edu,CS-1,1,,\n\
B,b@example.edu,CS-2,1,,\n"
            .to_vec();

        let summary = service
            .run(
                &test_ctx(),
                MemberKind::Student,
                "students.csv",
                data,
                CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(summary.status, JobStatus::ParseFailed);
        assert_eq!(summary.total_rows, 0);
    }

    /// Mixed batch: five rows where row 3 carries an invalid email and
    /// row 5 reuses row 1's email. Three succeed, two fail, and the
    /// failure messages are specific.
    #[tokio::test]
    async fn test_mixed_batch_isolates_bad_rows() {
        let mut finalized = job_model("j1", JobStatus::Completed);
        finalized.total_rows = 5;
        finalized.succeeded_rows = 3;
        finalized.failed_rows = 2;

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // create job
                .append_query_results([[job_model("j1", JobStatus::Processing)]])
                // row 1: unique, provisions
                .append_query_results([no_accounts()])
                .append_query_results([no_profiles()])
                .append_query_results([[account_model(1)]])
                .append_query_results([[profile_model(1)]])
                .append_query_results([[outcome_model(1, OutcomeStatus::Success)]])
                // row 2: unique, provisions
                .append_query_results([no_accounts()])
                .append_query_results([no_profiles()])
                .append_query_results([[account_model(2)]])
                .append_query_results([[profile_model(2)]])
                .append_query_results([[outcome_model(2, OutcomeStatus::Success)]])
                // row 3: invalid email, only the outcome write hits the store
                .append_query_results([[outcome_model(3, OutcomeStatus::Failed)]])
                // row 4: unique, provisions
                .append_query_results([no_accounts()])
                .append_query_results([no_profiles()])
                .append_query_results([[account_model(4)]])
                .append_query_results([[profile_model(4)]])
                .append_query_results([[outcome_model(4, OutcomeStatus::Success)]])
                // row 5: duplicate of row 1's email, committed earlier in this job
                .append_query_results([[account_model(1)]])
                .append_query_results([[outcome_model(5, OutcomeStatus::Failed)]])
                // finalize
                .append_query_results([[job_model("j1", JobStatus::Processing)], [finalized]])
                .into_connection(),
        );

        let service = create_test_service(db, Arc::new(NoOpWelcome));

        let data = b"full_name,email,roll_number,year_of_study,department,phone\n\
Member 1,member1@example.edu,CS-1001,2,,\n\
Member 2,member2@example.edu,CS-1002,2,,\n\
Member 3,not-an-email,CS-1003,2,,\n\
Member 4,member4@example.edu,CS-1004,2,,\n\
Member 5,member1@example.edu,CS-1005,2,,\n"
            .to_vec();

        let summary = service
            .run(
                &test_ctx(),
                MemberKind::Student,
                "students.csv",
                data,
                CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(summary.status, JobStatus::Completed);
        assert_eq!(summary.total_rows, 5);
        assert_eq!(summary.succeeded_rows, 3);
        assert_eq!(summary.failed_rows, 2);
        assert_eq!(
            summary.succeeded_rows + summary.failed_rows,
            summary.total_rows
        );

        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].row_number, 3);
        assert!(summary.failures[0].message.contains("not a valid address"));
        assert_eq!(summary.failures[1].row_number, 5);
        assert!(summary.failures[1].message.contains("already exists"));
        // Failed rows carry their original values for correction.
        assert_eq!(summary.failures[1].values["email"], "member1@example.edu");
    }

    /// Re-uploading a row that already succeeded in an earlier job must not
    /// create a second account: the duplicate check sees the committed
    /// member and fails the row with a conflict.
    #[tokio::test]
    async fn test_reupload_of_created_member_does_not_duplicate() {
        let mut finalized = job_model("j2", JobStatus::Completed);
        finalized.total_rows = 1;
        finalized.failed_rows = 1;

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[job_model("j2", JobStatus::Processing)]])
                // the member committed by the first upload
                .append_query_results([[account_model(1)]])
                .append_query_results([[outcome_model(1, OutcomeStatus::Failed)]])
                .append_query_results([[job_model("j2", JobStatus::Processing)], [finalized]])
                .into_connection(),
        );

        let service = create_test_service(db, Arc::new(NoOpWelcome));

        let data = b"full_name,email,roll_number,year_of_study,department,phone\n\
Member 1,member1@example.edu,CS-1001,2,,\n"
            .to_vec();

        let summary = service
            .run(
                &test_ctx(),
                MemberKind::Student,
                "students.csv",
                data,
                CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(summary.succeeded_rows, 0);
        assert_eq!(summary.failed_rows, 1);
        assert!(summary.failures[0].message.contains("already exists"));
    }

    struct FailingWelcome;

    #[async_trait]
    impl WelcomeDelivery for FailingWelcome {
        async fn send_welcome(
            &self,
            _account: &account::Model,
            _temp_password: &str,
        ) -> AppResult<()> {
            Err(AppError::ExternalService("SMTP relay unreachable".into()))
        }
    }

    #[tokio::test]
    async fn test_welcome_failure_does_not_fail_row() {
        let mut finalized = job_model("j1", JobStatus::Completed);
        finalized.total_rows = 1;
        finalized.succeeded_rows = 1;

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[job_model("j1", JobStatus::Processing)]])
                .append_query_results([no_accounts()])
                .append_query_results([no_profiles()])
                .append_query_results([[account_model(1)]])
                .append_query_results([[profile_model(1)]])
                .append_query_results([[outcome_model(1, OutcomeStatus::Success)]])
                .append_query_results([[job_model("j1", JobStatus::Processing)], [finalized]])
                .into_connection(),
        );

        let service = create_test_service(db, Arc::new(FailingWelcome));

        let data = b"full_name,email,roll_number,year_of_study,department,phone\n\
Member 1,member1@example.edu,CS-1001,2,,\n"
            .to_vec();

        let summary = service
            .run(
                &test_ctx(),
                MemberKind::Student,
                "students.csv",
                data,
                CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(summary.succeeded_rows, 1);
        assert_eq!(summary.failed_rows, 0);
        assert!(summary.failures.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_job_finalizes_instead_of_discarding() {
        let finalized = job_model("j1", JobStatus::Completed);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([
                    [job_model("j1", JobStatus::Processing)],
                    [job_model("j1", JobStatus::Processing)],
                    [finalized],
                ])
                .into_connection(),
        );

        let service = create_test_service(db, Arc::new(NoOpWelcome));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let data = b"full_name,email,roll_number,year_of_study,department,phone\n\
Member 1,member1@example.edu,CS-1001,2,,\n"
            .to_vec();

        let summary = service
            .run(&test_ctx(), MemberKind::Student, "students.csv", data, cancel)
            .await
            .unwrap();

        // The job still reaches a terminal state with the accumulated counts.
        assert_eq!(summary.status, JobStatus::Completed);
        assert_eq!(summary.total_rows, 0);
    }
}
