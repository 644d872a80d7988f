//! Roster import endpoints.

use axum::{
    Router,
    extract::{Multipart, Path, Query, State},
    routing::{get, post},
};
use rosterd_common::{AppError, AppResult};
use rosterd_core::{ImportSummary, TenantContext, template_headers};
use rosterd_db::entities::row_outcome::{Model as RowOutcomeModel, OutcomeStatus};
use rosterd_db::entities::upload_job::{JobStatus, MemberKind, Model as UploadJobModel};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{extractors::AdminAccount, middleware::AppState, response::ApiResponse};

/// Member kind as accepted in requests.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberKindParam {
    Student,
    Trainer,
}

impl MemberKindParam {
    const fn to_member_kind(self) -> MemberKind {
        match self {
            Self::Student => MemberKind::Student,
            Self::Trainer => MemberKind::Trainer,
        }
    }

    fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "trainer" => Ok(Self::Trainer),
            other => Err(AppError::BadRequest(format!(
                "Unknown member kind '{other}', expected 'student' or 'trainer'"
            ))),
        }
    }
}

/// Upload job response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub member_kind: MemberKind,
    pub file_name: String,
    pub total_rows: i32,
    pub succeeded_rows: i32,
    pub failed_rows: i32,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl From<UploadJobModel> for JobResponse {
    fn from(job: UploadJobModel) -> Self {
        Self {
            id: job.id,
            member_kind: job.member_kind,
            file_name: job.file_name,
            total_rows: job.total_rows,
            succeeded_rows: job.succeeded_rows,
            failed_rows: job.failed_rows,
            status: job.status,
            error_message: job.error_message,
            created_at: job.created_at.to_rfc3339(),
            completed_at: job.completed_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Row outcome response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowOutcomeResponse {
    pub row_number: i32,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub values: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: String,
}

impl From<RowOutcomeModel> for RowOutcomeResponse {
    fn from(outcome: RowOutcomeModel) -> Self {
        Self {
            row_number: outcome.row_number,
            status: outcome.status,
            account_id: outcome.account_id,
            values: outcome.row_values,
            error_message: outcome.error_message,
            created_at: outcome.created_at.to_rfc3339(),
        }
    }
}

/// Submit a roster file for processing.
///
/// Multipart form: `file` (the CSV), `kind` (`student` or `trainer`), and an
/// optional `fileName` overriding the uploaded file's name. The pipeline
/// runs to completion before the summary is returned; if the client goes
/// away mid-run, the job finishes its current row and finalizes with the
/// counts accumulated so far.
async fn upload_roster(
    AdminAccount(admin): AdminAccount,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<ApiResponse<ImportSummary>> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut kind: Option<MemberKindParam> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                if file_name.is_none() {
                    file_name = field.file_name().map(std::string::ToString::to_string);
                }
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?
                        .to_vec(),
                );
            }
            "kind" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                kind = Some(MemberKindParam::parse(&text)?);
            }
            "fileName" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !text.is_empty() {
                    file_name = Some(text);
                }
            }
            _ => {}
        }
    }

    let data =
        file_data.ok_or_else(|| AppError::BadRequest("No roster file provided".to_string()))?;
    let kind = kind
        .ok_or_else(|| AppError::BadRequest("Missing 'kind' field".to_string()))?
        .to_member_kind();
    let file_name = file_name.unwrap_or_else(|| "roster.csv".to_string());

    let ctx = TenantContext {
        tenant_id: admin.tenant_id.clone(),
        actor_id: admin.id.clone(),
    };

    // The job runs in its own task so a dropped connection cannot tear it
    // down mid-row; the drop guard asks it to stop at the next row boundary.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    let service = state.import_service.clone();

    let handle = tokio::spawn(async move {
        service.run(&ctx, kind, &file_name, data, cancel).await
    });

    let summary = handle
        .await
        .map_err(|e| AppError::Internal(format!("Import task failed: {e}")))??;

    Ok(ApiResponse::ok(summary))
}

/// Template query parameters.
#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    kind: MemberKindParam,
}

/// Template response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    pub kind: MemberKind,
    pub headers: Vec<String>,
}

/// Expected header set for a member kind.
///
/// Lets the administrator build a conforming file before uploading.
async fn get_template(
    AdminAccount(_admin): AdminAccount,
    Query(query): Query<TemplateQuery>,
) -> AppResult<ApiResponse<TemplateResponse>> {
    let kind = query.kind.to_member_kind();
    Ok(ApiResponse::ok(TemplateResponse {
        kind,
        headers: template_headers(kind)
            .iter()
            .map(|h| (*h).to_string())
            .collect(),
    }))
}

/// Job history query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    /// Maximum results (default: 20, max: 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

const fn default_limit() -> u64 {
    20
}

/// Job history response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
}

/// List upload jobs for the caller's tenant, most recent first.
async fn list_jobs(
    AdminAccount(admin): AdminAccount,
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<ApiResponse<JobListResponse>> {
    let limit = query.limit.min(100);

    let jobs = state
        .import_service
        .list_jobs(&admin.tenant_id, limit, query.offset)
        .await?;

    Ok(ApiResponse::ok(JobListResponse {
        jobs: jobs.into_iter().map(Into::into).collect(),
    }))
}

/// Job detail response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailResponse {
    pub job: JobResponse,
    pub outcomes: Vec<RowOutcomeResponse>,
}

/// Fetch one upload job with its row outcomes.
async fn get_job(
    AdminAccount(admin): AdminAccount,
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> AppResult<ApiResponse<JobDetailResponse>> {
    let detail = state
        .import_service
        .get_job(&admin.tenant_id, &job_id)
        .await?;

    Ok(ApiResponse::ok(JobDetailResponse {
        job: detail.job.into(),
        outcomes: detail.outcomes.into_iter().map(Into::into).collect(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_roster).get(list_jobs))
        .route("/template", get(get_template))
        .route("/{id}", get(get_job))
}
