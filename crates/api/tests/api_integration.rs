//! API integration tests.
//!
//! These tests verify the endpoints, auth middleware and extractors work
//! together, with the store mocked out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware,
};
use chrono::Utc;
use rosterd_api::{middleware::AppState, router as api_router};
use rosterd_common::config::{Config, DatabaseConfig, EmailConfig, ImportConfig, ServerConfig};
use rosterd_core::{
    AccountService, DuplicateChecker, ImportService, NoOpWelcome, ProvisionService,
};
use rosterd_db::entities::account;
use rosterd_db::entities::account::AccountRole;
use rosterd_db::entities::upload_job;
use rosterd_db::repositories::{
    AccountRepository, RowOutcomeRepository, StudentProfileRepository, UploadJobRepository,
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test configuration.
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

fn account_with_role(role: AccountRole) -> account::Model {
    account::Model {
        id: "a1".to_string(),
        tenant_id: "t1".to_string(),
        email: "admin@example.edu".to_string(),
        email_lower: "admin@example.edu".to_string(),
        name: "Admin".to_string(),
        role,
        password: None,
        token: Some("test_token".to_string()),
        must_change_password: false,
        is_active: true,
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

/// Build the app the way the server wires it, over the given mock connection.
fn create_test_app(db: DatabaseConnection) -> Router {
    let db = Arc::new(db);
    let config = create_test_config();

    let account_repo = AccountRepository::new(Arc::clone(&db));
    let student_repo = StudentProfileRepository::new(Arc::clone(&db));
    let job_repo = UploadJobRepository::new(Arc::clone(&db));
    let outcome_repo = RowOutcomeRepository::new(Arc::clone(&db));

    let account_service = AccountService::new(account_repo.clone());
    let duplicates = DuplicateChecker::new(account_repo, student_repo);
    let provisioner = ProvisionService::new(Arc::clone(&db));
    let import_service = ImportService::new(
        job_repo,
        outcome_repo,
        duplicates,
        provisioner,
        Arc::new(NoOpWelcome),
        &config,
    );

    let state = AppState {
        account_service,
        import_service,
    };

    api_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rosterd_api::middleware::auth_middleware,
        ))
        .with_state(state)
}

#[tokio::test]
async fn test_job_history_requires_auth() {
    let app = create_test_app(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/imports")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_requires_admin_role() {
    // The token resolves to a student account; uploads are admin-only.
    let app = create_test_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[account_with_role(AccountRole::Student)]])
            .into_connection(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/imports")
                .method("POST")
                .header("Authorization", "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_template_returns_expected_headers() {
    let app = create_test_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[account_with_role(AccountRole::Admin)]])
            .into_connection(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/imports/template?kind=student")
                .method("GET")
                .header("Authorization", "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let headers = json["data"]["headers"].as_array().unwrap();
    assert_eq!(headers.len(), 6);
    assert!(headers.iter().any(|h| h == "roll_number"));
}

#[tokio::test]
async fn test_template_rejects_unknown_kind() {
    let app = create_test_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[account_with_role(AccountRole::Admin)]])
            .into_connection(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/imports/template?kind=teacher")
                .method("GET")
                .header("Authorization", "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_job_history_returns_jobs_for_tenant() {
    let app = create_test_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[account_with_role(AccountRole::Admin)]])
            .append_query_results([Vec::<upload_job::Model>::new()])
            .into_connection(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/imports")
                .method("GET")
                .header("Authorization", "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["data"]["jobs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_missing_job_returns_not_found() {
    let app = create_test_app(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[account_with_role(AccountRole::Admin)]])
            .append_query_results([Vec::<upload_job::Model>::new()])
            .into_connection(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/imports/nonexistent")
                .method("GET")
                .header("Authorization", "Bearer test_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
