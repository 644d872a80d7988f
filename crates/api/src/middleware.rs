//! API middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use rosterd_core::{AccountService, ImportService};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Account lookup and token authentication.
    pub account_service: AccountService,
    /// The roster import pipeline.
    pub import_service: ImportService,
}

/// Authentication middleware.
///
/// Resolves a bearer token into an account and stores it in the request
/// extensions. Endpoints that require authentication enforce it via the
/// extractors; everything downstream trusts this context for the tenant id,
/// never a client-supplied value.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
            && let Some(token) = auth_str.strip_prefix("Bearer ") {
                if let Ok(account) = state.account_service.authenticate_by_token(token).await {
                    req.extensions_mut().insert(account);
                }
            }

    next.run(req).await
}
