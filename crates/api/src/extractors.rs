//! Request extractors.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use rosterd_db::entities::account;
use rosterd_db::entities::account::AccountRole;

/// Authenticated account extractor.
#[derive(Debug, Clone)]
pub struct AuthAccount(pub account::Model);

impl<S> FromRequestParts<S> for AuthAccount
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get account from request extensions (set by auth middleware)
        parts
            .extensions
            .get::<account::Model>()
            .cloned()
            .map(AuthAccount)
            .ok_or((StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}

/// Authenticated administrator extractor.
///
/// Roster uploads and job history are administrator operations.
#[derive(Debug, Clone)]
pub struct AdminAccount(pub account::Model);

impl<S> FromRequestParts<S> for AdminAccount
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let account = parts
            .extensions
            .get::<account::Model>()
            .cloned()
            .ok_or((StatusCode::UNAUTHORIZED, "Unauthorized"))?;

        if account.role == AccountRole::Admin {
            Ok(Self(account))
        } else {
            Err((StatusCode::FORBIDDEN, "Administrator role required"))
        }
    }
}
