//! Account service.
//!
//! The thin auth seam the API layer uses to resolve a bearer token into the
//! tenant/actor context. Token issuance itself belongs to the wider auth
//! system, not to this service.

use rosterd_common::{AppError, AppResult};
use rosterd_db::entities::account;
use rosterd_db::repositories::AccountRepository;

/// Account service for business logic.
#[derive(Clone)]
pub struct AccountService {
    account_repo: AccountRepository,
}

impl AccountService {
    /// Create a new account service.
    #[must_use]
    pub const fn new(account_repo: AccountRepository) -> Self {
        Self { account_repo }
    }

    /// Get an account by ID.
    pub async fn get(&self, id: &str) -> AppResult<account::Model> {
        self.account_repo.get_by_id(id).await
    }

    /// Authenticate an account by API token.
    pub async fn authenticate_by_token(&self, token: &str) -> AppResult<account::Model> {
        self.account_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}
