//! Natural-key duplicate checking.
//!
//! Enforces the same uniqueness the interactive flows enforce: one email per
//! tenant, one roll number per tenant. Runs as a read against durable state,
//! so rows committed earlier in the same job are visible here.

use rosterd_common::AppResult;
use rosterd_db::repositories::{AccountRepository, StudentProfileRepository};

use super::validate::{MemberDetails, ValidMember};

/// Tenant-scoped duplicate checker.
#[derive(Clone)]
pub struct DuplicateChecker {
    account_repo: AccountRepository,
    student_repo: StudentProfileRepository,
}

impl DuplicateChecker {
    /// Create a new duplicate checker.
    #[must_use]
    pub const fn new(
        account_repo: AccountRepository,
        student_repo: StudentProfileRepository,
    ) -> Self {
        Self {
            account_repo,
            student_repo,
        }
    }

    /// Check a validated member against existing tenant records.
    ///
    /// Returns a conflict message when the natural key is already taken,
    /// `None` when the row may proceed.
    pub async fn check(&self, tenant_id: &str, member: &ValidMember) -> AppResult<Option<String>> {
        if self
            .account_repo
            .find_by_email_in_tenant(tenant_id, &member.email)
            .await?
            .is_some()
        {
            return Ok(Some(format!(
                "An account with email '{}' already exists in this institution",
                member.email
            )));
        }

        if let MemberDetails::Student { roll_number, .. } = &member.details {
            if self
                .student_repo
                .find_by_roll_number_in_tenant(tenant_id, roll_number)
                .await?
                .is_some()
            {
                return Ok(Some(format!(
                    "A student with roll number '{roll_number}' already exists in this institution"
                )));
            }
        }

        Ok(None)
    }
}
