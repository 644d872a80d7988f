//! Member provisioning.
//!
//! Turns one accepted roster row into a usable account: the authentication
//! account (with a generated temporary credential and the role for the
//! member kind) and the domain profile are created inside a single
//! transaction, so a failure at any step leaves nothing behind. Welcome
//! delivery is not part of this sequence.

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rosterd_common::{AppError, AppResult, IdGenerator};
use rosterd_db::entities::{account, student_profile, trainer_profile};
use rosterd_db::entities::account::AccountRole;
use rosterd_db::entities::upload_job::MemberKind;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

use super::validate::{MemberDetails, ValidMember};

/// Length of generated temporary credentials.
const TEMP_PASSWORD_LEN: usize = 12;

/// A freshly provisioned member.
#[derive(Debug, Clone)]
pub struct ProvisionedMember {
    /// The created account.
    pub account: account::Model,
    /// The cleartext temporary credential, for the welcome message only.
    /// Never persisted; only its hash is stored.
    pub temp_password: String,
}

/// Provisioning service.
#[derive(Clone)]
pub struct ProvisionService {
    db: Arc<DatabaseConnection>,
    id_gen: IdGenerator,
}

impl ProvisionService {
    /// Create a new provisioning service.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            id_gen: IdGenerator::new(),
        }
    }

    /// Provision one validated member inside a row-local transaction.
    ///
    /// Account and profile creation commit or roll back together; the error
    /// message names the failing step so operators can tell what happened.
    pub async fn provision(
        &self,
        tenant_id: &str,
        kind: MemberKind,
        member: &ValidMember,
    ) -> AppResult<ProvisionedMember> {
        let temp_password = generate_temp_password();
        let password_hash = hash_password(&temp_password)?;

        let account_id = self.id_gen.generate();
        let now = Utc::now();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("could not start transaction: {e}")))?;

        let account_model = account::ActiveModel {
            id: Set(account_id.clone()),
            tenant_id: Set(tenant_id.to_string()),
            email: Set(member.email.clone()),
            email_lower: Set(member.email.to_lowercase()),
            name: Set(member.full_name.clone()),
            role: Set(role_for(kind)),
            password: Set(Some(password_hash)),
            token: Set(None),
            must_change_password: Set(true),
            is_active: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(None),
        };

        let created = account_model
            .insert(&txn)
            .await
            .map_err(|e| AppError::Database(format!("account creation failed: {e}")))?;

        match &member.details {
            MemberDetails::Student {
                roll_number,
                year_of_study,
                department,
            } => {
                let profile = student_profile::ActiveModel {
                    account_id: Set(account_id.clone()),
                    tenant_id: Set(tenant_id.to_string()),
                    roll_number: Set(roll_number.clone()),
                    year_of_study: Set(*year_of_study),
                    department: Set(department.clone()),
                    phone: Set(member.phone.clone()),
                    created_at: Set(now.into()),
                };
                profile.insert(&txn).await.map_err(|e| {
                    AppError::Database(format!("student profile creation failed: {e}"))
                })?;
            }
            MemberDetails::Trainer {
                specialization,
                years_of_experience,
            } => {
                let profile = trainer_profile::ActiveModel {
                    account_id: Set(account_id.clone()),
                    tenant_id: Set(tenant_id.to_string()),
                    specialization: Set(specialization.clone()),
                    years_of_experience: Set(*years_of_experience),
                    phone: Set(member.phone.clone()),
                    created_at: Set(now.into()),
                };
                profile.insert(&txn).await.map_err(|e| {
                    AppError::Database(format!("trainer profile creation failed: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("could not commit member: {e}")))?;

        tracing::debug!(
            account_id = %created.id,
            tenant_id = tenant_id,
            role = ?created.role,
            "Provisioned member"
        );

        Ok(ProvisionedMember {
            account: created,
            temp_password,
        })
    }
}

/// Role assigned to accounts created from a roster of the given kind.
const fn role_for(kind: MemberKind) -> AccountRole {
    match kind {
        MemberKind::Student => AccountRole::Student,
        MemberKind::Trainer => AccountRole::Trainer,
    }
}

/// Generate a random alphanumeric temporary credential.
fn generate_temp_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TEMP_PASSWORD_LEN)
        .map(char::from)
        .collect()
}

/// Hash a password using Argon2.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
