//! Welcome message delivery.
//!
//! Provides an abstraction for dispatching the welcome message sent to a
//! freshly provisioned member. Delivery is best-effort: the import pipeline
//! treats it as fire-and-forget and a failure never fails the row.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::Mailbox,
    transport::smtp::authentication::Credentials,
};
use rosterd_common::{AppError, AppResult, config::EmailConfig};
use rosterd_db::entities::account;
use std::sync::Arc;

/// Trait for welcome message delivery.
///
/// This allows the import pipeline to dispatch welcome messages without
/// depending on a concrete mail transport.
#[async_trait]
pub trait WelcomeDelivery: Send + Sync {
    /// Send a welcome message to a newly created account.
    ///
    /// # Arguments
    /// * `account` - The provisioned account
    /// * `temp_password` - The cleartext temporary credential to include
    async fn send_welcome(&self, account: &account::Model, temp_password: &str) -> AppResult<()>;
}

/// Shared handle to a welcome delivery implementation.
pub type WelcomeService = Arc<dyn WelcomeDelivery>;

/// No-op welcome delivery.
///
/// Used when email is disabled and in tests.
pub struct NoOpWelcome;

#[async_trait]
impl WelcomeDelivery for NoOpWelcome {
    async fn send_welcome(&self, account: &account::Model, _temp_password: &str) -> AppResult<()> {
        tracing::debug!(
            account_id = %account.id,
            email = %account.email,
            "Welcome delivery disabled, skipping"
        );
        Ok(())
    }
}

/// SMTP welcome delivery via lettre.
pub struct SmtpWelcome {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    server_url: String,
}

impl SmtpWelcome {
    /// Build an SMTP welcome delivery from configuration.
    pub fn from_config(config: &EmailConfig, server_url: &str) -> AppResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| AppError::Config(format!("Invalid SMTP relay: {e}")))?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = format!("{} <{}>", config.from_name, config.from_address)
            .parse::<Mailbox>()
            .map_err(|e| AppError::Config(format!("Invalid from address: {e}")))?;

        Ok(Self {
            transport: builder.build(),
            from,
            server_url: server_url.to_string(),
        })
    }
}

#[async_trait]
impl WelcomeDelivery for SmtpWelcome {
    async fn send_welcome(&self, account: &account::Model, temp_password: &str) -> AppResult<()> {
        let to = account
            .email
            .parse::<Mailbox>()
            .map_err(|e| AppError::ExternalService(format!("Invalid recipient address: {e}")))?;

        let body = format!(
            "Hi {}!\n\n\
            An account has been created for you.\n\n\
            Sign in at {} with this email address and the temporary password below, \
            then choose a password of your own:\n\n\
            {}\n\n\
            If you were not expecting this message, contact your administrator.",
            account.name, self.server_url, temp_password
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your new account")
            .body(body)
            .map_err(|e| AppError::Internal(format!("Failed to build welcome mail: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalService(format!("SMTP delivery failed: {e}")))?;

        tracing::info!(account_id = %account.id, "Welcome mail sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rosterd_db::entities::account::AccountRole;

    fn test_account() -> account::Model {
        account::Model {
            id: "a1".to_string(),
            tenant_id: "t1".to_string(),
            email: "asha@example.edu".to_string(),
            email_lower: "asha@example.edu".to_string(),
            name: "Asha Verma".to_string(),
            role: AccountRole::Student,
            password: None,
            token: None,
            must_change_password: true,
            is_active: false,
            created_at: Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_noop_welcome_always_succeeds() {
        let delivery = NoOpWelcome;
        let result = delivery.send_welcome(&test_account(), "secret123").await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_smtp_welcome_rejects_bad_from_address() {
        let config = EmailConfig {
            enabled: true,
            from_address: "not an address".to_string(),
            ..EmailConfig::default()
        };

        let result = SmtpWelcome::from_config(&config, "https://rosterd.example.edu");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_smtp_welcome_builds_from_valid_config() {
        let config = EmailConfig {
            enabled: true,
            smtp_host: "smtp.example.edu".to_string(),
            from_address: "noreply@example.edu".to_string(),
            ..EmailConfig::default()
        };

        assert!(SmtpWelcome::from_config(&config, "https://rosterd.example.edu").is_ok());
    }
}
