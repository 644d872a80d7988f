//! Business logic services.

pub mod account;
pub mod duplicate;
pub mod import;
pub mod provision;
pub mod roster;
pub mod validate;
pub mod welcome;

pub use account::AccountService;
pub use duplicate::DuplicateChecker;
pub use import::{ImportService, ImportSummary, JobDetail, RowFailure, TenantContext};
pub use provision::{ProvisionService, ProvisionedMember, verify_password};
pub use roster::{
    RosterDocument, RosterRow, RowParseError, STUDENT_HEADERS, TRAINER_HEADERS, template_headers,
};
pub use validate::{MemberDetails, RowRejection, ValidMember, validate_member};
pub use welcome::{NoOpWelcome, SmtpWelcome, WelcomeDelivery, WelcomeService};
