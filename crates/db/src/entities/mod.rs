//! Database entities.

pub mod account;
pub mod row_outcome;
pub mod student_profile;
pub mod trainer_profile;
pub mod upload_job;

pub use account::Entity as Account;
pub use row_outcome::Entity as RowOutcome;
pub use student_profile::Entity as StudentProfile;
pub use trainer_profile::Entity as TrainerProfile;
pub use upload_job::Entity as UploadJob;
