//! Database repositories.

mod account;
mod row_outcome;
mod student_profile;
mod trainer_profile;
mod upload_job;

pub use account::AccountRepository;
pub use row_outcome::RowOutcomeRepository;
pub use student_profile::StudentProfileRepository;
pub use trainer_profile::TrainerProfileRepository;
pub use upload_job::UploadJobRepository;
