//! Per-row validation.
//!
//! Purely a function of the row's fields: no I/O, and expected-invalid input
//! comes back as a typed rejection rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;
use rosterd_db::entities::upload_job::MemberKind;
use validator::ValidateEmail;

use super::roster::RosterRow;

/// Allowed range for a student's year of study.
const YEAR_OF_STUDY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Allowed range for a trainer's years of experience.
const YEARS_OF_EXPERIENCE_RANGE: std::ops::RangeInclusive<i32> = 0..=60;

/// Maximum length for names, emails and other free-text fields.
const MAX_FIELD_LEN: usize = 256;

static ROLL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9/_-]{0,63}$").expect("valid roll number pattern")
});

/// A row that passed validation, ready for duplicate checking and
/// provisioning.
#[derive(Debug, Clone)]
pub struct ValidMember {
    /// Full display name.
    pub full_name: String,
    /// Login email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Kind-specific fields.
    pub details: MemberDetails,
}

/// Kind-specific member fields.
#[derive(Debug, Clone)]
pub enum MemberDetails {
    /// Student-specific fields.
    Student {
        /// Institution-assigned roll number.
        roll_number: String,
        /// Year of study (1-5).
        year_of_study: i32,
        /// Department or programme.
        department: Option<String>,
    },
    /// Trainer-specific fields.
    Trainer {
        /// Primary teaching subject.
        specialization: String,
        /// Years of professional experience (0-60).
        years_of_experience: i32,
    },
}

/// Why a row was rejected, in words an administrator can act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    /// Human-readable reason.
    pub message: String,
}

impl std::fmt::Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate one parsed row for the given member kind.
pub fn validate_member(kind: MemberKind, row: &RosterRow) -> Result<ValidMember, RowRejection> {
    let mut problems: Vec<String> = Vec::new();

    let full_name = required_text(row, "full_name", &mut problems);
    let email = required_text(row, "email", &mut problems);

    if let Some(ref email) = email {
        if !email.validate_email() {
            problems.push(format!("email '{email}' is not a valid address"));
        }
    }

    let phone = row.get("phone").map(ToString::to_string);
    if let Some(ref phone) = phone {
        if phone.len() > 32 {
            problems.push("phone is too long".to_string());
        }
    }

    let details = match kind {
        MemberKind::Student => {
            let roll_number = required_text(row, "roll_number", &mut problems);
            if let Some(ref roll) = roll_number {
                if !ROLL_NUMBER_RE.is_match(roll) {
                    problems.push(format!("roll_number '{roll}' has an invalid format"));
                }
            }

            let year_of_study =
                required_number(row, "year_of_study", YEAR_OF_STUDY_RANGE, &mut problems);

            let department = row.get("department").map(ToString::to_string);
            if let Some(ref department) = department {
                if department.len() > MAX_FIELD_LEN {
                    problems.push("department is too long".to_string());
                }
            }

            MemberDetails::Student {
                roll_number: roll_number.unwrap_or_default(),
                year_of_study: year_of_study.unwrap_or_default(),
                department,
            }
        }
        MemberKind::Trainer => {
            let specialization = required_text(row, "specialization", &mut problems);

            let years_of_experience = required_number(
                row,
                "years_of_experience",
                YEARS_OF_EXPERIENCE_RANGE,
                &mut problems,
            );

            MemberDetails::Trainer {
                specialization: specialization.unwrap_or_default(),
                years_of_experience: years_of_experience.unwrap_or_default(),
            }
        }
    };

    if problems.is_empty() {
        Ok(ValidMember {
            full_name: full_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone,
            details,
        })
    } else {
        Err(RowRejection {
            message: problems.join("; "),
        })
    }
}

/// Read a mandatory text field, noting absence or excessive length.
fn required_text(row: &RosterRow, column: &str, problems: &mut Vec<String>) -> Option<String> {
    match row.get(column) {
        Some(value) if value.len() > MAX_FIELD_LEN => {
            problems.push(format!("{column} is too long"));
            None
        }
        Some(value) => Some(value.to_string()),
        None => {
            problems.push(format!("{column} is required"));
            None
        }
    }
}

/// Read a mandatory integer field and check its range.
fn required_number(
    row: &RosterRow,
    column: &str,
    range: std::ops::RangeInclusive<i32>,
    problems: &mut Vec<String>,
) -> Option<i32> {
    let raw = match row.get(column) {
        Some(value) => value,
        None => {
            problems.push(format!("{column} is required"));
            return None;
        }
    };

    match raw.parse::<i32>() {
        Ok(value) if range.contains(&value) => Some(value),
        Ok(value) => {
            problems.push(format!(
                "{column} must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ));
            None
        }
        Err(_) => {
            problems.push(format!("{column} '{raw}' is not a number"));
            None
        }
    }
}
