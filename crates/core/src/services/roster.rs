//! Roster file parsing.
//!
//! Decodes an uploaded CSV into a sequence of rows. The header line is the
//! gate for the whole file: a mismatch rejects the upload before any row is
//! read. Individual malformed data rows surface as per-row errors and never
//! abort the batch.

use std::io::Cursor;

use rosterd_common::{AppError, AppResult};
use rosterd_db::entities::upload_job::MemberKind;

/// Expected columns for a student roster, in file order.
pub const STUDENT_HEADERS: &[&str] = &[
    "full_name",
    "email",
    "roll_number",
    "year_of_study",
    "department",
    "phone",
];

/// Expected columns for a trainer roster, in file order.
pub const TRAINER_HEADERS: &[&str] = &[
    "full_name",
    "email",
    "specialization",
    "years_of_experience",
    "phone",
];

/// Expected header set for the given member kind.
#[must_use]
pub const fn template_headers(kind: MemberKind) -> &'static [&'static str] {
    match kind {
        MemberKind::Student => STUDENT_HEADERS,
        MemberKind::Trainer => TRAINER_HEADERS,
    }
}

/// One parsed data row: the header/value pairs of a single file line.
#[derive(Debug, Clone)]
pub struct RosterRow {
    /// 1-based data-row number (the header line is not counted).
    pub row_number: u32,
    fields: Vec<(String, String)>,
}

impl RosterRow {
    /// Get a field by column name, trimmed. Empty cells read as `None`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Plain JSON snapshot of the original header/value pairs.
    ///
    /// This is what gets persisted with the row outcome; database models
    /// never cross the job boundary.
    #[must_use]
    pub fn snapshot(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::String(value.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

/// A data row the CSV layer could not decode into the expected shape.
#[derive(Debug, Clone)]
pub struct RowParseError {
    /// 1-based data-row number.
    pub row_number: u32,
    /// Human-readable reason.
    pub message: String,
    /// Best-effort snapshot of whatever values were readable.
    pub snapshot: serde_json::Value,
}

/// An opened roster file with a validated header, consumed once per job.
pub struct RosterDocument {
    headers: &'static [&'static str],
    reader: csv::Reader<Cursor<Vec<u8>>>,
}

impl RosterDocument {
    /// Open a roster file and validate its header line.
    ///
    /// Returns a job-fatal validation error when the file cannot be decoded
    /// or the header does not match the schema for the kind.
    pub fn open(kind: MemberKind, data: Vec<u8>) -> AppResult<Self> {
        let expected = template_headers(kind);

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(data));

        let found: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::Validation(format!("Unreadable roster file: {e}")))?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        if found.len() != expected.len()
            || found
                .iter()
                .zip(expected.iter())
                .any(|(f, e)| !f.eq_ignore_ascii_case(e))
        {
            return Err(AppError::Validation(format!(
                "Header mismatch: expected columns [{}], found [{}]",
                expected.join(", "),
                found.join(", ")
            )));
        }

        Ok(Self {
            headers: expected,
            reader,
        })
    }

    /// Iterate the data rows in file order.
    ///
    /// The sequence is finite and not restartable. Rows with the wrong field
    /// count come back as [`RowParseError`] with whatever values were
    /// readable.
    pub fn rows(self) -> impl Iterator<Item = Result<RosterRow, RowParseError>> {
        let headers = self.headers;

        self.reader
            .into_records()
            .enumerate()
            .map(move |(index, record)| {
                let row_number = index as u32 + 1;

                let record = record.map_err(|e| RowParseError {
                    row_number,
                    message: format!("Unreadable row: {e}"),
                    snapshot: serde_json::Value::Object(serde_json::Map::new()),
                })?;

                let fields: Vec<(String, String)> = headers
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        (
                            (*name).to_string(),
                            record.get(i).unwrap_or_default().to_string(),
                        )
                    })
                    .collect();

                if record.len() != headers.len() {
                    let row = RosterRow { row_number, fields };
                    return Err(RowParseError {
                        row_number,
                        message: format!(
                            "Expected {} fields, found {}",
                            headers.len(),
                            record.len()
                        ),
                        snapshot: row.snapshot(),
                    });
                }

                Ok(RosterRow { row_number, fields })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUDENT_FILE: &str = "\
full_name,email,roll_number,year_of_study,department,phone
Asha Verma,asha@example.edu,CS-1001,2,Computer Science,9000000001
Ravi Kumar,ravi@example.edu,CS-1002,3,Computer Science,
";

    #[test]
    fn test_open_valid_student_file() {
        let doc = RosterDocument::open(MemberKind::Student, STUDENT_FILE.as_bytes().to_vec())
            .expect("header should validate");
        let rows: Vec<_> = doc.rows().collect();

        assert_eq!(rows.len(), 2);
        let first = rows[0].as_ref().expect("row 1 should parse");
        assert_eq!(first.row_number, 1);
        assert_eq!(first.get("full_name"), Some("Asha Verma"));
        assert_eq!(first.get("roll_number"), Some("CS-1001"));

        let second = rows[1].as_ref().expect("row 2 should parse");
        // Empty cells read as absent.
        assert_eq!(second.get("phone"), None);
    }

    #[test]
    fn test_header_case_and_whitespace_are_ignored() {
        let data = "Full_Name , EMAIL ,roll_number,year_of_study,department,phone\n";
        let result = RosterDocument::open(MemberKind::Student, data.as_bytes().to_vec());
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_header_column_rejects_file() {
        let data = "full_name,email,roll_number,year_of_study,department\nA,B,C,D,E\n";
        let result = RosterDocument::open(MemberKind::Student, data.as_bytes().to_vec());

        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("Header mismatch")),
            _ => panic!("Expected header validation error"),
        }
    }

    #[test]
    fn test_trainer_headers_differ_from_student_headers() {
        let data = "full_name,email,specialization,years_of_experience,phone\n";
        assert!(RosterDocument::open(MemberKind::Trainer, data.as_bytes().to_vec()).is_ok());
        assert!(RosterDocument::open(MemberKind::Student, data.as_bytes().to_vec()).is_err());
    }

    #[test]
    fn test_malformed_row_is_row_level_not_fatal() {
        let data = "\
full_name,email,roll_number,year_of_study,department,phone
Asha Verma,asha@example.edu,CS-1001,2,Computer Science,9000000001
Broken Row,broken@example.edu,CS-1002
Ravi Kumar,ravi@example.edu,CS-1003,3,Computer Science,9000000003
";
        let doc =
            RosterDocument::open(MemberKind::Student, data.as_bytes().to_vec()).expect("header ok");
        let rows: Vec<_> = doc.rows().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        assert!(rows[2].is_ok(), "rows after a malformed row still parse");

        let err = rows[1].as_ref().err().expect("row 2 should fail");
        assert_eq!(err.row_number, 2);
        assert!(err.message.contains("Expected 6 fields, found 3"));
        // The readable prefix is still captured for re-display.
        assert_eq!(err.snapshot["full_name"], "Broken Row");
        assert_eq!(err.snapshot["phone"], "");
    }

    #[test]
    fn test_template_headers() {
        assert_eq!(template_headers(MemberKind::Student).len(), 6);
        assert_eq!(template_headers(MemberKind::Trainer).len(), 5);
        assert_eq!(template_headers(MemberKind::Trainer)[2], "specialization");
    }

    #[test]
    fn test_snapshot_preserves_original_values() {
        let doc = RosterDocument::open(MemberKind::Student, STUDENT_FILE.as_bytes().to_vec())
            .expect("header ok");
        let row = doc
            .rows()
            .next()
            .and_then(Result::ok)
            .expect("first row parses");

        let snapshot = row.snapshot();
        assert_eq!(snapshot["email"], "asha@example.edu");
        assert_eq!(snapshot["year_of_study"], "2");
    }
}
