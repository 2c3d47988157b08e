use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored intake submission. Immutable once created — the crate has
/// no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub therapist_name: String,
}

/// A validated submission, ready to insert. The id is assigned by the
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub therapist_name: String,
}
