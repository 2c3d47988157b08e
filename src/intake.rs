//! Intake form validation.
//!
//! The rules, in order: all fields present after trimming, date of birth
//! parses as ISO `YYYY-MM-DD`, date of birth strictly in the past.
//! Each failure maps to one user-facing message; the submission is never
//! persisted unless every rule passes.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::NewPatient;

/// Raw form fields as posted by the browser. Missing fields deserialize
/// to empty strings, matching how browsers omit blank inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub therapist: String,
}

impl IntakeForm {
    /// Return a copy with ASCII whitespace trimmed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            dob: self.dob.trim().to_string(),
            therapist: self.therapist.trim().to_string(),
        }
    }
}

/// A user-input fault detected before persistence. Always recovered by
/// re-rendering the form; `Display` is the exact message shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    BadDateFormat,
    #[error("Date of birth must be in the past.")]
    DobNotInPast,
}

/// Validate a trimmed form against `today`, producing an insertable
/// record on success.
///
/// `today` is passed in rather than read from the clock so tests are
/// deterministic; handlers pass `chrono::Local::now().date_naive()`.
pub fn validate_intake(form: &IntakeForm, today: NaiveDate) -> Result<NewPatient, ValidationError> {
    if form.first_name.is_empty()
        || form.last_name.is_empty()
        || form.dob.is_empty()
        || form.therapist.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    let dob = NaiveDate::parse_from_str(&form.dob, "%Y-%m-%d")
        .map_err(|_| ValidationError::BadDateFormat)?;

    // A date of birth today or later is rejected.
    if dob >= today {
        return Err(ValidationError::DobNotInPast);
    }

    Ok(NewPatient {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        dob,
        therapist_name: form.therapist.clone(),
    })
}
