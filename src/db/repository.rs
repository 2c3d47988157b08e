use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::DatabaseError;
use crate::models::{NewPatient, Patient};

/// Insert a validated submission and return the auto-assigned row id.
pub fn insert_patient(conn: &Connection, patient: &NewPatient) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (first_name, last_name, dob, therapist_name)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            patient.first_name,
            patient.last_name,
            // NaiveDate binds as ISO YYYY-MM-DD text
            patient.dob,
            patient.therapist_name,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, dob, therapist_name
         FROM patients WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id], |row| {
        Ok(PatientRow {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            dob: row.get(3)?,
            therapist_name: row.get(4)?,
        })
    });

    match result {
        Ok(row) => Ok(Some(patient_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All stored patients, oldest first.
pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, dob, therapist_name
         FROM patients ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(PatientRow {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            dob: row.get(3)?,
            therapist_name: row.get(4)?,
        })
    })?;

    let mut patients = Vec::new();
    for row in rows {
        patients.push(patient_from_row(row?)?);
    }
    Ok(patients)
}

pub fn count_patients(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
    Ok(count)
}

/// Raw row as stored; dob is decoded separately so a malformed stored
/// date surfaces as `DatabaseError::InvalidDate` rather than a panic.
struct PatientRow {
    id: i64,
    first_name: String,
    last_name: String,
    dob: String,
    therapist_name: String,
}

fn patient_from_row(row: PatientRow) -> Result<Patient, DatabaseError> {
    let dob = NaiveDate::parse_from_str(&row.dob, "%Y-%m-%d").map_err(|_| {
        DatabaseError::InvalidDate {
            value: row.dob.clone(),
        }
    })?;
    Ok(Patient {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        dob,
        therapist_name: row.therapist_name,
    })
}
