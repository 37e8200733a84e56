//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{Patient, PatientRecordView};

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        age: row.get(3)?,
        sex: row.get(4)?,
        diabetes: row.get(5)?,
        pulmonary_disease: row.get(6)?,
        created_at: row.get(7)?,
    })
}

const PATIENT_COLUMNS: &str =
    "id, first_name, last_name, age, sex, diabetes, pulmonary_disease, created_at";

impl Database {
    /// Insert a new patient, returning the assigned id.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO patients (
                first_name, last_name, age, sex, diabetes, pulmonary_disease, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                patient.first_name,
                patient.last_name,
                patient.age,
                patient.sex,
                patient.diabetes,
                patient.pulmonary_disease,
                patient.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?"),
                [id],
                patient_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all patients, ordered by name.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients ORDER BY last_name, first_name"
        ))?;
        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Whether the patient has at least one symptom and one exam report,
    /// i.e. whether a diagnosis can be attempted.
    pub fn patient_has_record(&self, patient_id: i64) -> DbResult<bool> {
        let has: bool = self.conn.query_row(
            r#"
            SELECT EXISTS (SELECT 1 FROM symptom_reports WHERE patient_id = ?1)
               AND EXISTS (SELECT 1 FROM exam_reports WHERE patient_id = ?1)
            "#,
            [patient_id],
            |row| row.get(0),
        )?;
        Ok(has)
    }

    /// Fetch the patient profile together with the latest reports of each
    /// kind, where either report may be absent.
    pub fn patient_record(&self, patient_id: i64) -> DbResult<Option<PatientRecordView>> {
        let Some(patient) = self.get_patient(patient_id)? else {
            return Ok(None);
        };
        Ok(Some(PatientRecordView {
            symptoms: self.latest_symptom_report(patient_id)?,
            exams: self.latest_exam_report(patient_id)?,
            patient,
        }))
    }
}
