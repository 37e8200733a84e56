//! Symptom and exam report database operations.
//!
//! Reports are insert-only. "Latest" means highest creation timestamp,
//! tie-broken by highest id, so wall-clock skew between entries created
//! in the same instant cannot flip the ordering.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{ExamReport, SymptomReport};

fn symptom_from_row(row: &Row<'_>) -> rusqlite::Result<SymptomReport> {
    Ok(SymptomReport {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        chest_pain: row.get(2)?,
        breath_difficulty: row.get(3)?,
        cold_sweat: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn exam_from_row(row: &Row<'_>) -> rusqlite::Result<ExamReport> {
    Ok(ExamReport {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        ecg: row.get(2)?,
        mri: row.get(3)?,
        pulse_rate: row.get(4)?,
        cholesterol: row.get(5)?,
        fasting_blood_sugar: row.get(6)?,
        created_at: row.get(7)?,
    })
}

impl Database {
    /// Insert a symptom report, returning the assigned id.
    pub fn insert_symptom_report(&self, report: &SymptomReport) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO symptom_reports (
                patient_id, chest_pain, breath_difficulty, cold_sweat, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                report.patient_id,
                report.chest_pain,
                report.breath_difficulty,
                report.cold_sweat,
                report.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert an exam report, returning the assigned id.
    pub fn insert_exam_report(&self, report: &ExamReport) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO exam_reports (
                patient_id, ecg, mri, pulse_rate, cholesterol, fasting_blood_sugar, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                report.patient_id,
                report.ecg,
                report.mri,
                report.pulse_rate,
                report.cholesterol,
                report.fasting_blood_sugar,
                report.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The most recent symptom report for a patient, if any.
    pub fn latest_symptom_report(&self, patient_id: i64) -> DbResult<Option<SymptomReport>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, chest_pain, breath_difficulty, cold_sweat, created_at
                FROM symptom_reports
                WHERE patient_id = ?
                ORDER BY created_at DESC, id DESC
                LIMIT 1
                "#,
                [patient_id],
                symptom_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// The most recent exam report for a patient, if any.
    pub fn latest_exam_report(&self, patient_id: i64) -> DbResult<Option<ExamReport>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, ecg, mri, pulse_rate, cholesterol,
                       fasting_blood_sugar, created_at
                FROM exam_reports
                WHERE patient_id = ?
                ORDER BY created_at DESC, id DESC
                LIMIT 1
                "#,
                [patient_id],
                exam_from_row,
            )
            .optional()
            .map_err(Into::into)
    }
}
