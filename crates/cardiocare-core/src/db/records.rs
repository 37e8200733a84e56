//! Diagnostic record database operations.
//!
//! The diagnostic_records table is the audit trail: insert and read only.

use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::{AttackStatus, DiagnosticRecord};

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<DiagnosticRecord> {
    Ok(DiagnosticRecord {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        recorded_at: row.get(3)?,
        status: AttackStatus::from(row.get::<_, String>(4)?),
        decision: row.get(5)?,
        details: row.get(6)?,
    })
}

impl Database {
    /// Append a diagnostic record, returning the assigned id.
    pub fn insert_diagnostic_record(&self, record: &DiagnosticRecord) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO diagnostic_records (
                patient_id, doctor_id, recorded_at, status, decision, details
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.patient_id,
                record.doctor_id,
                record.recorded_at,
                record.status.label(),
                record.decision,
                record.details,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All diagnostic records for a patient, newest first.
    ///
    /// Returns an empty vec for a patient with no history.
    pub fn diagnostic_history(&self, patient_id: i64) -> DbResult<Vec<DiagnosticRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, doctor_id, recorded_at, status, decision, details
            FROM diagnostic_records
            WHERE patient_id = ?
            ORDER BY recorded_at DESC, id DESC
            "#,
        )?;
        let rows = stmt.query_map([patient_id], record_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Patient;

    fn setup_patient(db: &Database) -> i64 {
        let patient = Patient::new("Test".into(), "Patient".into(), 60, "M".into()).unwrap();
        db.insert_patient(&patient).unwrap()
    }

    fn make_record(patient_id: i64, recorded_at: &str, status: AttackStatus) -> DiagnosticRecord {
        DiagnosticRecord {
            id: 0,
            patient_id,
            doctor_id: Some(7),
            recorded_at: recorded_at.into(),
            status,
            decision: "intensive observation".into(),
            details: String::new(),
        }
    }

    #[test]
    fn test_insert_and_history() {
        let db = Database::open_in_memory().unwrap();
        let pid = setup_patient(&db);

        let record = make_record(pid, "2026-02-01T10:00:00+00:00", AttackStatus::Nstemi);
        let id = db.insert_diagnostic_record(&record).unwrap();
        assert!(id > 0);

        let history = db.diagnostic_history(pid).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, id);
        assert_eq!(history[0].status, AttackStatus::Nstemi);
        assert_eq!(history[0].doctor_id, Some(7));
    }

    #[test]
    fn test_history_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let pid = setup_patient(&db);

        for (stamp, status) in [
            ("2026-02-01T10:00:00+00:00", AttackStatus::Normal),
            ("2026-02-03T10:00:00+00:00", AttackStatus::Stemi),
            ("2026-02-02T10:00:00+00:00", AttackStatus::Nstemi),
        ] {
            db.insert_diagnostic_record(&make_record(pid, stamp, status))
                .unwrap();
        }

        let history = db.diagnostic_history(pid).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].status, AttackStatus::Stemi);
        assert_eq!(history[1].status, AttackStatus::Nstemi);
        assert_eq!(history[2].status, AttackStatus::Normal);
    }

    #[test]
    fn test_history_empty_for_unknown_patient() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.diagnostic_history(42).unwrap().is_empty());
    }

    #[test]
    fn test_model_status_round_trips_through_storage() {
        let db = Database::open_in_memory().unwrap();
        let pid = setup_patient(&db);

        let status = AttackStatus::Model("NSTEMI (prob 0.81)".into());
        db.insert_diagnostic_record(&make_record(pid, "2026-02-01T10:00:00+00:00", status.clone()))
            .unwrap();

        let history = db.diagnostic_history(pid).unwrap();
        assert_eq!(history[0].status, status);
    }
}
