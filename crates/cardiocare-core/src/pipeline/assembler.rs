//! Clinical snapshot assembly.

use crate::db::Database;
use crate::models::ClinicalSnapshot;

use super::{PipelineError, PipelineResult};

/// Builds the diagnostic input for a patient: the profile plus the most
/// recent symptom and exam reports.
///
/// Read-only; fails rather than produce a partial snapshot.
pub struct SnapshotAssembler<'a> {
    db: &'a Database,
}

impl<'a> SnapshotAssembler<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Assemble the snapshot for `patient_id`.
    ///
    /// Fails with [`PipelineError::PatientNotFound`] for an unknown
    /// patient, and with [`PipelineError::MissingClinicalData`] when no
    /// symptom or no exam report has been recorded yet.
    pub fn assemble(&self, patient_id: i64) -> PipelineResult<ClinicalSnapshot> {
        let patient = self
            .db
            .get_patient(patient_id)?
            .ok_or(PipelineError::PatientNotFound(patient_id))?;

        let symptoms = self
            .db
            .latest_symptom_report(patient_id)?
            .ok_or(PipelineError::MissingClinicalData {
                patient_id,
                kind: "symptom",
            })?;

        let exams = self
            .db
            .latest_exam_report(patient_id)?
            .ok_or(PipelineError::MissingClinicalData {
                patient_id,
                kind: "exam",
            })?;

        Ok(ClinicalSnapshot {
            patient,
            symptoms,
            exams,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamReport, Patient, SymptomReport};

    fn setup_db() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let patient = Patient::new("Test".into(), "Patient".into(), 70, "M".into()).unwrap();
        let pid = db.insert_patient(&patient).unwrap();
        (db, pid)
    }

    #[test]
    fn test_assemble_complete_snapshot() {
        let (db, pid) = setup_db();
        db.insert_symptom_report(&SymptomReport::new(pid, 2, 1, true).unwrap())
            .unwrap();
        db.insert_exam_report(&ExamReport::new(pid, 2, 0, 90, 200.0).unwrap())
            .unwrap();

        let snapshot = SnapshotAssembler::new(&db).assemble(pid).unwrap();
        assert_eq!(snapshot.patient.id, pid);
        assert_eq!(snapshot.symptoms.patient_id, pid);
        assert_eq!(snapshot.exams.patient_id, pid);
        assert_eq!(snapshot.symptoms.chest_pain, 2);
    }

    #[test]
    fn test_unknown_patient() {
        let db = Database::open_in_memory().unwrap();
        let err = SnapshotAssembler::new(&db).assemble(42).unwrap_err();
        assert!(matches!(err, PipelineError::PatientNotFound(42)));
    }

    #[test]
    fn test_missing_symptom_report() {
        let (db, pid) = setup_db();
        db.insert_exam_report(&ExamReport::new(pid, 0, 0, 80, 190.0).unwrap())
            .unwrap();

        let err = SnapshotAssembler::new(&db).assemble(pid).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingClinicalData { kind: "symptom", .. }
        ));
    }

    #[test]
    fn test_missing_exam_report() {
        let (db, pid) = setup_db();
        db.insert_symptom_report(&SymptomReport::new(pid, 1, 0, false).unwrap())
            .unwrap();

        let err = SnapshotAssembler::new(&db).assemble(pid).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingClinicalData { kind: "exam", .. }
        ));
    }

    #[test]
    fn test_assemble_uses_latest_reports() {
        let (db, pid) = setup_db();

        let mut old = SymptomReport::new(pid, 0, 0, false).unwrap();
        old.created_at = "2026-01-01T08:00:00+00:00".into();
        let mut new = SymptomReport::new(pid, 2, 0, false).unwrap();
        new.created_at = "2026-01-05T08:00:00+00:00".into();
        db.insert_symptom_report(&old).unwrap();
        db.insert_symptom_report(&new).unwrap();
        db.insert_exam_report(&ExamReport::new(pid, 0, 0, 80, 190.0).unwrap())
            .unwrap();

        let snapshot = SnapshotAssembler::new(&db).assemble(pid).unwrap();
        assert_eq!(snapshot.symptoms.chest_pain, 2);
    }
}
