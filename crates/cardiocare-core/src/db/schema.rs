//! SQLite schema definition.

/// Complete database schema for cardiocare.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    age INTEGER NOT NULL CHECK (age BETWEEN 0 AND 120),
    sex TEXT NOT NULL,
    diabetes INTEGER NOT NULL DEFAULT 0,
    pulmonary_disease INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(last_name, first_name);

-- ============================================================================
-- Clinical Reports (Immutable after creation)
-- ============================================================================

CREATE TABLE IF NOT EXISTS symptom_reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    chest_pain INTEGER NOT NULL CHECK (chest_pain BETWEEN 0 AND 2),
    breath_difficulty INTEGER NOT NULL CHECK (breath_difficulty BETWEEN 0 AND 2),
    cold_sweat INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_symptoms_patient
    ON symptom_reports(patient_id, created_at, id);

CREATE TABLE IF NOT EXISTS exam_reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    ecg INTEGER NOT NULL CHECK (ecg BETWEEN 0 AND 2),
    mri INTEGER NOT NULL CHECK (mri IN (0, 1)),
    pulse_rate INTEGER NOT NULL CHECK (pulse_rate BETWEEN 30 AND 250),
    cholesterol REAL NOT NULL CHECK (cholesterol BETWEEN 50 AND 600),
    fasting_blood_sugar INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_exams_patient
    ON exam_reports(patient_id, created_at, id);

-- ============================================================================
-- Diagnostic Records (Append-Only - the audit trail)
-- ============================================================================

CREATE TABLE IF NOT EXISTS diagnostic_records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    doctor_id INTEGER,
    recorded_at TEXT NOT NULL,
    status TEXT NOT NULL,
    decision TEXT NOT NULL,
    details TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_records_patient
    ON diagnostic_records(patient_id, recorded_at, id);

-- Reports and diagnostic records are immutable once written
CREATE TRIGGER IF NOT EXISTS symptom_reports_no_update BEFORE UPDATE ON symptom_reports
BEGIN
    SELECT RAISE(ABORT, 'Symptom reports are immutable');
END;

CREATE TRIGGER IF NOT EXISTS exam_reports_no_update BEFORE UPDATE ON exam_reports
BEGIN
    SELECT RAISE(ABORT, 'Exam reports are immutable');
END;

CREATE TRIGGER IF NOT EXISTS diagnostic_records_no_update BEFORE UPDATE ON diagnostic_records
BEGIN
    SELECT RAISE(ABORT, 'Diagnostic records are immutable');
END;

CREATE TRIGGER IF NOT EXISTS diagnostic_records_no_delete BEFORE DELETE ON diagnostic_records
BEGIN
    SELECT RAISE(ABORT, 'Diagnostic records cannot be deleted');
END;
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_range_checks() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO patients (first_name, last_name, age, sex) VALUES ('A', 'B', 70, 'M')",
            [],
        )
        .unwrap();

        // chest_pain outside 0-2 should fail
        let result = conn.execute(
            "INSERT INTO symptom_reports (patient_id, chest_pain, breath_difficulty) VALUES (1, 3, 0)",
            [],
        );
        assert!(result.is_err());

        // pulse outside 30-250 should fail
        let result = conn.execute(
            "INSERT INTO exam_reports (patient_id, ecg, mri, pulse_rate, cholesterol) VALUES (1, 0, 0, 20, 200)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_diagnostic_records_immutable() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO patients (first_name, last_name, age, sex) VALUES ('A', 'B', 70, 'M')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO diagnostic_records (patient_id, recorded_at, status, decision)
             VALUES (1, '2026-01-01T00:00:00Z', 'Normal/Stable', 'discharge home')",
            [],
        )
        .unwrap();

        let update = conn.execute(
            "UPDATE diagnostic_records SET decision = 'tampered' WHERE id = 1",
            [],
        );
        assert!(update.is_err());

        let delete = conn.execute("DELETE FROM diagnostic_records WHERE id = 1", []);
        assert!(delete.is_err());
    }
}
