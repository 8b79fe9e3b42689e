//! Per-patient health reports: one plain-text file per name,
//! `<name>_health_report.txt`, overwritten by every health check.

use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::REPORT_SUFFIX;
use crate::models::PatientRecord;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}{REPORT_SUFFIX}"))
    }

    /// Whether this patient has a saved report.
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// Write (or overwrite) the report for `record.name`.
    pub fn write(&self, record: &PatientRecord) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&record.name);
        std::fs::write(&path, render(record))?;
        tracing::info!(path = %path.display(), "Health report saved");
        Ok(path)
    }

    /// Report text, or `None` if the patient has no report.
    pub fn read(&self, name: &str) -> Result<Option<String>, ReportError> {
        match std::fs::read_to_string(self.path_for(name)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Human-readable dump of one health check.
pub fn render(record: &PatientRecord) -> String {
    let a = &record.answers;
    let mut out = String::new();
    let _ = writeln!(out, "Health Report for {}", record.name);
    let _ = writeln!(out, "Date: {}", record.recorded_at.format("%Y-%m-%d %H:%M:%S"));
    out.push('\n');
    for (question, answer) in [
        ("Day", a.day_note.clone()),
        ("Fever", a.fever.clone()),
        ("Cough", a.cough.clone()),
        ("Fatigue", a.fatigue.clone()),
        ("Difficulty breathing", a.difficulty_breathing.clone()),
        ("Age", a.age.to_string()),
        ("Gender", a.gender.clone()),
        ("Blood pressure", a.blood_pressure.clone()),
        ("Cholesterol level", a.cholesterol.clone()),
    ] {
        let _ = writeln!(out, "{question}: {answer}");
    }
    out.push('\n');
    let _ = writeln!(out, "Predicted Disease: {}", record.prediction.disease);
    let _ = writeln!(out, "Medical Advice: {}", record.prediction.advice);
    out
}
