//! Advice store: a flat list of canned medical tips, sampled uniformly.

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Header of the single text column in the advice CSV.
pub const ADVICE_COLUMN: &str = "Medical Advices";

/// Reply used when the store holds nothing.
pub const NO_ADVICE_MESSAGE: &str = "Sorry, no medical advice is available at the moment.";

#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' not found")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, Default)]
pub struct AdviceStore {
    entries: Vec<String>,
}

impl AdviceStore {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Read every non-blank `Medical Advices` cell, in file order.
    pub fn load(path: &Path) -> Result<Self, AdviceError> {
        let mut reader = csv::Reader::from_path(path)?;
        let column = reader
            .headers()?
            .iter()
            .position(|h| h.trim() == ADVICE_COLUMN)
            .ok_or(AdviceError::MissingColumn(ADVICE_COLUMN))?;

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(text) = record.get(column).map(str::trim) {
                if !text.is_empty() {
                    entries.push(text.to_string());
                }
            }
        }

        tracing::info!(count = entries.len(), path = %path.display(), "Loaded medical advice");
        Ok(Self { entries })
    }

    /// Like `load`, but a failure yields an empty store plus the message to
    /// show the user.
    pub fn load_or_empty(path: &Path) -> (Self, Option<String>) {
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load medical advice");
                (Self::default(), Some(format!("Failed to load medical advice: {e}")))
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One entry chosen uniformly, or `NO_ADVICE_MESSAGE` when empty.
    pub fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.entries
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| NO_ADVICE_MESSAGE.to_string())
    }
}
