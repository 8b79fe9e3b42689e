//! Training dataset: CSV rows and their categorical encoding.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::PredictorError;
use crate::models::{Gender, Level, Outcome, YesNo};

/// One CSV row, columns addressed by header name.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Fever")]
    pub fever: String,
    #[serde(rename = "Cough")]
    pub cough: String,
    #[serde(rename = "Fatigue")]
    pub fatigue: String,
    #[serde(rename = "Difficulty breathing")]
    pub difficulty_breathing: String,
    #[serde(rename = "Age", deserialize_with = "csv::invalid_option")]
    pub age: Option<f64>,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Blood pressure")]
    pub blood_pressure: String,
    #[serde(rename = "Cholesterol level")]
    pub cholesterol: String,
    #[serde(rename = "Outcome variable")]
    pub outcome: String,
    #[serde(rename = "Medical advice")]
    pub advice: String,
}

/// A row with every categorical column mapped to its code.
/// `age` is still raw years (or missing); `outcome` is parsed but is not a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRow {
    pub disease: String,
    pub fever: f64,
    pub cough: f64,
    pub fatigue: f64,
    pub difficulty_breathing: f64,
    pub age: Option<f64>,
    pub gender: f64,
    pub blood_pressure: f64,
    pub cholesterol: f64,
    pub outcome: u8,
    pub advice: String,
}

pub fn load_rows(path: &Path) -> Result<Vec<DatasetRow>, PredictorError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<DatasetRow>, _>>()?;
    Ok(rows)
}

fn parse<T>(row: usize, value: &str) -> Result<T, PredictorError>
where
    T: FromStr<Err = crate::models::ParseEnumError>,
{
    T::from_str(value).map_err(|source| PredictorError::Encoding { row, source })
}

impl DatasetRow {
    /// Strict encoding: an unknown categorical value is an error naming
    /// the 1-based data row.
    pub fn encode(&self, row: usize) -> Result<EncodedRow, PredictorError> {
        Ok(EncodedRow {
            disease: self.disease.trim().to_string(),
            fever: parse::<YesNo>(row, &self.fever)?.code(),
            cough: parse::<YesNo>(row, &self.cough)?.code(),
            fatigue: parse::<YesNo>(row, &self.fatigue)?.code(),
            difficulty_breathing: parse::<YesNo>(row, &self.difficulty_breathing)?.code(),
            age: self.age,
            gender: parse::<Gender>(row, &self.gender)?.code(),
            blood_pressure: parse::<Level>(row, &self.blood_pressure)?.code(),
            cholesterol: parse::<Level>(row, &self.cholesterol)?.code(),
            outcome: parse::<Outcome>(row, &self.outcome)?.code(),
            advice: self.advice.trim().to_string(),
        })
    }
}

pub fn encode_rows(rows: &[DatasetRow]) -> Result<Vec<EncodedRow>, PredictorError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| row.encode(i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "Disease,Fever,Cough,Fatigue,Difficulty breathing,Age,Gender,Blood pressure,Cholesterol level,Outcome variable,Medical advice\n";

    fn write(dir: &TempDir, rows: &str) -> std::path::PathBuf {
        let path = dir.path().join("data.csv");
        std::fs::write(&path, format!("{HEADER}{rows}")).unwrap();
        path
    }

    #[test]
    fn reads_rows_by_header() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Flu,yes,no,Yes,no,30,male,High,low,Positive,\"Rest, fluids.\"\n");
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].disease, "Flu");
        assert_eq!(rows[0].age, Some(30.0));
        assert_eq!(rows[0].advice, "Rest, fluids.");
    }

    #[test]
    fn encodes_categoricals() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Flu,yes,no,Yes,no,30,male,High,low,Borderline,Rest.\n");
        let rows = load_rows(&path).unwrap();
        let e = rows[0].encode(1).unwrap();
        assert_eq!(
            (e.fever, e.cough, e.fatigue, e.difficulty_breathing),
            (1.0, 0.0, 1.0, 0.0)
        );
        assert_eq!(e.gender, 1.0);
        assert_eq!(e.blood_pressure, 2.0);
        assert_eq!(e.cholesterol, 0.0);
        assert_eq!(e.outcome, 2);
    }

    #[test]
    fn blank_or_garbled_age_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "Flu,yes,no,yes,no,,male,high,low,Positive,Rest.\nFlu,yes,no,yes,no,old,male,high,low,Positive,Rest.\n",
        );
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows[0].age, None);
        assert_eq!(rows[1].age, None);
    }

    #[test]
    fn unknown_category_names_row() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "Flu,yes,no,yes,no,30,male,high,low,Positive,Rest.\nCold,no,yes,no,no,20,female,extreme,low,Negative,Sleep.\n",
        );
        let rows = load_rows(&path).unwrap();
        match encode_rows(&rows) {
            Err(PredictorError::Encoding { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(source.value, "extreme");
            }
            other => panic!("expected encoding error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_csv_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Disease,Fever\nFlu,yes\n").unwrap();
        assert!(matches!(load_rows(&path), Err(PredictorError::Csv(_))));
    }
}
