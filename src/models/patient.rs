use std::str::FromStr;

use chrono::NaiveDateTime;

use super::enums::{Gender, Level, YesNo};

/// Answers collected by one health check, kept as the normalised text the
/// patient typed so the report shows exactly what was entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthAnswers {
    pub day_note: String,
    pub fever: String,
    pub cough: String,
    pub fatigue: String,
    pub difficulty_breathing: String,
    pub age: u32,
    pub gender: String,
    pub blood_pressure: String,
    pub cholesterol: String,
}

/// Encoded feature vector, in dataset column order. Age is raw years;
/// scaling happens inside the predictor with the training statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientFeatures {
    pub fever: f64,
    pub cough: f64,
    pub fatigue: f64,
    pub difficulty_breathing: f64,
    pub age: f64,
    pub gender: f64,
    pub blood_pressure: f64,
    pub cholesterol: f64,
}

/// yes → 1, anything else → 0.
pub fn encode_yes_no(raw: &str) -> f64 {
    YesNo::from_str(raw).map(|v| v.code()).unwrap_or(0.0)
}

/// male → 1, anything else → 0.
pub fn encode_gender(raw: &str) -> f64 {
    Gender::from_str(raw).map(|v| v.code()).unwrap_or(0.0)
}

/// low/normal/high → 0/1/2, anything else → 0.
pub fn encode_level(raw: &str) -> f64 {
    Level::from_str(raw).map(|v| v.code()).unwrap_or(0.0)
}

impl PatientFeatures {
    pub fn from_answers(answers: &HealthAnswers) -> Self {
        Self {
            fever: encode_yes_no(&answers.fever),
            cough: encode_yes_no(&answers.cough),
            fatigue: encode_yes_no(&answers.fatigue),
            difficulty_breathing: encode_yes_no(&answers.difficulty_breathing),
            age: f64::from(answers.age),
            gender: encode_gender(&answers.gender),
            blood_pressure: encode_level(&answers.blood_pressure),
            cholesterol: encode_level(&answers.cholesterol),
        }
    }
}

/// Classifier output for one patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub disease: String,
    pub advice: String,
}

/// One saved health check. Never updated in place; a later check
/// overwrites the whole report.
#[derive(Debug, Clone)]
pub struct PatientRecord {
    pub name: String,
    pub answers: HealthAnswers,
    pub prediction: Prediction,
    pub recorded_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> HealthAnswers {
        HealthAnswers {
            day_note: "tiring".into(),
            fever: "yes".into(),
            cough: "no".into(),
            fatigue: "yes".into(),
            difficulty_breathing: "no".into(),
            age: 42,
            gender: "female".into(),
            blood_pressure: "high".into(),
            cholesterol: "normal".into(),
        }
    }

    #[test]
    fn features_follow_answers() {
        let f = PatientFeatures::from_answers(&answers());
        assert_eq!(f.fever, 1.0);
        assert_eq!(f.cough, 0.0);
        assert_eq!(f.fatigue, 1.0);
        assert_eq!(f.difficulty_breathing, 0.0);
        assert_eq!(f.age, 42.0);
        assert_eq!(f.gender, 0.0);
        assert_eq!(f.blood_pressure, 2.0);
        assert_eq!(f.cholesterol, 1.0);
    }

    #[test]
    fn blood_pressure_encoding() {
        assert_eq!(encode_level("low"), 0.0);
        assert_eq!(encode_level("normal"), 1.0);
        assert_eq!(encode_level("high"), 2.0);
        assert_eq!(encode_level("sky-high"), 0.0);
    }

    #[test]
    fn unknown_binary_values_default_to_zero() {
        assert_eq!(encode_yes_no("sometimes"), 0.0);
        assert_eq!(encode_gender("other"), 0.0);
        assert_eq!(encode_gender("Male"), 1.0);
    }
}
