//! Disease predictor: a random forest trained once on the symptom dataset.
//!
//! Training encodes every categorical column, fills missing ages with the
//! dataset median, standardises age, label-encodes the disease column and
//! fits a 100-tree forest on a seeded 80/20 split that keeps every disease
//! on the training side. The held-out rows are only scored for the log line. `SharedPredictor` owns the single trained
//! instance for the life of the process.

pub mod dataset;
pub mod encoding;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::accuracy;
use thiserror::Error;

use crate::models::{ParseEnumError, PatientFeatures, Prediction};
use dataset::EncodedRow;
use encoding::{median, LabelEncoder, StandardScaler};

/// Seed for both the split shuffle and the forest.
pub const RANDOM_SEED: u64 = 42;
/// Fraction of rows held out from training.
pub const TEST_FRACTION: f64 = 0.2;
/// Smallest dataset that still leaves rows on both sides of the split.
pub const MIN_ROWS: usize = 5;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset row {row}: {source}")]
    Encoding {
        row: usize,
        #[source]
        source: ParseEnumError,
    },

    #[error("Dataset has {0} rows, at least {MIN_ROWS} are needed")]
    TooFewRows(usize),

    #[error("Dataset has no usable Age values")]
    MissingAge,

    #[error("Model error: {0}")]
    Model(String),

    #[error("Unknown class code {0}")]
    UnknownLabel(u32),

    #[error("No medical advice found for {0}")]
    AdviceNotFound(String),
}

type Forest = RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;

/// Fitted classifier. A dataset with a single disease has nothing to
/// separate, and smartcore refuses to fit one class.
enum Model {
    Forest(Box<Forest>),
    Single(u32),
}

impl Model {
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<u32>, PredictorError> {
        match self {
            Self::Forest(forest) => forest
                .predict(&DenseMatrix::from_2d_vec(&x.to_vec()))
                .map_err(|e| PredictorError::Model(e.to_string())),
            Self::Single(code) => Ok(vec![*code; x.len()]),
        }
    }
}

pub struct DiseasePredictor {
    model: Model,
    labels: LabelEncoder,
    age_scaler: StandardScaler,
    /// First advice text seen for each disease.
    advice: HashMap<String, String>,
    train_rows: usize,
    test_rows: usize,
}

impl std::fmt::Debug for DiseasePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiseasePredictor")
            .field("classes", &self.labels.classes())
            .field("age_scaler", &self.age_scaler)
            .field("train_rows", &self.train_rows)
            .field("test_rows", &self.test_rows)
            .finish_non_exhaustive()
    }
}

fn feature_row(row: &EncodedRow, age: f64) -> Vec<f64> {
    vec![
        row.fever,
        row.cough,
        row.fatigue,
        row.difficulty_breathing,
        age,
        row.gender,
        row.blood_pressure,
        row.cholesterol,
    ]
}

impl DiseasePredictor {
    /// Load the CSV at `path` and train.
    pub fn train(path: &Path) -> Result<Self, PredictorError> {
        tracing::info!(path = %path.display(), "Training disease predictor");
        let rows = dataset::load_rows(path)?;
        let encoded = dataset::encode_rows(&rows)?;
        Self::from_rows(&encoded)
    }

    pub fn from_rows(rows: &[EncodedRow]) -> Result<Self, PredictorError> {
        if rows.len() < MIN_ROWS {
            return Err(PredictorError::TooFewRows(rows.len()));
        }

        let known_ages: Vec<f64> = rows.iter().filter_map(|r| r.age).collect();
        let fill_age = median(&known_ages).ok_or(PredictorError::MissingAge)?;
        let ages: Vec<f64> = rows.iter().map(|r| r.age.unwrap_or(fill_age)).collect();
        let age_scaler = StandardScaler::fit(&ages).ok_or(PredictorError::MissingAge)?;

        let mut labels = LabelEncoder::default();
        let mut advice = HashMap::new();
        let mut x = Vec::with_capacity(rows.len());
        let mut y = Vec::with_capacity(rows.len());
        for (row, age) in rows.iter().zip(&ages) {
            y.push(labels.encode(&row.disease));
            x.push(feature_row(row, age_scaler.transform(*age)));
            advice
                .entry(row.disease.clone())
                .or_insert_with(|| row.advice.clone());
        }

        let (train_idx, test_idx) = split_indices(&y);
        let y_train: Vec<u32> = train_idx.iter().map(|&i| y[i]).collect();

        let model = if labels.classes().len() == 1 {
            // first-appearance encoding gives the only class code 0
            Model::Single(0)
        } else {
            let x_train = DenseMatrix::from_2d_vec(&pick(&x, &train_idx));
            let params = RandomForestClassifierParameters::default()
                .with_n_trees(100)
                .with_seed(RANDOM_SEED);
            let forest: Forest = RandomForestClassifier::fit(&x_train, &y_train, params)
                .map_err(|e| PredictorError::Model(e.to_string()))?;
            Model::Forest(Box::new(forest))
        };

        let predictor = Self {
            model,
            labels,
            age_scaler,
            advice,
            train_rows: train_idx.len(),
            test_rows: test_idx.len(),
        };

        let y_test: Vec<u32> = test_idx.iter().map(|&i| y[i]).collect();
        let accuracy = predictor.accuracy(&pick(&x, &test_idx), &y_test)?;
        tracing::info!(
            classes = predictor.labels.classes().len(),
            train_rows = predictor.train_rows,
            test_rows = predictor.test_rows,
            holdout_accuracy = accuracy,
            "Disease predictor trained"
        );

        Ok(predictor)
    }

    fn accuracy(&self, x: &[Vec<f64>], y: &[u32]) -> Result<f64, PredictorError> {
        if x.is_empty() {
            return Ok(0.0);
        }
        let predicted = self.model.predict(x)?;
        Ok(accuracy(&y.to_vec(), &predicted))
    }

    /// Predict the disease for one patient and attach its advice text.
    pub fn predict(&self, features: &PatientFeatures) -> Result<Prediction, PredictorError> {
        let row = vec![
            features.fever,
            features.cough,
            features.fatigue,
            features.difficulty_breathing,
            self.age_scaler.transform(features.age),
            features.gender,
            features.blood_pressure,
            features.cholesterol,
        ];
        let predicted = self.model.predict(&[row])?;
        let code = predicted
            .first()
            .copied()
            .ok_or_else(|| PredictorError::Model("empty prediction".into()))?;
        let disease = self
            .labels
            .decode(code)
            .ok_or(PredictorError::UnknownLabel(code))?;
        let advice = self.advice_for(disease)?;

        tracing::debug!(disease, "Prediction made");
        Ok(Prediction {
            disease: disease.to_string(),
            advice: advice.to_string(),
        })
    }

    /// Advice text of the first dataset row labelled `disease`.
    pub fn advice_for(&self, disease: &str) -> Result<&str, PredictorError> {
        self.advice
            .get(disease)
            .map(String::as_str)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| PredictorError::AdviceNotFound(disease.to_string()))
    }

    pub fn classes(&self) -> &[String] {
        self.labels.classes()
    }

    pub fn age_scaler(&self) -> StandardScaler {
        self.age_scaler
    }

    pub fn split_sizes(&self) -> (usize, usize) {
        (self.train_rows, self.test_rows)
    }
}

/// Seeded shuffle, then the first row of each class (in shuffled order)
/// stays in training and up to `TEST_FRACTION` of the rows go to the
/// holdout. Returns `(train, test)` indices.
fn split_indices(labels: &[u32]) -> (Vec<usize>, Vec<usize>) {
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(RANDOM_SEED));
    let wanted = ((labels.len() as f64) * TEST_FRACTION).ceil() as usize;

    let mut seen = HashSet::new();
    let mut train = Vec::with_capacity(labels.len());
    let mut test = Vec::with_capacity(wanted);
    for i in order {
        if seen.insert(labels[i]) || test.len() >= wanted {
            train.push(i);
        } else {
            test.push(i);
        }
    }
    (train, test)
}

fn pick(x: &[Vec<f64>], idx: &[usize]) -> Vec<Vec<f64>> {
    idx.iter().map(|&i| x[i].clone()).collect()
}

// ═══════════════════════════════════════════
// Shared instance
// ═══════════════════════════════════════════

/// Owner of the process-wide trained predictor.
///
/// The model is trained on the first successful `get()` and reused by
/// every later call; it is never retrained. A failed training is not
/// remembered, so the next `get()` tries again.
#[derive(Debug)]
pub struct SharedPredictor {
    dataset_path: PathBuf,
    cell: OnceLock<DiseasePredictor>,
}

impl SharedPredictor {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn is_trained(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<&DiseasePredictor, PredictorError> {
        if let Some(predictor) = self.cell.get() {
            return Ok(predictor);
        }
        let trained = DiseasePredictor::train(&self.dataset_path)?;
        Ok(self.cell.get_or_init(|| trained))
    }
}
