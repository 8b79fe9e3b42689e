/// Zero-mean, unit-variance scaling fitted on one column.
/// Uses the population standard deviation; a constant column scales by 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    pub mean: f64,
    pub std: f64,
}

impl StandardScaler {
    /// Fit on `values`. Returns `None` for an empty slice.
    pub fn fit(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();
        Some(Self {
            mean,
            std: if std > 0.0 { std } else { 1.0 },
        })
    }

    pub fn transform(&self, value: f64) -> f64 {
        (value - self.mean) / self.std
    }
}

/// Median of the values; `None` when empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}

/// Maps class labels to dense integer codes in first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Code for `label`, registering it if new.
    pub fn encode(&mut self, label: &str) -> u32 {
        match self.classes.iter().position(|c| c == label) {
            Some(i) => i as u32,
            None => {
                self.classes.push(label.to_string());
                (self.classes.len() - 1) as u32
            }
        }
    }

    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaler_centres_and_scales() {
        let s = StandardScaler::fit(&[10.0, 20.0, 30.0]).unwrap();
        assert!((s.mean - 20.0).abs() < 1e-12);
        // population std of 10,20,30
        assert!((s.std - (200.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!(s.transform(20.0).abs() < 1e-12);
        assert!(s.transform(30.0) > 0.0);
        assert!(s.transform(10.0) < 0.0);
    }

    #[test]
    fn constant_column_does_not_divide_by_zero() {
        let s = StandardScaler::fit(&[5.0, 5.0]).unwrap();
        assert_eq!(s.std, 1.0);
        assert_eq!(s.transform(7.0), 2.0);
    }

    #[test]
    fn scaler_needs_values() {
        assert!(StandardScaler::fit(&[]).is_none());
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn label_codes_follow_first_appearance() {
        let mut enc = LabelEncoder::default();
        assert_eq!(enc.encode("Flu"), 0);
        assert_eq!(enc.encode("Cold"), 1);
        assert_eq!(enc.encode("Flu"), 0);
        assert_eq!(enc.decode(1), Some("Cold"));
        assert_eq!(enc.decode(2), None);
        assert_eq!(enc.classes().len(), 2);
    }
}
