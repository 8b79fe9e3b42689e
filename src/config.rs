use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Health Buddy";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Training dataset shipped with the application.
pub const DATASET_FILE: &str = "Disease_and_Medical_Advice_Analysis.csv";

/// Canned advice list shipped with the application.
pub const ADVICE_FILE: &str = "MedicalAdvices.csv";

/// Suffix of every per-patient report file.
pub const REPORT_SUFFIX: &str = "_health_report.txt";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "warn,health_buddy_lib=info"
}

/// Get the application data directory
/// ~/HealthBuddy/ on all platforms; falls back to the working directory
/// when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("HealthBuddy")
}

/// Get the reports directory
pub fn reports_dir() -> PathBuf {
    app_data_dir().join("reports")
}

/// Directory holding the bundled CSV files, relative to the working directory.
pub fn data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Everything the library needs to start a session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub advice_path: PathBuf,
    pub reports_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: data_dir().join(DATASET_FILE),
            advice_path: data_dir().join(ADVICE_FILE),
            reports_dir: reports_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_dir_under_app_data() {
        let reports = reports_dir();
        let app = app_data_dir();
        assert!(reports.starts_with(app));
        assert!(reports.ends_with("reports"));
    }

    #[test]
    fn app_data_dir_named_after_app() {
        assert!(app_data_dir().ends_with("HealthBuddy"));
    }

    #[test]
    fn default_config_points_at_bundled_data() {
        let config = AppConfig::default();
        assert!(config.dataset_path.ends_with(DATASET_FILE));
        assert!(config.advice_path.ends_with(ADVICE_FILE));
        assert!(config.dataset_path.starts_with("data"));
    }

    #[test]
    fn app_name_is_health_buddy() {
        assert_eq!(APP_NAME, "Health Buddy");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
