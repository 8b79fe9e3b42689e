pub mod advice; // Daily medical advice store
pub mod chatbot; // Pattern chatbot for anonymous users
pub mod config;
pub mod models;
pub mod predictor; // Random-forest disease predictor
pub mod report; // Per-patient health report files
pub mod scheduler; // One-shot reminder queue
pub mod session; // Conversation state machine
pub mod shell; // Terminal front end

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use session::Session;

pub fn run() -> std::io::Result<()> {
    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::default();
    let (session, warnings) = Session::from_config(&config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(shell::run_shell(
        session,
        warnings,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    ));

    if let Err(e) = &result {
        tracing::error!(error = %e, "Shell stopped on I/O error");
    }
    tracing::info!("{} stopped", config::APP_NAME);
    result
}
