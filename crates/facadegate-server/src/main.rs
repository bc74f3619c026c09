//! facadegate server
//!
//! Loads `facadegate.yaml` (or the path given as the first argument) and
//! serves one session over stdin/stdout. Logs go to stderr.

use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

use facadegate_core::Result;
use facadegate_server::{app_state, config, transport};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "facadegate-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "facadegate.yaml".to_string());
    let cfg = config::load_from_file(&path)?;

    let state = app_state::AppState::new(cfg)?;
    tracing::info!(
        config = %path,
        allowed = ?state.allowed().names(),
        facades = ?state.registry().registered_facades(),
        "facadegate-server starting"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    transport::stdio::run_session(state, stdin, tokio::io::stdout()).await
}
