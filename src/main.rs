//! Learning Tracker health-reporting binary.

use learning_tracker::config::{init_tracing, AppConfig, ConfigError};
use learning_tracker::domain::health::health_check;

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let report = health_check();
    tracing::info!(
        environment = config.environment.as_str(),
        status = ?report.status,
        timestamp = %report.timestamp.to_iso_string(),
        "learning tracker healthy"
    );

    Ok(())
}
