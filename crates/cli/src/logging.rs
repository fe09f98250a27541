//! Logging setup
//!
//! `EUROVISOR_LOG_FORMAT=json` switches to JSON lines; anything else gives
//! the human-readable format. Filtering follows `RUST_LOG`. Logs go to
//! stderr so stdout stays clean for `--json`.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "eurovisor=warn,eurovisor_core=warn,eurovisor_infra_http=warn";

pub fn init(verbose: bool) -> Result<()> {
    let log_format =
        std::env::var("EUROVISOR_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::try_new(DEFAULT_FILTER.replace("warn", "debug"))
            .context("Failed to create env filter")?,
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER).context("Failed to create env filter")?,
    };

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install logger")?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install logger")?;
        }
    }

    Ok(())
}
