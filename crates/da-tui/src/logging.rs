//! Log file setup
//!
//! The terminal belongs to the UI, so logs only go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::TuiError;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "da_core=debug,da_tui=info";

/// Send tracing output to `log_file`. Does nothing without a file.
pub fn init(log_file: Option<&Path>) -> Result<(), TuiError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))
}
