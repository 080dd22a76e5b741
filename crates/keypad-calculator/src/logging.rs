//! Logging setup
//!
//! The terminal belongs to the UI, so log output only goes to a file. With
//! no log file configured, tracing events are simply not collected.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::core::{CalcError, CalcResult};

static INIT: Once = Once::new();

/// Filter directive in effect for `config`
#[must_use]
pub fn filter_directive(config: &AppConfig) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

/// Installs the global subscriber
///
/// Returns `Ok(true)` when this call installed it. Returns `Ok(false)` when
/// no log file is configured or a previous call already ran; in that case
/// no file is touched.
pub fn init(config: &AppConfig) -> CalcResult<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };
    if INIT.is_completed() {
        return Ok(false);
    }

    let directive = filter_directive(config);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| CalcError::config(format!("invalid log filter {directive:?}: {e}")))?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut installed = Ok(false);
    INIT.call_once(|| {
        installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .try_init()
            .map(|()| true)
            .map_err(|e| CalcError::config(format!("cannot install log subscriber: {e}")));
    });

    installed
}
