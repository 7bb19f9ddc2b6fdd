//! Tracing subscriber initialization.

use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive`. A subscriber that is
/// already installed is left in place.
pub fn init_tracing(default_directive: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        info!(default_directive, "Tracing initialized");
    } else {
        debug!("Tracing subscriber already installed");
    }
}

/// Install a subscriber that appends to a log file.
///
/// Used while the terminal dashboard owns the screen.
pub fn init_file_tracing(default_directive: &str, path: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    if installed {
        info!(path = %path.as_ref().display(), "File tracing initialized");
    }
    Ok(())
}
