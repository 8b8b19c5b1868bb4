//! Structured logging to a file.
//!
//! The terminal belongs to the UI, so log output goes to a file instead of
//! stderr. The filter comes from `RUST_LOG`, defaulting to
//! [`DEFAULT_FILTER`].

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "ghdash=info";

/// Install the global subscriber writing to `log_file`.
///
/// Returns `Ok(false)` when logging is disabled (`None`) or a subscriber
/// was already installed.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), path = %path.display(), "logging started");
    }
    Ok(installed)
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_disabled_logging_installs_nothing() {
        assert!(!init_logging(None).unwrap());
    }

    #[test]
    fn test_open_log_file_creates_directories_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ghdash.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }
}
