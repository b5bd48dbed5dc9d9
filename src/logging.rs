//! Logging configuration for flightbook.
//!
//! All diagnostics go to a fixed-name log file in the current working
//! directory, one line per event with a timestamp and severity. The file is
//! a diagnostic trail, not part of the program's contract; its format may
//! change between versions.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Name of the log file, created in the current working directory.
pub const LOG_FILE_NAME: &str = "flights.log";

/// Initialize the logging system, appending to the log file at `path`.
///
/// This is called once at startup, before any other component runs. The
/// level defaults to `info` for this crate and can be overridden with
/// `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened. The caller may treat
/// that as non-fatal: the program works without its diagnostic trail.
pub fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flightbook=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_owned())),
    );

    // Install the subscriber (ignore error if already set)
    let _ = subscriber.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        init_logging(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        // Only the first call installs a subscriber; the second is a no-op.
        let dir = tempfile::tempdir().unwrap();
        init_logging(&dir.path().join("a.log")).unwrap();
        init_logging(&dir.path().join("b.log")).unwrap();
    }

    #[test]
    fn test_init_logging_bad_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(LOG_FILE_NAME);
        assert!(init_logging(&path).is_err());
    }
}
