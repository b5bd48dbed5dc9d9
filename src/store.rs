//! JSON persistence for the flight list.
//!
//! The store is deliberately simple: one file, overwritten in full on every
//! save. Load never raises to its caller; it reports what happened through
//! [`LoadOutcome`] and lets the orchestrator decide what to tell the user.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::flight::Flight;

/// The result of loading the data file.
///
/// Every variant other than [`LoadOutcome::Loaded`] collapses to an empty
/// flight list; the variants exist so the orchestrator can pick the right
/// user-facing message without matching on error types.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read and decoded; flights are in file order.
    Loaded(Vec<Flight>),
    /// The file does not exist. Expected on first run.
    Missing,
    /// The file exists but does not contain valid JSON of the right shape.
    Invalid(serde_json::Error),
    /// The file exists but could not be read.
    Unreadable(std::io::Error),
}

impl LoadOutcome {
    /// Collapse the outcome to the best available flight list.
    #[must_use]
    pub fn into_flights(self) -> Vec<Flight> {
        match self {
            Self::Loaded(flights) => flights,
            Self::Missing | Self::Invalid(_) | Self::Unreadable(_) => Vec::new(),
        }
    }
}

/// Load the flight list from the JSON file at `path`.
///
/// File order is preserved; no sorting happens here.
pub fn load(path: &Path) -> LoadOutcome {
    if !path.exists() {
        warn!(
            "Data file {} not found, starting with an empty flight list",
            path.display()
        );
        return LoadOutcome::Missing;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            error!("Failed to read {}: {err}", path.display());
            return LoadOutcome::Unreadable(err);
        }
    };

    match serde_json::from_str::<Vec<Flight>>(&contents) {
        Ok(flights) => {
            info!("Loaded {} flights from {}", flights.len(), path.display());
            LoadOutcome::Loaded(flights)
        }
        Err(err) => {
            error!("Failed to decode JSON from {}: {err}", path.display());
            LoadOutcome::Invalid(err)
        }
    }
}

/// Save the flight list as pretty-printed JSON at `path`.
///
/// The file is overwritten in full. Four-space indentation and the
/// declaration order of [`Flight`]'s fields keep the output byte-compatible
/// with files produced by earlier versions of this tool; non-ASCII content
/// is written literally. The file handle is scoped to this call.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written. The in-memory
/// flight list is unaffected.
pub fn save(flights: &[Flight], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    flights.serialize(&mut serializer)?;
    writer.flush().map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} flights to {}", flights.len(), path.display());
    Ok(())
}
