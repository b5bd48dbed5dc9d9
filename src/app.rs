//! Orchestration of one program run.
//!
//! The sequence is fixed: obtain a working flight list (interactive entry or
//! file load), optionally run the aircraft-type query against it, then
//! always save it back. A query-only run therefore rewrites the data file
//! with what it just loaded.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::cli::Cli;
use crate::collector;
use crate::error::{Error, Result};
use crate::query;
use crate::store::{self, LoadOutcome};

/// Fixed name of the data file in the user's home directory.
pub const DATA_FILE_NAME: &str = "flights.json";

/// Resolve the data file path to `<home directory>/flights.json`.
///
/// # Errors
///
/// Returns [`Error::HomeDirectory`] if the home directory cannot be
/// determined.
pub fn data_file_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::HomeDirectory)?;
    Ok(home.join(DATA_FILE_NAME))
}

/// Run one invocation against `data_file`, driven by the parsed flags.
///
/// User interaction goes through `input`/`output` so the whole sequence can
/// be exercised in tests with in-memory buffers.
///
/// # Errors
///
/// Returns an error only for failures the components do not absorb
/// themselves, such as being unable to write to `output`. Load and save
/// problems are logged, reported to the user, and recovered locally.
pub fn run<R, W>(cli: &Cli, input: &mut R, output: &mut W, data_file: &Path) -> Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    info!("Using data file {}", data_file.display());

    let flights = if cli.input {
        // Interactive entry replaces the working set; the existing file is
        // ignored, not merged.
        collector::collect_flights(input, output)
    } else {
        match store::load(data_file) {
            LoadOutcome::Loaded(flights) => flights,
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Invalid(_) => {
                writeln!(
                    output,
                    "Error: the file {} contains invalid data.",
                    data_file.display()
                )?;
                Vec::new()
            }
            LoadOutcome::Unreadable(_) => {
                writeln!(
                    output,
                    "Error while reading the file {}.",
                    data_file.display()
                )?;
                Vec::new()
            }
        }
    };

    if cli.print_plane_type {
        query::print_flights_with_aircraft_type(&flights, input, output);
    }

    if let Err(err) = store::save(&flights, data_file) {
        error!("Saving to {} failed: {err}", data_file.display());
        writeln!(
            output,
            "Error while saving data to {}.",
            data_file.display()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::Flight;
    use std::io::Cursor;

    fn run_with(cli: &Cli, typed: &str, data_file: &Path) -> String {
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut output = Vec::new();
        run(cli, &mut input, &mut output, data_file).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_input_and_query_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join(DATA_FILE_NAME);
        let cli = Cli {
            input: true,
            print_plane_type: true,
        };

        let script = "2\nParis\nAF100\nA320\nTokyo\nJL1\nB777\nA320\n";
        let output = run_with(&cli, script, &data_file);

        // Exactly the Paris/AF100 pair is reported
        assert_eq!(output.matches("Destination: ").count(), 1);
        assert!(output.contains("Destination: Paris, flight number: AF100"));

        // The saved file holds both flights, sorted Paris before Tokyo
        let saved = store::load(&data_file).into_flights();
        assert_eq!(
            saved,
            vec![
                Flight::new("Paris", "AF100", "A320"),
                Flight::new("Tokyo", "JL1", "B777"),
            ]
        );
    }

    #[test]
    fn test_query_only_run_loads_and_rewrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join(DATA_FILE_NAME);
        store::save(&[Flight::new("Oslo", "DY5", "B737")], &data_file).unwrap();

        let cli = Cli {
            input: false,
            print_plane_type: true,
        };
        let output = run_with(&cli, "B737\n", &data_file);
        assert!(output.contains("Destination: Oslo, flight number: DY5"));

        // The file survives the unconditional rewrite unchanged
        let saved = store::load(&data_file).into_flights();
        assert_eq!(saved, vec![Flight::new("Oslo", "DY5", "B737")]);
    }

    #[test]
    fn test_missing_file_run_saves_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join(DATA_FILE_NAME);
        let cli = Cli {
            input: false,
            print_plane_type: false,
        };

        let output = run_with(&cli, "", &data_file);
        // Missing file is an expected condition, silent to the user
        assert!(!output.contains("Error"));
        assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "[]");
    }

    #[test]
    fn test_invalid_file_reports_and_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join(DATA_FILE_NAME);
        std::fs::write(&data_file, "garbage").unwrap();

        let cli = Cli {
            input: false,
            print_plane_type: false,
        };
        let output = run_with(&cli, "", &data_file);
        assert!(output.contains("contains invalid data"));

        // The unconditional save overwrites the garbage with the fallback
        assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "[]");
    }

    #[test]
    fn test_input_mode_replaces_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join(DATA_FILE_NAME);
        store::save(&[Flight::new("Oslo", "DY5", "B737")], &data_file).unwrap();

        let cli = Cli {
            input: true,
            print_plane_type: false,
        };
        run_with(&cli, "1\nParis\nAF100\nA320\n", &data_file);

        let saved = store::load(&data_file).into_flights();
        assert_eq!(saved, vec![Flight::new("Paris", "AF100", "A320")]);
    }
}
