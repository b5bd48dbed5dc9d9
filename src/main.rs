//! `flightbook` - CLI for recording and querying flight data
//!
//! This binary wires the pieces together: parse the flags, set up the
//! diagnostic log, then run the load-or-collect / query / save sequence.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use flightbook::logging::LOG_FILE_NAME;
use flightbook::{app, init_logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The log is a diagnostic trail; failing to open it must not block a run.
    if let Err(err) = init_logging(Path::new(LOG_FILE_NAME)) {
        eprintln!("warning: could not open {LOG_FILE_NAME}: {err}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let result =
        app::data_file_path().and_then(|path| app::run(&cli, &mut input, &mut output, &path));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Unexpected error in the main sequence: {err}");
            let _ = writeln!(
                output,
                "An unexpected error occurred. Check {LOG_FILE_NAME} for details."
            );
            ExitCode::FAILURE
        }
    }
}
