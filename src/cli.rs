//! Command-line interface for flightbook.

use clap::Parser;

/// flightbook - record and look up flight data
///
/// Flight records live in `flights.json` in your home directory. Without
/// flags, the file is loaded and written back as-is; diagnostics go to
/// `flights.log` in the current directory.
#[derive(Debug, Parser)]
#[command(name = "flightbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enter new flight data interactively instead of loading the file
    #[arg(long)]
    pub input: bool,

    /// Prompt for an aircraft type and print the matching flights
    #[arg(long = "print_plane_type")]
    pub print_plane_type: bool,
}
