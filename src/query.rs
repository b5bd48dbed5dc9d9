//! Aircraft-type lookup over the in-memory flight list.

use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::console;
use crate::flight::Flight;

/// Prompt for an aircraft type and print every flight that matches it.
///
/// Matching is case-sensitive exact string equality, scanned in sequence
/// order. If the prompt itself fails, an error line is printed and no scan
/// happens. Read-only: the flight list is never modified.
pub fn print_flights_with_aircraft_type<R, W>(flights: &[Flight], input: &mut R, output: &mut W)
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let aircraft_type = match console::prompt_line(input, output, "Enter the aircraft type: ") {
        Ok(line) => {
            info!("User requested flights with aircraft type {line:?}");
            line
        }
        Err(err) => {
            error!("Failed to read the aircraft type: {err}");
            let _ = writeln!(output, "Error while entering the aircraft type.");
            return;
        }
    };

    let mut found = false;
    for flight in flights {
        if flight.aircraft_type == aircraft_type {
            let _ = writeln!(
                output,
                "Destination: {}, flight number: {}",
                flight.destination, flight.flight_number
            );
            info!("Found flight: {flight:?}");
            found = true;
        }
    }

    if !found {
        let _ = writeln!(output, "No flights with that aircraft type were found.");
        info!("No flights with aircraft type {aircraft_type:?} were found");
    }
}
