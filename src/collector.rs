//! Interactive collection of flight records.
//!
//! The collector runs in two phases: first it asks how many flights to
//! enter, then it prompts for each flight's three fields in turn. Failures
//! stay local: a bad count aborts the whole entry session with an empty
//! list, while a failure inside one record skips only that record.

use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::console;
use crate::flight::{sort_by_destination, Flight};

/// Collect flights from `input`, echoing prompts and messages to `output`.
///
/// The returned list is sorted ascending by destination city. Its length is
/// at most the entered count; records whose entry failed are skipped.
pub fn collect_flights<R, W>(input: &mut R, output: &mut W) -> Vec<Flight>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut flights = Vec::new();

    let count = match console::prompt_line(input, output, "Enter the number of flights: ") {
        Ok(line) => match line.trim().parse::<usize>() {
            Ok(count) => {
                info!("User entered a flight count of {count}");
                count
            }
            Err(err) => {
                error!("Invalid flight count {line:?}: {err}");
                let _ = writeln!(output, "Error: the number of flights must be an integer.");
                return flights;
            }
        },
        Err(err) => {
            error!("Failed to read the flight count: {err}");
            let _ = writeln!(output, "Error: the number of flights must be an integer.");
            return flights;
        }
    };

    for index in 1..=count {
        match read_flight(input, output) {
            Ok(flight) => {
                info!("Added flight: {flight:?}");
                flights.push(flight);
            }
            Err(err) => {
                error!("Failed to read flight #{index}: {err}");
                let _ = writeln!(output, "Error while entering flight #{index}; skipping it.");
            }
        }
    }

    sort_by_destination(&mut flights);
    info!("Flights sorted by destination city");
    flights
}

/// Prompt for one flight's three fields.
fn read_flight<R, W>(input: &mut R, output: &mut W) -> std::io::Result<Flight>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let destination = console::prompt_line(input, output, "Enter the destination city: ")?;
    let flight_number = console::prompt_line(input, output, "Enter the flight number: ")?;
    let aircraft_type = console::prompt_line(input, output, "Enter the aircraft type: ")?;
    Ok(Flight {
        destination,
        flight_number,
        aircraft_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_from(script: &str) -> (Vec<Flight>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let flights = collect_flights(&mut input, &mut output);
        (flights, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collects_and_sorts_by_destination() {
        let (flights, _) = collect_from("2\nTokyo\nJL1\nB777\nParis\nAF100\nA320\n");
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0], Flight::new("Paris", "AF100", "A320"));
        assert_eq!(flights[1], Flight::new("Tokyo", "JL1", "B777"));
    }

    #[test]
    fn test_zero_count_collects_nothing() {
        let (flights, output) = collect_from("0\n");
        assert!(flights.is_empty());
        assert_eq!(output, "Enter the number of flights: ");
    }

    #[test]
    fn test_non_integer_count_aborts_with_empty_list() {
        let (flights, output) = collect_from("two\n");
        assert!(flights.is_empty());
        assert!(output.contains("must be an integer"));
    }

    #[test]
    fn test_negative_count_aborts_with_empty_list() {
        let (flights, output) = collect_from("-1\n");
        assert!(flights.is_empty());
        assert!(output.contains("must be an integer"));
    }

    #[test]
    fn test_count_read_failure_aborts_with_empty_list() {
        let (flights, output) = collect_from("");
        assert!(flights.is_empty());
        assert!(output.contains("must be an integer"));
    }

    #[test]
    fn test_truncated_record_is_skipped_not_fatal() {
        // Second flight's input ends mid-record: it is skipped, the first kept.
        let (flights, output) = collect_from("2\nParis\nAF100\nA320\nTokyo\n");
        assert_eq!(flights, vec![Flight::new("Paris", "AF100", "A320")]);
        assert!(output.contains("flight #2"));
    }

    #[test]
    fn test_count_accepts_surrounding_whitespace() {
        let (flights, _) = collect_from("  1  \nParis\nAF100\nA320\n");
        assert_eq!(flights.len(), 1);
    }
}
