//! Core flight record type for flightbook.
//!
//! This module defines the flat data structure that the rest of the crate
//! collects, queries, and persists.

use serde::{Deserialize, Serialize};

/// A single flight entry.
///
/// The JSON field names are the natural-language labels used by the data
/// files this tool has always produced; they must stay spelled exactly this
/// way so that older `flights.json` files keep loading.
///
/// Any key may be absent in a file written by hand or by an older run; an
/// absent key deserializes to the empty string rather than failing the whole
/// load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flight {
    /// Destination city.
    #[serde(rename = "город назначения")]
    pub destination: String,

    /// Flight number. Free-form; not validated as numeric or unique.
    #[serde(rename = "номер рейса")]
    pub flight_number: String,

    /// Aircraft type, matched exactly (case-sensitive) by queries.
    #[serde(rename = "тип самолета")]
    pub aircraft_type: String,
}

impl Flight {
    /// Create a new flight from its three fields.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        flight_number: impl Into<String>,
        aircraft_type: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            flight_number: flight_number.into(),
            aircraft_type: aircraft_type.into(),
        }
    }
}

/// Sort flights ascending by destination city.
///
/// The sort is stable: flights with equal destinations keep their relative
/// input order. An empty destination sorts first.
pub fn sort_by_destination(flights: &mut [Flight]) {
    flights.sort_by(|a, b| a.destination.cmp(&b.destination));
}
