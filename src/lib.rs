//! `flightbook` - record and look up flight data from the command line
//!
//! This library provides the building blocks for the `flightbook` binary:
//! a flat flight record, JSON persistence in the user's home directory,
//! interactive data entry, and an aircraft-type lookup.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod collector;
pub mod console;
pub mod error;
pub mod flight;
pub mod logging;
pub mod query;
pub mod store;

pub use cli::Cli;
pub use error::{Error, Result};
pub use flight::Flight;
pub use logging::init_logging;
pub use store::LoadOutcome;
