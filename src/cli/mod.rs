//! Command-line front end: reads an export file, hands the decoded JSON to the
//! aggregator and prints the result.

pub mod commands;
pub mod logging;

pub use commands::run;
