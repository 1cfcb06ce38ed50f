//! Kommunestat Core - municipality statistics from public datasets.
//!
//! Three JSON datasets (population, employment, education) are fetched once,
//! indexed by municipality number and shared read-only. On top of them the
//! crate derives totals, rates and counts, validates user-typed identifiers
//! and assembles the overview, detail and comparison views.

pub mod consistency;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod statistics;
pub mod views;

#[cfg(test)]
mod test_fixtures;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
