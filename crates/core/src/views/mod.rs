//! Views module - the overview, detail and comparison tables.
//!
//! Views sit on top of [`StatisticsServiceTrait`](crate::statistics::StatisticsServiceTrait)
//! and assemble the rows a presentation layer renders. They validate
//! user-typed identifiers before any derivation runs.

mod comparison;
mod details;
pub mod messages;
mod overview;
mod views_model;

#[cfg(test)]
mod views_tests;

pub use comparison::compare;
pub use details::municipality_details;
pub use overview::overview;
pub use views_model::{
    Comparison, ComparisonCell, ComparisonOutcome, ComparisonRow, DetailRow, EducationRates,
    MunicipalityDetails, MunicipalitySummary, OverviewRow,
};
