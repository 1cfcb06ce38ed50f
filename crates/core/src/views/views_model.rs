use rust_decimal::Decimal;
use serde::Serialize;

use crate::dataset::MunicipalityId;
use crate::statistics::{Measure, Municipality};

use super::messages;

/// One line of the overview table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewRow {
    pub id: MunicipalityId,
    pub name: String,
    /// Total population in the reference year.
    pub population: Option<u64>,
    /// Percentage change over the default window.
    #[serde(with = "rust_decimal::serde::str_option")]
    pub population_change: Option<Decimal>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalitySummary {
    pub id: MunicipalityId,
    pub name: String,
    pub population: u64,
    pub higher_education_short: Measure,
    pub higher_education_long: Measure,
    pub employment: Measure,
}

/// Combined (men plus women) rate of each education level.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRates {
    #[serde(with = "rust_decimal::serde::str")]
    pub primary: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub secondary: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub vocational: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub higher_short: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub higher_long: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRow {
    pub year: u16,
    pub population: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub employment_rate: Decimal,
    pub education: EducationRates,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityDetails {
    pub summary: MunicipalitySummary,
    pub history: Vec<DetailRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonCell {
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    pub winner: bool,
}

/// Women's and men's rates of one education category for both sides.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub category: String,
    pub label: String,
    pub women: [ComparisonCell; 2],
    pub men: [ComparisonCell; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOutcome {
    FirstWins,
    SecondWins,
    Tie,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub first: Municipality,
    pub second: Municipality,
    pub rows: Vec<ComparisonRow>,
    pub first_wins: usize,
    pub second_wins: usize,
    pub outcome: ComparisonOutcome,
    pub message: String,
}

impl ComparisonOutcome {
    pub fn from_wins(first: usize, second: usize) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Self::FirstWins,
            std::cmp::Ordering::Less => Self::SecondWins,
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }

    /// Announcement naming the winner, or the tie.
    pub fn message(&self, first: &str, second: &str) -> String {
        match self {
            Self::FirstWins => messages::winner(first, second),
            Self::SecondWins => messages::winner(second, first),
            Self::Tie => messages::tie(first, second),
        }
    }
}
