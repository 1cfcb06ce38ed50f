//! Employment rate and employed head count.

use rust_decimal::Decimal;

use crate::dataset::LoadedDataset;
use crate::errors::Result;

use super::population::total_population;
use super::rounding::{round_count, round_rate};
use super::statistics_model::{Gender, Located};

/// Share of the population (both genders) in employment, in percent.
pub fn employment_rate(employment: &LoadedDataset, id: &str, year: u16) -> Result<Decimal> {
    let year = year.to_string();
    let rate = Located::by_id(employment, id)?.value(&[Gender::Both.key(), year.as_str()])?;
    Ok(round_rate(rate))
}

/// Number of employed people: the rounded rate applied to the total population.
pub fn employment_number(
    employment: &LoadedDataset,
    population: &LoadedDataset,
    id: &str,
    year: u16,
) -> Result<u64> {
    let rate = employment_rate(employment, id, year)?;
    let total = total_population(population, id, year)?;
    round_count(total * rate / Decimal::ONE_HUNDRED)
}
