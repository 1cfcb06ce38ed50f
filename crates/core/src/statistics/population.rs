//! Population totals and change, read from the population dataset.

use rust_decimal::Decimal;

use crate::dataset::LoadedDataset;
use crate::errors::{Error, Result};

use super::rounding::round_rate;
use super::statistics_model::{Gender, Located};

fn total(municipality: &Located<'_>, year: u16) -> Result<Decimal> {
    let year = year.to_string();
    let men = municipality.value(&[Gender::Male.key(), year.as_str()])?;
    let women = municipality.value(&[Gender::Female.key(), year.as_str()])?;
    Ok(men + women)
}

/// Men plus women of the named municipality in `year`.
pub fn total_population_by_name(population: &LoadedDataset, name: &str, year: u16) -> Result<Decimal> {
    total(&Located::by_name(population, name)?, year)
}

/// Men plus women of the municipality with identifier `id` in `year`.
pub fn total_population(population: &LoadedDataset, id: &str, year: u16) -> Result<Decimal> {
    total(&Located::by_id(population, id)?, year)
}

/// Percentage change of the total population from `first_year` to
/// `last_year`, rounded to two decimals.
pub fn population_change(
    population: &LoadedDataset,
    name: &str,
    first_year: u16,
    last_year: u16,
) -> Result<Decimal> {
    let municipality = Located::by_name(population, name)?;
    let first = total(&municipality, first_year)?;
    let last = total(&municipality, last_year)?;

    if first.is_zero() {
        return Err(Error::DivisionByZero(format!(
            "population of '{}' in {} is zero",
            name, first_year
        )));
    }

    let change = (last - first) / first * Decimal::ONE_HUNDRED;
    Ok(round_rate(change))
}
