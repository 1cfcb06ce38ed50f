//! Educational attainment rates and head counts per category.

use rust_decimal::Decimal;

use crate::dataset::LoadedDataset;
use crate::errors::Result;

use super::population::total_population;
use super::rounding::{round_count, round_rate};
use super::statistics_model::{Gender, Located};

/// Percentage of `gender` with education level `category` in `year`.
pub fn education_specific(
    education: &LoadedDataset,
    id: &str,
    category: &str,
    gender: Gender,
    year: u16,
) -> Result<Decimal> {
    let year = year.to_string();
    let rate = Located::by_id(education, id)?.value(&[category, gender.key(), year.as_str()])?;
    Ok(round_rate(rate))
}

/// Men's and women's percentages for `category` added together.
pub fn education_specific_combined(
    education: &LoadedDataset,
    id: &str,
    category: &str,
    year: u16,
) -> Result<Decimal> {
    let year = year.to_string();
    let municipality = Located::by_id(education, id)?;
    let men = municipality.value(&[category, Gender::Male.key(), year.as_str()])?;
    let women = municipality.value(&[category, Gender::Female.key(), year.as_str()])?;
    Ok(round_rate(men + women))
}

/// Number of people with education level `category`.
pub fn education_number(
    education: &LoadedDataset,
    population: &LoadedDataset,
    id: &str,
    category: &str,
    year: u16,
) -> Result<u64> {
    let rate = education_specific_combined(education, id, category, year)?;
    let total = total_population(population, id, year)?;
    round_count(total * rate / Decimal::ONE_HUNDRED)
}
