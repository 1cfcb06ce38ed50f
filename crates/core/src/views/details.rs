use crate::constants::{
    DETAIL_YEARS, EDUCATION_HIGHER_LONG, EDUCATION_HIGHER_SHORT, EDUCATION_PRIMARY,
    EDUCATION_SECONDARY, EDUCATION_VOCATIONAL,
};
use crate::errors::{Error, Result};
use crate::statistics::{round_count, Measure, StatisticsServiceTrait};

use super::views_model::{DetailRow, EducationRates, MunicipalityDetails, MunicipalitySummary};

/// Summary and yearly history of one municipality.
///
/// Fails with `InvalidMunicipality` unless `id` is present in all datasets.
pub fn municipality_details(
    statistics: &dyn StatisticsServiceTrait,
    id: &str,
) -> Result<MunicipalityDetails> {
    if !statistics.check_municipality_number(id) {
        return Err(Error::InvalidMunicipality(id.to_string()));
    }

    let summary = summary(statistics, id)?;
    let history = DETAIL_YEARS
        .map(|year| history_row(statistics, id, year))
        .collect::<Result<Vec<_>>>()?;

    Ok(MunicipalityDetails { summary, history })
}

fn education_measure(
    statistics: &dyn StatisticsServiceTrait,
    id: &str,
    category: &str,
) -> Result<Measure> {
    Ok(Measure {
        count: statistics.education_number(id, category, None)?,
        percent: statistics.education_specific_combined(id, category, None)?,
    })
}

fn summary(statistics: &dyn StatisticsServiceTrait, id: &str) -> Result<MunicipalitySummary> {
    let name = statistics.municipality_name(id)?;
    Ok(MunicipalitySummary {
        id: id.into(),
        name,
        population: round_count(statistics.total_population(id, None)?)?,
        higher_education_short: education_measure(statistics, id, EDUCATION_HIGHER_SHORT)?,
        higher_education_long: education_measure(statistics, id, EDUCATION_HIGHER_LONG)?,
        employment: Measure {
            count: statistics.employment_number(id, None)?,
            percent: statistics.employment_rate(id, None)?,
        },
    })
}

fn history_row(statistics: &dyn StatisticsServiceTrait, id: &str, year: u16) -> Result<DetailRow> {
    let combined =
        |category: &str| statistics.education_specific_combined(id, category, Some(year));

    Ok(DetailRow {
        year,
        population: round_count(statistics.total_population(id, Some(year))?)?,
        employment_rate: statistics.employment_rate(id, Some(year))?,
        education: EducationRates {
            primary: combined(EDUCATION_PRIMARY)?,
            secondary: combined(EDUCATION_SECONDARY)?,
            vocational: combined(EDUCATION_VOCATIONAL)?,
            higher_short: combined(EDUCATION_HIGHER_SHORT)?,
            higher_long: combined(EDUCATION_HIGHER_LONG)?,
        },
    })
}
