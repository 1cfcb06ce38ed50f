use log::warn;

use crate::errors::Result;
use crate::statistics::{round_count, StatisticsServiceTrait};

use super::views_model::OverviewRow;

/// One row per municipality of the population dataset, in name order.
///
/// A municipality whose figures cannot be derived still gets a row; the
/// missing cells are `None`.
pub fn overview(statistics: &dyn StatisticsServiceTrait) -> Result<Vec<OverviewRow>> {
    let rows = statistics
        .municipalities()?
        .into_iter()
        .map(|municipality| {
            let population = statistics
                .total_population_by_name(&municipality.name, None)
                .and_then(round_count)
                .map_err(|e| warn!("No population for {}: {}", municipality.name, e))
                .ok();
            let population_change = statistics
                .population_change(&municipality.name, None, None)
                .map_err(|e| warn!("No population change for {}: {}", municipality.name, e))
                .ok();

            OverviewRow {
                id: municipality.id,
                name: municipality.name,
                population,
                population_change,
            }
        })
        .collect();

    Ok(rows)
}
