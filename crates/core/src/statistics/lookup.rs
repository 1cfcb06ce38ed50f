use crate::dataset::LoadedDataset;
use crate::errors::Result;

/// Name of the municipality with identifier `id` in the population dataset.
pub fn municipality_name(population: &LoadedDataset, id: &str) -> Result<String> {
    population.name_of(id).map(str::to_string)
}

/// True when every dataset has a record for `id`.
///
/// This is the only validation of user supplied identifiers; derivations
/// assume their caller already passed it.
pub fn check_municipality_number(datasets: &[&LoadedDataset], id: &str) -> bool {
    datasets.iter().all(|dataset| dataset.info(id).is_ok())
}
