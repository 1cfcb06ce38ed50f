use log::{info, warn};

use crate::dataset::LoadedDataset;

use super::consistency_model::{ConsistencyReport, DatasetCounts, NameMismatch};

/// Compares the name sets of `datasets` for every ordered pair.
pub fn check_datasets(datasets: &[&LoadedDataset]) -> ConsistencyReport {
    info!("Checking {} datasets", datasets.len());

    let counts: Vec<DatasetCounts> = datasets
        .iter()
        .map(|dataset| {
            let counts = DatasetCounts {
                dataset: dataset.kind(),
                names: dataset.len(),
                ids: dataset.ids().len(),
            };
            info!(
                "{} dataset has {} names and {} ids",
                counts.dataset, counts.names, counts.ids
            );
            counts
        })
        .collect();

    let mut mismatches = Vec::new();
    for present in datasets {
        for other in datasets {
            if present.kind() == other.kind() {
                continue;
            }
            for name in present.elements().keys() {
                if !other.elements().contains_key(name) {
                    warn!(
                        "{} does not include {} but {} does",
                        other.kind(),
                        name,
                        present.kind()
                    );
                    mismatches.push(NameMismatch {
                        name: name.clone(),
                        present_in: present.kind(),
                        missing_from: other.kind(),
                    });
                }
            }
        }
    }

    info!("Done checking datasets");
    ConsistencyReport { counts, mismatches }
}
