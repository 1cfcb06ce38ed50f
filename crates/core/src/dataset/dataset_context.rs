use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use tokio::sync::watch;

use crate::consistency::{check_datasets, ConsistencyReport};
use crate::errors::{Error, Result};

use super::dataset::{Dataset, DatasetState, DatasetStatus};
use super::dataset_model::DatasetKind;
use super::dataset_source::{DatasetSource, HttpDatasetSource, SourceConfig};
use super::load_barrier::{LoadBarrier, Readiness};

/// Load status of one dataset, as reported to consumers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatasetStatusEntry {
    pub dataset: DatasetKind,
    #[serde(flatten)]
    pub status: DatasetStatus,
}

/// The three datasets of a session, constructed once at startup.
pub struct DatasetContext {
    population: Dataset,
    employment: Dataset,
    education: Dataset,
    barrier: LoadBarrier,
}

impl DatasetContext {
    pub fn new(population: Dataset, employment: Dataset, education: Dataset) -> Self {
        Self {
            population,
            employment,
            education,
            barrier: LoadBarrier::new(DatasetKind::ALL.len()),
        }
    }

    /// Context fetching every dataset over HTTP.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let dataset = |kind: DatasetKind| -> Result<Dataset> {
            let source: Arc<dyn DatasetSource> = Arc::new(HttpDatasetSource::with_timeout(
                config.url(kind),
                config.timeout,
            )?);
            Ok(Dataset::new(kind, source))
        };

        Ok(Self::new(
            dataset(DatasetKind::Population)?,
            dataset(DatasetKind::Employment)?,
            dataset(DatasetKind::Education)?,
        ))
    }

    pub fn population(&self) -> &Dataset {
        &self.population
    }

    pub fn employment(&self) -> &Dataset {
        &self.employment
    }

    pub fn education(&self) -> &Dataset {
        &self.education
    }

    pub fn dataset(&self, kind: DatasetKind) -> &Dataset {
        match kind {
            DatasetKind::Population => &self.population,
            DatasetKind::Employment => &self.employment,
            DatasetKind::Education => &self.education,
        }
    }

    /// Loads all three datasets concurrently and returns the settled readiness.
    ///
    /// Once every load has succeeded the consistency check runs and logs its
    /// findings.
    pub async fn load_all(&self) -> Readiness {
        futures::join!(
            self.load_one(&self.population),
            self.load_one(&self.employment),
            self.load_one(&self.education),
        );

        let readiness = self.barrier.readiness();
        if readiness.is_ready() {
            if let Err(e) = self.check_datasets() {
                warn!("Consistency check could not run: {}", e);
            }
        }
        readiness
    }

    async fn load_one(&self, dataset: &Dataset) {
        match dataset.load().await {
            Ok(()) => {
                self.barrier.arrive(dataset.kind());
            }
            // Loaded or failed before this call; report what it settled to.
            Err(Error::AlreadyLoaded(name)) => match dataset.state() {
                DatasetState::Loaded(_) => {
                    self.barrier.arrive(dataset.kind());
                }
                DatasetState::Failed(e) => self.barrier.fail(dataset.kind(), e.to_string()),
                DatasetState::Unloaded | DatasetState::Loading => {
                    warn!("Skipping {} dataset, load already in progress", name);
                }
            },
            Err(e) => self.barrier.fail(dataset.kind(), e.to_string()),
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.barrier.readiness()
    }

    pub fn subscribe(&self) -> watch::Receiver<Readiness> {
        self.barrier.subscribe()
    }

    pub async fn wait_ready(&self) -> Readiness {
        self.barrier.wait_ready().await
    }

    pub fn statuses(&self) -> Vec<DatasetStatusEntry> {
        DatasetKind::ALL
            .iter()
            .map(|kind| DatasetStatusEntry {
                dataset: *kind,
                status: self.dataset(*kind).status(),
            })
            .collect()
    }

    /// Runs the cross-dataset name comparison.
    pub fn check_datasets(&self) -> Result<ConsistencyReport> {
        let population = self.population.loaded()?;
        let employment = self.employment.loaded()?;
        let education = self.education.loaded()?;
        let report = check_datasets(&[&*population, &*employment, &*education]);
        info!(
            "Dataset check finished with {} mismatches",
            report.mismatches.len()
        );
        Ok(report)
    }
}
