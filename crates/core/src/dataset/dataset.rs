use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::errors::{Error, Result};

use super::dataset_model::{DatasetDocument, DatasetKind, LoadedDataset, MunicipalityId, MunicipalityRecord};
use super::dataset_source::DatasetSource;

type LoadCallback = Box<dyn FnOnce() + Send + 'static>;

/// Lifecycle of a dataset. `Loaded` and `Failed` are terminal.
#[derive(Clone, Debug)]
pub enum DatasetState {
    Unloaded,
    Loading,
    Loaded(Arc<LoadedDataset>),
    Failed(Error),
}

/// Serializable view of [`DatasetState`] without the data.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DatasetStatus {
    Unloaded,
    Loading,
    #[serde(rename_all = "camelCase")]
    Loaded { municipalities: usize },
    #[serde(rename_all = "camelCase")]
    Failed { reason: String },
}

/// One remotely fetched dataset.
///
/// The document is published exactly once, as an `Arc` snapshot, when the
/// fetch and parse both succeed. Readers either see the complete document or
/// get [`Error::NotLoaded`].
pub struct Dataset {
    kind: DatasetKind,
    source: Arc<dyn DatasetSource>,
    state: RwLock<DatasetState>,
    on_load: Mutex<Option<LoadCallback>>,
}

impl Dataset {
    pub fn new(kind: DatasetKind, source: Arc<dyn DatasetSource>) -> Self {
        Self {
            kind,
            source,
            state: RwLock::new(DatasetState::Unloaded),
            on_load: Mutex::new(None),
        }
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Registers the completion callback, replacing any earlier one.
    ///
    /// It runs once, after the document is published, and never on failure.
    pub fn on_load<F>(&self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        *self.lock_callback() = Some(Box::new(callback));
    }

    /// Fetches and parses the document, then publishes it.
    pub async fn load(&self) -> Result<()> {
        {
            let mut state = self.write_state();
            if !matches!(*state, DatasetState::Unloaded) {
                return Err(Error::AlreadyLoaded(self.kind.to_string()));
            }
            *state = DatasetState::Loading;
        }

        debug!(
            "Loading {} dataset from {}",
            self.kind,
            self.source.location()
        );

        let outcome = match self.source.fetch(self.kind).await {
            Ok(body) => LoadedDataset::from_json(self.kind, &body),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(loaded) => {
                info!(
                    "Loaded {} dataset with {} municipalities",
                    self.kind,
                    loaded.len()
                );
                *self.write_state() = DatasetState::Loaded(Arc::new(loaded));

                let callback = self.lock_callback().take();
                if let Some(callback) = callback {
                    callback();
                }
                Ok(())
            }
            Err(e) => {
                error!("Loading {} dataset failed: {}", self.kind, e);
                *self.write_state() = DatasetState::Failed(e.clone());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> DatasetState {
        self.read_state().clone()
    }

    pub fn status(&self) -> DatasetStatus {
        match &*self.read_state() {
            DatasetState::Unloaded => DatasetStatus::Unloaded,
            DatasetState::Loading => DatasetStatus::Loading,
            DatasetState::Loaded(loaded) => DatasetStatus::Loaded {
                municipalities: loaded.len(),
            },
            DatasetState::Failed(e) => DatasetStatus::Failed {
                reason: e.to_string(),
            },
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.read_state(), DatasetState::Loaded(_))
    }

    /// The published snapshot.
    pub fn loaded(&self) -> Result<Arc<LoadedDataset>> {
        match &*self.read_state() {
            DatasetState::Loaded(loaded) => Ok(Arc::clone(loaded)),
            _ => Err(Error::NotLoaded(self.kind.to_string())),
        }
    }

    /// Whole document, including the `datasett` metadata.
    pub fn get_data(&self) -> Result<DatasetDocument> {
        Ok(self.loaded()?.document().clone())
    }

    /// Name to record mapping.
    pub fn get_elements(&self) -> Result<BTreeMap<String, MunicipalityRecord>> {
        Ok(self.loaded()?.elements().clone())
    }

    pub fn get_names(&self) -> Result<Vec<String>> {
        Ok(self.loaded()?.names())
    }

    pub fn get_ids(&self) -> Result<Vec<MunicipalityId>> {
        Ok(self.loaded()?.ids())
    }

    pub fn get_info(&self, id: &str) -> Result<MunicipalityRecord> {
        self.loaded()?.info(id).cloned()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, DatasetState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!("Dataset state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, DatasetState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!("Dataset state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn lock_callback(&self) -> MutexGuard<'_, Option<LoadCallback>> {
        self.on_load.lock().unwrap_or_else(|poisoned| {
            warn!("Dataset callback lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::StaticDatasetSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BODY: &str = r#"{
        "elementer": {
            "Oslo": { "kommunenummer": "0301", "Menn": { "2017": 300000 } },
            "Bergen": { "kommunenummer": "4601", "Menn": { "2017": 140000 } }
        }
    }"#;

    struct FailingSource;

    #[async_trait]
    impl DatasetSource for FailingSource {
        fn location(&self) -> &str {
            "nowhere"
        }

        async fn fetch(&self, kind: DatasetKind) -> Result<String> {
            Err(Error::Fetch {
                dataset: kind.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            })
        }
    }

    fn dataset(body: &str) -> Dataset {
        Dataset::new(
            DatasetKind::Population,
            Arc::new(StaticDatasetSource::new(body)),
        )
    }

    #[test]
    fn test_queries_before_load_are_not_loaded() {
        let dataset = dataset(BODY);
        assert_eq!(dataset.status(), DatasetStatus::Unloaded);
        assert_eq!(
            dataset.get_names().unwrap_err(),
            Error::NotLoaded("population".to_string())
        );
        assert!(matches!(dataset.get_info("0301"), Err(Error::NotLoaded(_))));
    }

    #[tokio::test]
    async fn test_load_publishes_document() {
        let dataset = dataset(BODY);
        dataset.load().await.unwrap();

        assert!(dataset.is_loaded());
        assert_eq!(
            dataset.status(),
            DatasetStatus::Loaded { municipalities: 2 }
        );
        assert_eq!(dataset.get_names().unwrap(), vec!["Bergen", "Oslo"]);
        assert_eq!(dataset.get_elements().unwrap().len(), 2);
        assert_eq!(
            dataset.get_info("4601").unwrap().identifier.as_str(),
            "4601"
        );
    }

    #[tokio::test]
    async fn test_callback_runs_once_after_publish() {
        let dataset = Arc::new(dataset(BODY));
        let calls = Arc::new(AtomicUsize::new(0));

        let observed = Arc::clone(&calls);
        dataset.on_load(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        dataset.load().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // A second load is refused and does not re-run the callback.
        assert_eq!(
            dataset.load().await.unwrap_err(),
            Error::AlreadyLoaded("population".to_string())
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_observable() {
        let dataset = Dataset::new(DatasetKind::Employment, Arc::new(FailingSource));
        let calls = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&calls);
        dataset.on_load(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        let err = dataset.load().await.unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
        assert!(matches!(dataset.state(), DatasetState::Failed(Error::Fetch { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(matches!(dataset.get_ids(), Err(Error::NotLoaded(_))));
    }

    #[tokio::test]
    async fn test_parse_failure_is_observable() {
        let dataset = dataset("<html>maintenance</html>");
        let err = dataset.load().await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        match dataset.status() {
            DatasetStatus::Failed { reason } => assert!(reason.contains("population")),
            other => panic!("unexpected status {:?}", other),
        }
    }
}
