//! Join point for the concurrent dataset loads.
//!
//! Readiness is published on a `watch` channel so any number of consumers can
//! observe it: a startup task awaiting [`LoadBarrier::wait_ready`], or an HTTP
//! handler that just wants to report "still loading".

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use log::{info, warn};
use serde::Serialize;
use tokio::sync::watch;

use super::dataset_model::DatasetKind;

/// Combined readiness of all datasets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Readiness {
    Loading { loaded: usize, total: usize },
    Ready,
    Failed { dataset: String, reason: String },
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[derive(Default)]
struct Progress {
    arrived: HashSet<DatasetKind>,
    failed: bool,
}

/// Records which datasets have loaded and fires once the last one arrives.
///
/// Arrivals are keyed by dataset, so reporting the same dataset twice never
/// counts twice.
pub struct LoadBarrier {
    total: usize,
    progress: Mutex<Progress>,
    sender: watch::Sender<Readiness>,
}

impl LoadBarrier {
    pub fn new(total: usize) -> Self {
        let initial = if total == 0 {
            Readiness::Ready
        } else {
            Readiness::Loading { loaded: 0, total }
        };
        let (sender, _) = watch::channel(initial);

        Self {
            total,
            progress: Mutex::new(Progress::default()),
            sender,
        }
    }

    /// Records a successful load of `kind`. Returns true for the arrival that
    /// completed the barrier, which happens exactly once.
    pub fn arrive(&self, kind: DatasetKind) -> bool {
        let mut progress = self.lock_progress();
        if !progress.arrived.insert(kind) {
            warn!("{} dataset already reported as loaded", kind);
            return false;
        }
        let loaded = progress.arrived.len();
        if loaded > self.total {
            warn!("Unexpected extra arrival from {} dataset", kind);
            return false;
        }
        if progress.failed {
            return false;
        }

        let completed = loaded == self.total;
        let next = if completed {
            Readiness::Ready
        } else {
            Readiness::Loading {
                loaded,
                total: self.total,
            }
        };
        // Published under the lock, so readiness only moves forward.
        self.sender.send_replace(next);
        drop(progress);

        if completed {
            info!("All {} datasets have been downloaded", self.total);
        }
        completed
    }

    /// Records a failed load. The first failure wins; later arrivals no
    /// longer change the readiness.
    pub fn fail(&self, kind: DatasetKind, reason: impl Into<String>) {
        let mut progress = self.lock_progress();
        if progress.failed || progress.arrived.len() >= self.total {
            return;
        }
        progress.failed = true;
        self.sender.send_replace(Readiness::Failed {
            dataset: kind.to_string(),
            reason: reason.into(),
        });
    }

    pub fn readiness(&self) -> Readiness {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Readiness> {
        self.sender.subscribe()
    }

    /// Waits until the barrier is ready or has failed.
    pub async fn wait_ready(&self) -> Readiness {
        let mut receiver = self.subscribe();
        let settled = receiver
            .wait_for(|readiness| !matches!(readiness, Readiness::Loading { .. }))
            .await
            .map(|readiness| readiness.clone());
        // The sender lives as long as `self`, so the channel cannot close here.
        settled.unwrap_or_else(|_| self.readiness())
    }

    fn lock_progress(&self) -> MutexGuard<'_, Progress> {
        self.progress.lock().unwrap_or_else(|poisoned| {
            warn!("Load barrier lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
