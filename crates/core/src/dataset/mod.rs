//! Dataset module - fetched documents, lookups, and the load barrier.

mod dataset;
mod dataset_context;
mod dataset_model;
mod dataset_source;
mod load_barrier;

#[cfg(test)]
mod dataset_model_tests;

// Re-export the public interface
pub use dataset::{Dataset, DatasetState, DatasetStatus};
pub use dataset_context::{DatasetContext, DatasetStatusEntry};
pub use dataset_model::{
    DatasetDocument, DatasetKind, DatasetMeta, LoadedDataset, MetricNode, MunicipalityId,
    MunicipalityRecord,
};
pub use dataset_source::{DatasetSource, HttpDatasetSource, SourceConfig, StaticDatasetSource};
pub use load_barrier::{LoadBarrier, Readiness};
