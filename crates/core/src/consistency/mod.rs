//! Cross-dataset consistency check.
//!
//! The three datasets are expected to describe the same municipalities. The
//! check compares their name sets pairwise and reports every name present in
//! one dataset and absent from another. It is diagnostic only; nothing is
//! blocked on its outcome.

mod consistency_check;
mod consistency_model;

pub use consistency_check::check_datasets;
pub use consistency_model::{ConsistencyReport, DatasetCounts, NameMismatch};
