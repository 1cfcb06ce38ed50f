use serde::Serialize;

use crate::dataset::DatasetKind;

/// Number of names and distinct identifiers in one dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetCounts {
    pub dataset: DatasetKind,
    pub names: usize,
    pub ids: usize,
}

/// A municipality name found in `present_in` but not in `missing_from`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMismatch {
    pub name: String,
    pub present_in: DatasetKind,
    pub missing_from: DatasetKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub counts: Vec<DatasetCounts>,
    pub mismatches: Vec<NameMismatch>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}
