//! Domain models for a fetched municipality dataset.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{Error, Result};

/// The three statistical datasets the application cross-references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Population,
    Employment,
    Education,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [Self::Population, Self::Employment, Self::Education];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Employment => "employment",
            Self::Education => "education",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Municipality number as it appears in the `kommunenummer` field.
///
/// The upstream documents carry it as text (`"0301"`), but numeric values are
/// accepted and rendered to their decimal text. Equality is exact text
/// equality. Ordering is numeric so that `"1201"` sorts after `"301"`; equal
/// numeric values fall back to text order, and non-numeric identifiers sort
/// last.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MunicipalityId(String);

impl MunicipalityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for MunicipalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MunicipalityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MunicipalityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u32> for MunicipalityId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl Ord for MunicipalityId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for MunicipalityId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de> Deserialize<'de> for MunicipalityId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// One level of the nested metric mapping of a record.
///
/// Leaves are numbers; every other level is keyed by category code, subgroup
/// or year. Anything else the upstream sends is kept as `Other` and reported
/// as a missing field when read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricNode {
    Value(f64),
    Branch(BTreeMap<String, MetricNode>),
    Other(serde_json::Value),
}

impl MetricNode {
    pub fn child(&self, key: &str) -> Option<&MetricNode> {
        match self {
            Self::Branch(children) => children.get(key),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            _ => None,
        }
    }
}

/// The per-municipality record of a dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityRecord {
    #[serde(rename = "kommunenummer")]
    pub identifier: MunicipalityId,

    #[serde(flatten)]
    pub metrics: BTreeMap<String, MetricNode>,
}

impl MunicipalityRecord {
    /// Walks `path` through the metric mapping and returns the numeric leaf.
    pub fn value(&self, path: &[&str]) -> Option<f64> {
        let (first, rest) = path.split_first()?;
        let mut node = self.metrics.get(*first)?;
        for key in rest {
            node = node.child(key)?;
        }
        node.as_value()
    }
}

/// Supplementary dataset metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    /// Category code to display label. Only the education dataset's labels are used.
    #[serde(rename = "kategorier", default, deserialize_with = "deserialize_labels")]
    pub categories: BTreeMap<String, String>,
}

/// Keeps the text labels and drops any other value shape.
fn deserialize_labels<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(code, label)| label.as_str().map(|l| (code, l.to_string())))
        .collect())
}

/// The JSON document as served by the statistics endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    #[serde(rename = "elementer")]
    pub elements: BTreeMap<String, MunicipalityRecord>,

    #[serde(rename = "datasett", default)]
    pub dataset: DatasetMeta,
}

/// A parsed document plus the identifier index built once at load time.
#[derive(Clone, Debug)]
pub struct LoadedDataset {
    kind: DatasetKind,
    document: DatasetDocument,
    index: HashMap<MunicipalityId, String>,
}

impl LoadedDataset {
    pub fn new(kind: DatasetKind, document: DatasetDocument) -> Self {
        let mut index = HashMap::with_capacity(document.elements.len());
        for (name, record) in &document.elements {
            if let Some(existing) = index.get(&record.identifier) {
                warn!(
                    "Duplicate municipality number {} in {} dataset: keeping '{}', ignoring '{}'",
                    record.identifier, kind, existing, name
                );
                continue;
            }
            index.insert(record.identifier.clone(), name.clone());
        }

        Self {
            kind,
            document,
            index,
        }
    }

    /// Parses a response body.
    pub fn from_json(kind: DatasetKind, body: &str) -> Result<Self> {
        let document: DatasetDocument =
            serde_json::from_str(body).map_err(|e| Error::Parse {
                dataset: kind.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::new(kind, document))
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    pub fn document(&self) -> &DatasetDocument {
        &self.document
    }

    pub fn elements(&self) -> &BTreeMap<String, MunicipalityRecord> {
        &self.document.elements
    }

    pub fn categories(&self) -> &BTreeMap<String, String> {
        &self.document.dataset.categories
    }

    pub fn len(&self) -> usize {
        self.document.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.elements.is_empty()
    }

    /// Municipality names in ascending lexicographic order.
    pub fn names(&self) -> Vec<String> {
        // BTreeMap keys are already sorted and unique.
        self.document.elements.keys().cloned().collect()
    }

    /// Municipality identifiers in ascending numeric order.
    pub fn ids(&self) -> Vec<MunicipalityId> {
        let mut ids: Vec<MunicipalityId> = self
            .document
            .elements
            .values()
            .map(|record| record.identifier.clone())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Record by municipality name.
    pub fn record(&self, name: &str) -> Result<&MunicipalityRecord> {
        self.document
            .elements
            .get(name)
            .ok_or_else(|| Error::not_found(self.kind, name))
    }

    /// Name of the record carrying `id`.
    pub fn name_of(&self, id: &str) -> Result<&str> {
        self.index
            .get(&MunicipalityId::from(id))
            .map(String::as_str)
            .ok_or_else(|| Error::not_found(self.kind, id))
    }

    /// Record carrying `id`.
    pub fn info(&self, id: &str) -> Result<&MunicipalityRecord> {
        let name = self.name_of(id)?;
        self.record(name)
    }
}
