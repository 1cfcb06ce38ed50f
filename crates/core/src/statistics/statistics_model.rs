use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{BOTH_GENDERS_KEY, FEMALE_KEY, MALE_KEY};
use crate::dataset::{LoadedDataset, MunicipalityId, MunicipalityRecord};
use crate::errors::{Error, Result};

use super::rounding::to_decimal;

/// Subgroup of a metric series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Both,
}

impl Gender {
    /// Key used in the upstream documents.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Male => MALE_KEY,
            Self::Female => FEMALE_KEY,
            Self::Both => BOTH_GENDERS_KEY,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Identifier and name of a municipality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Municipality {
    pub id: MunicipalityId,
    pub name: String,
}

/// A count together with the percentage it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Measure {
    pub count: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub percent: Decimal,
}

/// A record resolved from a dataset, carrying its name for error reporting.
pub(crate) struct Located<'a> {
    pub name: &'a str,
    pub record: &'a MunicipalityRecord,
}

impl<'a> Located<'a> {
    pub fn by_name(dataset: &'a LoadedDataset, name: &str) -> Result<Self> {
        let (name, record) = dataset
            .elements()
            .get_key_value(name)
            .ok_or_else(|| Error::not_found(dataset.kind(), name))?;
        Ok(Self { name, record })
    }

    pub fn by_id(dataset: &'a LoadedDataset, id: &str) -> Result<Self> {
        let name = dataset.name_of(id)?;
        Self::by_name(dataset, name)
    }

    /// Numeric value at `path`, or `MissingField`.
    pub fn value(&self, path: &[&str]) -> Result<Decimal> {
        let raw = self
            .record
            .value(path)
            .ok_or_else(|| Error::missing_field(self.name, path))?;
        to_decimal(raw)
    }
}
