use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::consistency::ConsistencyReport;
use crate::dataset::{DatasetStatusEntry, MunicipalityId, Readiness};
use crate::errors::Result;

use super::statistics_model::{Gender, Municipality};

/// Everything the presentation layer may ask of the loaded datasets.
///
/// Year arguments default to the reference year when `None`.
pub trait StatisticsServiceTrait: Send + Sync {
    fn readiness(&self) -> Readiness;
    fn dataset_statuses(&self) -> Vec<DatasetStatusEntry>;

    /// Municipalities of the population dataset in name order.
    fn municipalities(&self) -> Result<Vec<Municipality>>;
    fn municipality_names(&self) -> Result<Vec<String>>;
    fn municipality_ids(&self) -> Result<Vec<MunicipalityId>>;
    /// Education category code to label.
    fn education_categories(&self) -> Result<BTreeMap<String, String>>;

    fn municipality_name(&self, id: &str) -> Result<String>;
    fn check_municipality_number(&self, id: &str) -> bool;

    fn total_population_by_name(&self, name: &str, year: Option<u16>) -> Result<Decimal>;
    fn total_population(&self, id: &str, year: Option<u16>) -> Result<Decimal>;
    fn population_change(
        &self,
        name: &str,
        first_year: Option<u16>,
        last_year: Option<u16>,
    ) -> Result<Decimal>;

    fn employment_rate(&self, id: &str, year: Option<u16>) -> Result<Decimal>;
    fn employment_number(&self, id: &str, year: Option<u16>) -> Result<u64>;

    fn education_specific(
        &self,
        id: &str,
        category: &str,
        gender: Gender,
        year: Option<u16>,
    ) -> Result<Decimal>;
    fn education_specific_combined(
        &self,
        id: &str,
        category: &str,
        year: Option<u16>,
    ) -> Result<Decimal>;
    fn education_number(&self, id: &str, category: &str, year: Option<u16>) -> Result<u64>;

    fn check_datasets(&self) -> Result<ConsistencyReport>;
}
