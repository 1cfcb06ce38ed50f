use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::consistency::ConsistencyReport;
use crate::constants::{DEFAULT_CHANGE_FIRST_YEAR, REFERENCE_YEAR};
use crate::dataset::{DatasetContext, DatasetStatusEntry, MunicipalityId, Readiness};
use crate::errors::Result;

use super::statistics_model::{Gender, Municipality};
use super::statistics_traits::StatisticsServiceTrait;
use super::{education, employment, lookup, population};

/// Derived statistics over the session's datasets.
pub struct StatisticsService {
    context: Arc<DatasetContext>,
}

impl StatisticsService {
    pub fn new(context: Arc<DatasetContext>) -> Self {
        StatisticsService { context }
    }

    pub fn context(&self) -> &Arc<DatasetContext> {
        &self.context
    }
}

impl StatisticsServiceTrait for StatisticsService {
    fn readiness(&self) -> Readiness {
        self.context.readiness()
    }

    fn dataset_statuses(&self) -> Vec<DatasetStatusEntry> {
        self.context.statuses()
    }

    fn municipalities(&self) -> Result<Vec<Municipality>> {
        let population = self.context.population().loaded()?;
        Ok(population
            .elements()
            .iter()
            .map(|(name, record)| Municipality {
                id: record.identifier.clone(),
                name: name.clone(),
            })
            .collect())
    }

    fn municipality_names(&self) -> Result<Vec<String>> {
        self.context.population().get_names()
    }

    fn municipality_ids(&self) -> Result<Vec<MunicipalityId>> {
        self.context.population().get_ids()
    }

    fn education_categories(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.context.education().loaded()?.categories().clone())
    }

    fn municipality_name(&self, id: &str) -> Result<String> {
        lookup::municipality_name(&*self.context.population().loaded()?, id)
    }

    fn check_municipality_number(&self, id: &str) -> bool {
        let loaded = (
            self.context.population().loaded(),
            self.context.employment().loaded(),
            self.context.education().loaded(),
        );
        match loaded {
            (Ok(population), Ok(employment), Ok(education)) => {
                lookup::check_municipality_number(&[&*population, &*employment, &*education], id)
            }
            _ => false,
        }
    }

    fn total_population_by_name(&self, name: &str, year: Option<u16>) -> Result<Decimal> {
        population::total_population_by_name(
            &*self.context.population().loaded()?,
            name,
            year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn total_population(&self, id: &str, year: Option<u16>) -> Result<Decimal> {
        population::total_population(
            &*self.context.population().loaded()?,
            id,
            year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn population_change(
        &self,
        name: &str,
        first_year: Option<u16>,
        last_year: Option<u16>,
    ) -> Result<Decimal> {
        population::population_change(
            &*self.context.population().loaded()?,
            name,
            first_year.unwrap_or(DEFAULT_CHANGE_FIRST_YEAR),
            last_year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn employment_rate(&self, id: &str, year: Option<u16>) -> Result<Decimal> {
        employment::employment_rate(
            &*self.context.employment().loaded()?,
            id,
            year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn employment_number(&self, id: &str, year: Option<u16>) -> Result<u64> {
        employment::employment_number(
            &*self.context.employment().loaded()?,
            &*self.context.population().loaded()?,
            id,
            year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn education_specific(
        &self,
        id: &str,
        category: &str,
        gender: Gender,
        year: Option<u16>,
    ) -> Result<Decimal> {
        education::education_specific(
            &*self.context.education().loaded()?,
            id,
            category,
            gender,
            year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn education_specific_combined(
        &self,
        id: &str,
        category: &str,
        year: Option<u16>,
    ) -> Result<Decimal> {
        education::education_specific_combined(
            &*self.context.education().loaded()?,
            id,
            category,
            year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn education_number(&self, id: &str, category: &str, year: Option<u16>) -> Result<u64> {
        education::education_number(
            &*self.context.education().loaded()?,
            &*self.context.population().loaded()?,
            id,
            category,
            year.unwrap_or(REFERENCE_YEAR),
        )
    }

    fn check_datasets(&self) -> Result<ConsistencyReport> {
        self.context.check_datasets()
    }
}
