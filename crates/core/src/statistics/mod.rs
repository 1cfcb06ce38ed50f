//! Statistics module - derived population, employment and education figures.

mod education;
mod employment;
mod lookup;
mod population;
mod rounding;
mod statistics_model;
mod statistics_service;
mod statistics_traits;


pub use education::{education_number, education_specific, education_specific_combined};
pub use employment::{employment_number, employment_rate};
pub use lookup::{check_municipality_number, municipality_name};
pub use population::{population_change, total_population, total_population_by_name};
pub use rounding::{round_count, round_rate};
pub use statistics_model::{Gender, Measure, Municipality};
pub use statistics_service::StatisticsService;
pub use statistics_traits::StatisticsServiceTrait;
