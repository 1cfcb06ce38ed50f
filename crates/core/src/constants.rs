use std::ops::RangeInclusive;
use std::time::Duration;

/// Year used when a caller does not name one
pub const REFERENCE_YEAR: u16 = 2017;

/// First year of the default population change window
pub const DEFAULT_CHANGE_FIRST_YEAR: u16 = 2016;

/// Years shown in the detail history table; the only years present in all three datasets
pub const DETAIL_YEARS: RangeInclusive<u16> = 2007..=2017;

/// Decimal places for rates and percentages
pub const RATE_DECIMAL_PLACES: u32 = 2;

/// Subgroup keys
pub const MALE_KEY: &str = "Menn";
pub const FEMALE_KEY: &str = "Kvinner";
pub const BOTH_GENDERS_KEY: &str = "Begge kjønn";

/// Education category codes
pub const EDUCATION_PRIMARY: &str = "01";
pub const EDUCATION_SECONDARY: &str = "02a";
pub const EDUCATION_VOCATIONAL: &str = "11";
pub const EDUCATION_HIGHER_SHORT: &str = "03a";
pub const EDUCATION_HIGHER_LONG: &str = "04a";

/// Default dataset sources
pub const DEFAULT_POPULATION_URL: &str = "http://wildboy.uib.no/~tpe056/folk/104857.json";
pub const DEFAULT_EMPLOYMENT_URL: &str = "http://wildboy.uib.no/~tpe056/folk/100145.json";
pub const DEFAULT_EDUCATION_URL: &str = "http://wildboy.uib.no/~tpe056/folk/85432.json";

/// Default HTTP request timeout for dataset fetches
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
