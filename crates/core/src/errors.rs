//! Core error types for Kommunestat.
//!
//! Every lookup and derivation reports failure through [`Error`] instead of
//! producing silently wrong numbers. Fetch and parse failures are also kept on
//! the dataset itself so consumers can tell "failed" from "still loading".

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for dataset access and derived metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The dataset was queried before its load completed.
    #[error("Dataset '{0}' is not loaded")]
    NotLoaded(String),

    /// No record matches the requested name or identifier.
    #[error("No municipality matching '{key}' in dataset '{dataset}'")]
    NotFound { dataset: String, key: String },

    /// The record exists but a category, subgroup or year is absent.
    #[error("Missing field '{path}' for municipality '{municipality}'")]
    MissingField { municipality: String, path: String },

    /// A percentage was requested against a zero base.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// A derived value cannot be represented (negative count, overflow).
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Non-success status or transport error while fetching.
    #[error("Failed to fetch dataset '{dataset}': {message}")]
    Fetch { dataset: String, message: String },

    /// The HTTP client for a dataset source could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    /// The response body is not a valid dataset document.
    #[error("Failed to parse dataset '{dataset}': {message}")]
    Parse { dataset: String, message: String },

    /// `load()` was called on a dataset that already started loading.
    #[error("Dataset '{0}' has already been loaded")]
    AlreadyLoaded(String),

    /// The identifier is not present in all three datasets.
    #[error("Municipality number '{0}' is not valid")]
    InvalidMunicipality(String),

    /// A comparison was requested between a municipality and itself.
    #[error("Cannot compare municipality '{0}' with itself")]
    SameMunicipality(String),
}

impl Error {
    pub(crate) fn not_found(dataset: impl ToString, key: impl ToString) -> Self {
        Self::NotFound {
            dataset: dataset.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn missing_field(municipality: impl ToString, path: &[&str]) -> Self {
        Self::MissingField {
            municipality: municipality.to_string(),
            path: path.join("/"),
        }
    }

    /// True for the errors a user can cause by typing an unknown number.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidMunicipality(_) | Self::SameMunicipality(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_joins_path() {
        let error = Error::missing_field("Oslo", &["03a", "Menn", "2017"]);
        assert_eq!(
            error.to_string(),
            "Missing field '03a/Menn/2017' for municipality 'Oslo'"
        );
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(Error::not_found("population", "9999").is_invalid_input());
        assert!(Error::InvalidMunicipality("abc".to_string()).is_invalid_input());
        assert!(Error::SameMunicipality("0301".to_string()).is_invalid_input());
        assert!(!Error::DivisionByZero("Oslo".to_string()).is_invalid_input());
        assert!(!Error::NotLoaded("education".to_string()).is_invalid_input());
        assert!(!Error::HttpClient("tls".to_string()).is_invalid_input());
    }
}
