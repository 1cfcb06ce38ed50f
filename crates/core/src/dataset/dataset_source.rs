//! Where dataset documents come from.
//!
//! [`DatasetSource`] is the seam between a [`Dataset`](super::Dataset) and the
//! network. The production implementation is [`HttpDatasetSource`]; tests and
//! offline setups use [`StaticDatasetSource`].

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::constants::{
    DEFAULT_EDUCATION_URL, DEFAULT_EMPLOYMENT_URL, DEFAULT_FETCH_TIMEOUT, DEFAULT_POPULATION_URL,
};
use crate::errors::{Error, Result};

use super::dataset_model::DatasetKind;

/// Trait for anything that can produce the raw JSON body of a dataset.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human readable location, used for logging.
    fn location(&self) -> &str;

    /// Fetches the document body. Non-success responses are errors.
    async fn fetch(&self, kind: DatasetKind) -> Result<String>;
}

/// Fetches a dataset with a plain GET request.
pub struct HttpDatasetSource {
    client: Client,
    url: String,
}

impl HttpDatasetSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self, kind: DatasetKind) -> Result<String> {
        let fetch_error = |message: String| Error::Fetch {
            dataset: kind.to_string(),
            message,
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {} from {}", status, self.url)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;
        debug!("Fetched {} bytes for {} dataset", body.len(), kind);
        Ok(body)
    }
}

/// Serves a fixed body.
pub struct StaticDatasetSource {
    body: String,
}

impl StaticDatasetSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl DatasetSource for StaticDatasetSource {
    fn location(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _kind: DatasetKind) -> Result<String> {
        Ok(self.body.clone())
    }
}

/// Source addresses for the three datasets.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceConfig {
    pub population_url: String,
    pub employment_url: String,
    pub education_url: String,
    pub timeout: Duration,
}

impl SourceConfig {
    pub fn url(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Population => &self.population_url,
            DatasetKind::Employment => &self.employment_url,
            DatasetKind::Education => &self.education_url,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            population_url: DEFAULT_POPULATION_URL.to_string(),
            employment_url: DEFAULT_EMPLOYMENT_URL.to_string(),
            education_url: DEFAULT_EDUCATION_URL.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}
