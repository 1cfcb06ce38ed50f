use std::sync::Arc;

use anyhow::Context;
use kommunestat_core::dataset::{DatasetContext, Readiness};
use kommunestat_core::statistics::{StatisticsService, StatisticsServiceTrait};
use tokio::task::JoinHandle;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub context: Arc<DatasetContext>,
    pub statistics_service: Arc<dyn StatisticsServiceTrait + Send + Sync>,
}

impl AppState {
    pub fn new(context: Arc<DatasetContext>) -> Self {
        let statistics_service = Arc::new(StatisticsService::new(context.clone()));
        Self {
            context,
            statistics_service,
        }
    }
}

pub fn init_tracing() {
    let log_format =
        std::env::var("KOMMUNESTAT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Loads all datasets in the background; requests are served meanwhile.
pub fn spawn_dataset_loading(state: &Arc<AppState>) -> JoinHandle<Readiness> {
    let context = state.context.clone();
    tokio::spawn(async move {
        let readiness = context.load_all().await;
        match &readiness {
            Readiness::Ready => tracing::info!("Datasets ready"),
            Readiness::Failed { dataset, reason } => {
                tracing::error!("Dataset {} failed to load: {}", dataset, reason)
            }
            Readiness::Loading { loaded, total } => {
                tracing::warn!("Dataset loading ended at {}/{}", loaded, total)
            }
        }
        readiness
    })
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "Dataset sources: population={}, employment={}, education={}",
        config.sources.population_url,
        config.sources.employment_url,
        config.sources.education_url
    );
    let context = Arc::new(
        DatasetContext::from_config(&config.sources)
            .context("Failed to set up dataset sources")?,
    );
    let state = Arc::new(AppState::new(context));
    spawn_dataset_loading(&state);
    Ok(state)
}
