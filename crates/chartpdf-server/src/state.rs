//! Shared handler state.

use crate::pipeline::ChartPipeline;
use crate::storage::ArtifactStore;
use chartpdf_common::Result;
use chartpdf_config::Config;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// Table-to-PDF pipeline.
    pub pipeline: Arc<ChartPipeline>,
    /// Optional archival of uploads and outputs.
    pub store: Arc<ArtifactStore>,
    /// When the server started.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Builds state from configuration, creating storage directories.
    pub async fn new(config: Config) -> Result<Self> {
        let pipeline = ChartPipeline::from_config(&config);
        let store = ArtifactStore::prepare(&config.storage).await?;
        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            store: Arc::new(store),
            started_at: Utc::now(),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"<Config>")
            .field("store", &self.store)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
