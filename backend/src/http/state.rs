//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ExplorerConfig;
use crate::models::Catalog;
use crate::services::mock_analysis::MockAnalyzer;
use crate::services::projection::ProjectionSettings;
use crate::services::proxy::{BackendProxy, PredictionBackend};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only exoplanet catalog
    pub catalog: Catalog,
    /// Scale factors for the two viewers
    pub projection: ProjectionSettings,
    /// Forwarding to the ML backend
    pub proxy: BackendProxy,
    pub analyzer: MockAnalyzer,
    /// Simulated processing time of the mock analysis endpoint
    pub mock_delay: Duration,
}

impl AppState {
    /// Create the state with default settings around the given catalog and backend.
    pub fn new(catalog: Catalog, backend: Arc<dyn PredictionBackend>) -> Self {
        Self::from_config(&ExplorerConfig::default(), catalog, backend)
    }

    /// Create the state from a resolved configuration.
    pub fn from_config(
        config: &ExplorerConfig,
        catalog: Catalog,
        backend: Arc<dyn PredictionBackend>,
    ) -> Self {
        Self {
            catalog,
            projection: config.projection_settings(),
            proxy: BackendProxy::new(backend),
            analyzer: MockAnalyzer::new(),
            mock_delay: config.mock_delay(),
        }
    }

    /// Override the mock analysis delay.
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }
}
