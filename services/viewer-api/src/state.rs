//! Application state for the viewer API.

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::ViewerConfig;

/// Shared application state.
pub struct AppState {
    /// Viewer configuration.
    pub config: ViewerConfig,

    /// Prometheus recorder handle, absent when no recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: ViewerConfig, prometheus: Option<PrometheusHandle>) -> Self {
        Self { config, prometheus }
    }
}
