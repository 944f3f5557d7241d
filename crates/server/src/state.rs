use std::sync::Arc;
use figma_export_core::{Config, DesignSource, SanitizedConfig};

/// Shared application state.
///
/// Holds no per-request data: every endpoint receives what it needs in its
/// own payload.
pub struct AppState {
    config: Config,
    source: Arc<dyn DesignSource>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn DesignSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn source(&self) -> &dyn DesignSource {
        self.source.as_ref()
    }
}
