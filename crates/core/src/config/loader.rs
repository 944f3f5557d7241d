use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `FIGMA_EXPORT_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "FIGMA_EXPORT_";

/// Environment variable holding the Figma personal access token
pub const TOKEN_ENV_VAR: &str = "FIGMA_TOKEN";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(Figment::new().merge(Toml::file(path)))
}

/// Load configuration from the environment only (no config file)
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    extract(Figment::new())
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(
            Env::raw()
                .only(&[TOKEN_ENV_VAR])
                .map(|_| "figma.token".into()),
        )
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
