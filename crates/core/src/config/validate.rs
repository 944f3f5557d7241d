use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - A Figma token is present and non-empty
/// - The API base URL is not empty
/// - Server port is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.figma.token.as_deref().map_or(true, str::is_empty) {
        return Err(ConfigError::ValidationError(format!(
            "figma.token is not set, please set the {} env variable",
            super::TOKEN_ENV_VAR
        )));
    }

    if config.figma.api_base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "figma.api_base_url cannot be empty".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    Ok(())
}
