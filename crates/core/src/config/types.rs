use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub figma: FigmaConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Figma API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FigmaConfig {
    /// REST API base URL, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Personal access token. Usually supplied through `FIGMA_TOKEN`.
    #[serde(default)]
    pub token: Option<String>,
    /// Image format requested from the images endpoint.
    #[serde(default = "default_image_format")]
    pub image_format: String,
}

impl Default for FigmaConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token: None,
            image_format: default_image_format(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.figma.com/v1".to_string()
}

fn default_image_format() -> String {
    "png".to_string()
}

/// Where an export pass writes its output
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// File key exported when none is given on the command line.
    #[serde(default)]
    pub file_key: Option<String>,
    /// Raw document is saved here, pretty-printed.
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
    /// Downloaded images land here as `<node-id>.png`.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Write the summary file after resolving image URLs.
    #[serde(default = "default_summary")]
    pub summary: bool,
    /// Texts, colors and resolved image URLs are saved here.
    #[serde(default = "default_summary_path")]
    pub summary_path: PathBuf,
}

impl ExportConfig {
    /// Where to write the summary, or `None` when it is switched off.
    pub fn summary_target(&self) -> Option<&Path> {
        self.summary.then_some(self.summary_path.as_path())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_key: None,
            document_path: default_document_path(),
            images_dir: default_images_dir(),
            summary: default_summary(),
            summary_path: default_summary_path(),
        }
    }
}

fn default_document_path() -> PathBuf {
    PathBuf::from("figmaFile.json")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("figmaImages")
}

fn default_summary() -> bool {
    true
}

fn default_summary_path() -> PathBuf {
    PathBuf::from("figmaExtracted.json")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub figma: SanitizedFigmaConfig,
    pub export: ExportConfig,
    pub server: ServerConfig,
}

/// Figma config with the token hidden
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedFigmaConfig {
    pub api_base_url: String,
    pub token_configured: bool,
    pub image_format: String,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            figma: SanitizedFigmaConfig {
                api_base_url: config.figma.api_base_url.clone(),
                token_configured: config
                    .figma
                    .token
                    .as_deref()
                    .is_some_and(|t| !t.is_empty()),
                image_format: config.figma.image_format.clone(),
            },
            export: config.export.clone(),
            server: config.server.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.figma.api_base_url, "https://api.figma.com/v1");
        assert_eq!(config.figma.image_format, "png");
        assert!(config.figma.token.is_none());
        assert_eq!(config.export.document_path.to_str().unwrap(), "figmaFile.json");
        assert_eq!(config.export.images_dir.to_str().unwrap(), "figmaImages");
        assert_eq!(
            config.export.summary_target(),
            Some(Path::new("figmaExtracted.json"))
        );
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[figma]
api_base_url = "http://localhost:9999/v1"
token = "figd_test"
image_format = "jpg"

[export]
file_key = "abc123"
document_path = "/tmp/doc.json"
images_dir = "/tmp/images"

[server]
host = "127.0.0.1"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.figma.api_base_url, "http://localhost:9999/v1");
        assert_eq!(config.figma.token.as_deref(), Some("figd_test"));
        assert_eq!(config.figma.image_format, "jpg");
        assert_eq!(config.export.file_key.as_deref(), Some("abc123"));
        assert_eq!(config.export.images_dir.to_str().unwrap(), "/tmp/images");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_summary_can_be_disabled_from_toml() {
        let toml = r#"
[export]
summary = false
summary_path = "out/extracted.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.export.summary);
        assert_eq!(config.export.summary_path, PathBuf::from("out/extracted.json"));
        assert_eq!(config.export.summary_target(), None);
    }

    #[test]
    fn test_sanitized_config_hides_token() {
        let mut config = Config::default();
        config.figma.token = Some("secret-token".to_string());

        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.figma.token_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("secret-token"));
    }

    #[test]
    fn test_sanitized_config_empty_token_not_configured() {
        let mut config = Config::default();
        config.figma.token = Some(String::new());

        let sanitized = SanitizedConfig::from(&config);
        assert!(!sanitized.figma.token_configured);
    }
}
