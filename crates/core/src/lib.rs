pub mod config;
pub mod document;
pub mod export;
pub mod figma;
pub mod testing;

pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config,
    ConfigError, ExportConfig, FigmaConfig, SanitizedConfig, ServerConfig,
};
pub use document::{
    collect_image_node_ids, image_node_ids_of_file, sorted_ids, ColorEntry, DesignSummary, Rgb,
    TextEntry,
};
pub use export::{
    download_images, save_document, write_summary, DownloadReport, ExportError, ExportOutcome,
    ExportReport, Exporter, SummaryDocument,
};
pub use figma::{DesignSource, FigmaClient, ImageUrlMap, RemoteError};
