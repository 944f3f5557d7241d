//! CLI entry point: one export pass, then exit.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use figma_export_core::{
    load_config, load_config_from_env, validate_config, Config, DesignSource, ExportOutcome,
    Exporter, FigmaClient,
};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(args).await {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    debug!(?args, "CLI arguments parsed");

    let mut config = load(&args)?;
    args.apply_to(&mut config);
    validate_config(&config).context("Configuration validation failed")?;

    let file_key = config
        .export
        .file_key
        .clone()
        .ok_or_else(|| anyhow!("No file key given (pass FILE_KEY or set export.file_key)"))?;

    let source: Arc<dyn DesignSource> =
        Arc::new(FigmaClient::new(&config.figma).context("Failed to create Figma client")?);

    let exporter = Exporter::new(source, config.export.clone())
        .with_image_format(config.figma.image_format.clone());
    let report = exporter.run(&file_key).await?;

    match &report.outcome {
        ExportOutcome::NoImages => info!("Export finished, no images"),
        ExportOutcome::Downloaded(downloads) => info!(
            "Export finished: {} images in {:?} ({} bytes, {} skipped)",
            downloads.files.len(),
            config.export.images_dir,
            downloads.total_bytes,
            downloads.skipped.len()
        ),
    }

    Ok(())
}

/// Explicit `--config`, then `FIGMA_EXPORT_CONFIG`, then `./config.toml` if it
/// exists. With none of them the config comes from defaults and environment.
fn load(args: &Args) -> Result<Config> {
    let path = args
        .config
        .clone()
        .or_else(|| std::env::var("FIGMA_EXPORT_CONFIG").map(PathBuf::from).ok())
        .or_else(|| Some(PathBuf::from("config.toml")).filter(|p| p.exists()));

    match path {
        Some(path) => {
            debug!("Loading configuration from {:?}", path);
            load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        None => load_config_from_env().context("Failed to load config from environment"),
    }
}
