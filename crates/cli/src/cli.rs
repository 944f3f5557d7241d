//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;
use figma_export_core::Config;

/// Export a Figma file and its image fills to local disk.
///
/// Saves the raw document JSON, downloads one PNG per node with an image fill,
/// and writes a summary of texts, colors and image URLs.
#[derive(Parser, Debug)]
#[command(name = "figma-export")]
#[command(author, version, about)]
pub struct Args {
    /// Figma file key (overrides `export.file_key` from the config)
    pub file_key: Option<String>,

    /// Config file (defaults to $FIGMA_EXPORT_CONFIG, then ./config.toml if present)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Directory to download images into
    #[arg(short, long)]
    pub images_dir: Option<PathBuf>,

    /// Skip writing the summary file
    #[arg(long)]
    pub no_summary: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Apply command-line overrides to `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(file_key) = &self.file_key {
            config.export.file_key = Some(file_key.clone());
        }
        if let Some(images_dir) = &self.images_dir {
            config.export.images_dir = images_dir.clone();
        }
        if self.no_summary {
            config.export.summary = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["figma-export"]).unwrap();
        assert!(args.file_key.is_none());
        assert!(args.config.is_none());
        assert!(!args.no_summary);
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_cli_positional_file_key() {
        let args = Args::try_parse_from(["figma-export", "AbC123"]).unwrap();
        assert_eq!(args.file_key.as_deref(), Some("AbC123"));
    }

    #[test]
    fn test_cli_verbose_and_quiet() {
        let args = Args::try_parse_from(["figma-export", "-vv"]).unwrap();
        assert_eq!(args.log_level(), "trace");

        let args = Args::try_parse_from(["figma-export", "-v", "--quiet"]).unwrap();
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["figma-export", "--invalid-flag"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::try_parse_from([
            "figma-export",
            "KEY",
            "--images-dir",
            "out/images",
            "--no-summary",
        ])
        .unwrap();

        let mut config = Config::default();
        config.export.file_key = Some("FROM_CONFIG".to_string());
        args.apply_to(&mut config);

        assert_eq!(config.export.file_key.as_deref(), Some("KEY"));
        assert_eq!(config.export.images_dir, PathBuf::from("out/images"));
        assert!(config.export.summary_target().is_none());
    }

    #[test]
    fn test_cli_without_overrides_keeps_config() {
        let args = Args::try_parse_from(["figma-export"]).unwrap();

        let mut config = Config::default();
        config.export.file_key = Some("FROM_CONFIG".to_string());
        args.apply_to(&mut config);

        assert_eq!(config.export.file_key.as_deref(), Some("FROM_CONFIG"));
        assert_eq!(config.export.images_dir, PathBuf::from("figmaImages"));
        assert!(config.export.summary_target().is_some());
    }
}
