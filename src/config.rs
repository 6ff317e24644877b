use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::{LogFormat, LoggingConfig};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(
    name = "oop-showcase",
    version,
    about = "Console walkthrough of classic OOP constructs mapped onto idiomatic Rust"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "OOP_SHOWCASE_LOG",
        value_name = "FILTER",
        help = "Log filter directive for stderr diagnostics (e.g. info, debug)"
    )]
    pub log_level: Option<String>,

    #[arg(
        long,
        env = "OOP_SHOWCASE_LOG_FORMAT",
        value_enum,
        value_name = "FORMAT",
        help = "Log output format for stderr diagnostics"
    )]
    pub log_format: Option<LogFormat>,
}

/// Resolved runtime configuration. Only logging is configurable; the
/// demonstration output on stdout is invariant under every flag.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
}

impl DemoConfig {
    /// Merges CLI values over an optional config file over defaults.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            log_level: cli_log_level,
            log_format: cli_log_format,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            log_level: file_log_level,
            log_format: file_log_format,
        } = file_config;

        let logging = LoggingConfig {
            level: cli_log_level
                .or(file_log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            format: cli_log_format.or(file_log_format).unwrap_or(LogFormat::Pretty),
        };

        Ok(Self { logging })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    log_level: Option<String>,
    log_format: Option<LogFormat>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
