use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::caption::storage::DEFAULT_CACHE_CAPACITY;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "image-contents",
    version,
    about = "Resolve text descriptions for screen elements from custom labels and image captions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Label file (JSON or YAML)
    #[arg(long, global = true)]
    pub labels: Option<String>,

    /// Caption seed file (JSON or YAML)
    #[arg(long, global = true)]
    pub captions: Option<String>,

    /// Maximum number of cached caption records
    #[arg(long, global = true)]
    pub cache_capacity: Option<usize>,

    /// Append resolution events to this JSONL file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: image-contents.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe every element of a screen snapshot
    Describe {
        /// Snapshot file: JSON array of elements
        #[arg(long)]
        snapshot: String,

        /// Speech locale used for icon labels (default from config, then "en")
        #[arg(long)]
        locale: Option<String>,

        /// Output format: console or json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List elements of a snapshot that are missing a label
    NeedsLabel {
        /// Snapshot file: JSON array of elements
        #[arg(long)]
        snapshot: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `image-contents.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub stores: StoresConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoresConfig {
    pub labels: Option<String>,
    pub captions: Option<String>,

    #[serde(default = "default_capacity")]
    pub cache_capacity: usize,
}

impl Default for StoresConfig {
    fn default() -> Self {
        Self {
            labels: None,
            captions: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_locale")]
    pub default_locale: String,

    pub trace: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            trace: None,
        }
    }
}

// Serde default helpers
fn default_capacity() -> usize { DEFAULT_CACHE_CAPACITY }
fn default_locale() -> String { "en".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("image-contents.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Settings resolution (CLI > config > defaults)
// ============================================================================

/// Fully resolved settings for building a resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub labels: Option<String>,
    pub captions: Option<String>,
    pub cache_capacity: usize,
    pub trace: Option<String>,
    pub locale: String,
}

/// Merge CLI flags over config file values.
pub fn resolve_settings(cli: &Cli, config: &AppConfig, locale: Option<&str>) -> Settings {
    Settings {
        labels: cli.labels.clone().or_else(|| config.stores.labels.clone()),
        captions: cli.captions.clone().or_else(|| config.stores.captions.clone()),
        cache_capacity: cli.cache_capacity.unwrap_or(config.stores.cache_capacity),
        trace: cli.trace.clone().or_else(|| config.resolver.trace.clone()),
        locale: locale
            .map(str::to_string)
            .unwrap_or_else(|| config.resolver.default_locale.clone()),
    }
}
