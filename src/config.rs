//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::paapi::marketplace::Marketplace;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
///
/// The search client treats this as an immutable input; credential presence
/// is checked here before a client is ever built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API access key identifier
    #[serde(default)]
    pub access_key: String,

    /// API secret key
    #[serde(default)]
    pub secret_key: String,

    /// Affiliate partner tag attributing traffic to an account
    #[serde(default)]
    pub partner_tag: String,

    /// Marketplace to search
    #[serde(default)]
    pub marketplace: Marketplace,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("paapi-search").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(access_key) = std::env::var("PAAPI_ACCESS_KEY") {
            self.access_key = access_key;
        }

        if let Ok(secret_key) = std::env::var("PAAPI_SECRET_KEY") {
            self.secret_key = secret_key;
        }

        if let Ok(partner_tag) = std::env::var("PAAPI_PARTNER_TAG") {
            self.partner_tag = partner_tag;
        }

        if let Ok(marketplace) = std::env::var("PAAPI_MARKETPLACE") {
            if let Ok(m) = marketplace.parse() {
                self.marketplace = m;
            }
        }

        self
    }

    /// Fails unless all three credential fields are present.
    pub fn ensure_credentials(&self) -> Result<()> {
        if self.access_key.is_empty() {
            anyhow::bail!("Missing access key. Set PAAPI_ACCESS_KEY or access_key in config.toml");
        }
        if self.secret_key.is_empty() {
            anyhow::bail!("Missing secret key. Set PAAPI_SECRET_KEY or secret_key in config.toml");
        }
        if self.partner_tag.is_empty() {
            anyhow::bail!(
                "Missing partner tag. Set PAAPI_PARTNER_TAG or partner_tag in config.toml"
            );
        }
        Ok(())
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
