//! Quiz configuration and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use whosthat_core::traits::CreatureSource;

use crate::file::FileSource;
use crate::http::{HttpSource, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};

/// Where the quiz gets its creatures from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        #[serde(default = "default_url")]
        url: String,
        #[serde(default = "default_timeout")]
        timeout_secs: u64,
    },
    File {
        path: PathBuf,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Http {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Top-level whosthat configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Creature source.
    #[serde(default)]
    pub source: SourceConfig,
    /// Fixed RNG seed; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    // Substituted values are copied verbatim and never rescanned.
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::Http { url, timeout_secs } => SourceConfig::Http {
            url: resolve_env_vars(url),
            timeout_secs: *timeout_secs,
        },
        SourceConfig::File { path } => SourceConfig::File {
            path: PathBuf::from(resolve_env_vars(&path.to_string_lossy())),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `whosthat.toml` in the current directory
/// 2. `~/.config/whosthat/config.toml`
///
/// Environment variable override: `WHOSTHAT_API_URL`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("whosthat.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(url) = std::env::var("WHOSTHAT_API_URL") {
        let timeout_secs = match &config.source {
            SourceConfig::Http { timeout_secs, .. } => *timeout_secs,
            SourceConfig::File { .. } => default_timeout(),
        };
        config.source = SourceConfig::Http { url, timeout_secs };
    }

    config.source = resolve_source_config(&config.source);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("whosthat"))
}

/// Create a source instance from its configuration.
pub fn create_source(config: &SourceConfig) -> Result<Box<dyn CreatureSource>> {
    match config {
        SourceConfig::Http { url, timeout_secs } => Ok(Box::new(
            HttpSource::with_timeout(url, *timeout_secs).context("failed to build HTTP client")?,
        )),
        SourceConfig::File { path } => Ok(Box::new(FileSource::new(path.clone()))),
    }
}
