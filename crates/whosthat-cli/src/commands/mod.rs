pub mod init;
pub mod list;
pub mod play;

use anyhow::Result;

use whosthat_core::traits::CreatureSource;
use whosthat_sources::config::{create_source, load_config_from, QuizConfig, SourceConfig};

use crate::SourceArgs;

/// Load the config and apply `--url` / `--file` on top of it.
pub fn resolve_source(args: &SourceArgs) -> Result<(QuizConfig, Box<dyn CreatureSource>)> {
    let mut config = load_config_from(args.config.as_deref())?;

    if let Some(url) = &args.url {
        let timeout_secs = match &config.source {
            SourceConfig::Http { timeout_secs, .. } => *timeout_secs,
            SourceConfig::File { .. } => whosthat_sources::http::DEFAULT_TIMEOUT_SECS,
        };
        config.source = SourceConfig::Http {
            url: url.clone(),
            timeout_secs,
        };
    } else if let Some(path) = &args.file {
        config.source = SourceConfig::File { path: path.clone() };
    }

    let source = create_source(&config.source)?;
    Ok((config, source))
}
