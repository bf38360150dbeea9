//! Local JSON file loader, for offline play.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::instrument;

use whosthat_core::error::SourceError;
use whosthat_core::model::Creature;
use whosthat_core::traits::CreatureSource;

/// Reads a JSON array of creature records from disk on every fetch.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CreatureSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Vec<Creature>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}
