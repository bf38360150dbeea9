//! The loader seam implemented by `whosthat-sources`.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::Creature;

/// Anything that can produce the full creature collection for a quiz.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// Short name used in logs (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the complete creature list.
    async fn fetch(&self) -> Result<Vec<Creature>, SourceError>;
}
