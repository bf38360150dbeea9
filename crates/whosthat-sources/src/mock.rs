//! Static source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use whosthat_core::error::SourceError;
use whosthat_core::model::Creature;
use whosthat_core::traits::CreatureSource;

/// A source that returns a fixed creature list, or fails with a fixed status.
///
/// Counts how many times it was fetched.
pub struct StaticSource {
    creatures: Vec<Creature>,
    fail_status: Option<u16>,
    call_count: AtomicU32,
}

impl StaticSource {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Self {
            creatures,
            fail_status: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// A source whose every fetch fails with an API error of `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            creatures: Vec::new(),
            fail_status: Some(status),
            call_count: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CreatureSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Creature>, SourceError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match self.fail_status {
            Some(status) => Err(SourceError::Api {
                status,
                message: "static source configured to fail".into(),
            }),
            None => Ok(self.creatures.clone()),
        }
    }
}
