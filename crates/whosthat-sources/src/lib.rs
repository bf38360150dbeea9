//! whosthat-sources — creature loaders.
//!
//! Implements the `CreatureSource` trait for the quiz HTTP API, local JSON
//! files and fixed in-memory lists, plus the configuration that picks one.

pub mod config;
pub mod file;
pub mod http;
pub mod mock;

pub use config::{create_source, load_config, QuizConfig, SourceConfig};
pub use file::FileSource;
pub use http::HttpSource;
pub use mock::StaticSource;
