//! whosthat-core — quiz state, round controller and answer scoring.
//!
//! This crate defines the creature data model, the `CreatureSource` seam
//! that loaders implement, and the `Quiz` state machine the front ends drive.

pub mod error;
pub mod model;
pub mod quiz;
pub mod summary;
pub mod traits;

pub use error::{QuizError, SourceError};
pub use model::Creature;
pub use quiz::{Quiz, Verdict, ROUND_SIZE};
pub use traits::CreatureSource;
