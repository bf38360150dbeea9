//! End-of-session summary, written by front ends that want a record of a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quiz::Quiz;

/// Totals for one quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub rounds_played: u32,
    pub answers_given: u32,
    pub score: u32,
}

impl SessionSummary {
    /// Snapshot the totals of `quiz` for a session that began at `started_at`.
    pub fn capture(quiz: &Quiz, started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at,
            finished_at: Utc::now(),
            rounds_played: quiz.rounds_played(),
            answers_given: quiz.answers_given(),
            score: quiz.score(),
        }
    }

    /// Fraction of answers that were correct, 0.0 when nothing was answered.
    pub fn accuracy(&self) -> f64 {
        if self.answers_given == 0 {
            0.0
        } else {
            self.score as f64 / self.answers_given as f64
        }
    }
}
