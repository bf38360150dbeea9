//! The quiz state machine.
//!
//! A `Quiz` owns the full creature list and the state of the current round.
//! Each round shuffles the list, shows [`ROUND_SIZE`] choices and hides one
//! of them behind its silhouette. Answers are scored against that target.
//!
//! The entry points mirror what a UI needs:
//! - [`Quiz::init`] / [`Quiz::populate`] load creatures and open the first round
//! - [`Quiz::next_round`] opens a new round
//! - [`Quiz::answer`] scores a guess and reveals the target

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

use crate::error::QuizError;
use crate::model::Creature;
use crate::traits::CreatureSource;

/// Number of choices shown per round.
pub const ROUND_SIZE: usize = 4;

/// Outcome of a single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub feedback: String,
}

/// Quiz state: the creature pool, the open round and the running score.
#[derive(Debug)]
pub struct Quiz {
    creatures: Vec<Creature>,
    displayed: Vec<Creature>,
    current: Option<Creature>,
    score: u32,
    image: Option<String>,
    feedback: String,
    answer_disabled: bool,
    next_disabled: bool,
    rounds_played: u32,
    answers_given: u32,
    rng: StdRng,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    /// Create an empty quiz seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an empty quiz with a fixed seed, for reproducible rounds.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            creatures: Vec::new(),
            displayed: Vec::new(),
            current: None,
            score: 0,
            image: None,
            feedback: String::new(),
            answer_disabled: false,
            next_disabled: true,
            rounds_played: 0,
            answers_given: 0,
            rng,
        }
    }

    /// Start-up hook: load creatures and open the first round.
    pub async fn init<S: CreatureSource + ?Sized>(&mut self, source: &S) {
        self.populate(source).await;
    }

    /// Fetch the creature list from `source`, replacing the current pool.
    ///
    /// On success a new round is opened. On failure the error is logged and
    /// the quiz is left untouched.
    pub async fn populate<S: CreatureSource + ?Sized>(&mut self, source: &S) {
        match source.fetch().await {
            Ok(creatures) => {
                info!(
                    source = source.name(),
                    count = creatures.len(),
                    "loaded creatures"
                );
                self.load(creatures);
            }
            Err(e) => {
                error!(
                    source = source.name(),
                    error = %e,
                    "There was a problem with the fetch operation"
                );
            }
        }
    }

    /// Replace the creature pool and open a new round.
    pub fn load(&mut self, creatures: Vec<Creature>) {
        self.creatures = creatures;
        self.next_round();
    }

    /// Open a new round, logging instead of failing when the pool is too small.
    pub fn next_round(&mut self) {
        if let Err(e) = self.try_next_round() {
            error!(error = %e, "Not enough creatures to display.");
        }
    }

    /// Open a new round.
    ///
    /// Leaves all state unchanged if fewer than [`ROUND_SIZE`] creatures are
    /// loaded.
    pub fn try_next_round(&mut self) -> Result<(), QuizError> {
        if self.creatures.len() < ROUND_SIZE {
            return Err(QuizError::NotEnoughCreatures {
                available: self.creatures.len(),
                required: ROUND_SIZE,
            });
        }

        shuffle(&mut self.creatures, &mut self.rng);
        self.displayed = self.creatures[..ROUND_SIZE].to_vec();
        // displayed is never empty here
        self.current = self.displayed.choose(&mut self.rng).cloned();

        self.image = self.current.as_ref().and_then(|c| c.silhouette.clone());
        self.feedback.clear();
        self.answer_disabled = false;
        self.next_disabled = true;
        self.rounds_played += 1;

        debug!(
            round = self.rounds_played,
            creature = self.current.as_ref().map(|c| c.name.as_str()),
            "opened round"
        );
        Ok(())
    }

    /// Score `selection` against the current target.
    ///
    /// The selection is trimmed and compared exactly with the target name.
    /// Either way the target's image is revealed, answers are locked and the
    /// next round is unlocked.
    pub fn answer(&mut self, selection: &str) -> Result<Verdict, QuizError> {
        let target = self.current.as_ref().ok_or(QuizError::NoActiveRound)?;
        if self.answer_disabled {
            return Err(QuizError::AnswerLocked);
        }

        let correct = selection.trim() == target.name;
        let feedback = if correct {
            format!("Correct! It's {}!", target.name)
        } else {
            format!("Incorrect! It's actually {}!", target.name)
        };
        let image = target.image.clone();

        if correct {
            self.score += 1;
        }
        self.feedback = feedback.clone();
        self.image = image;
        self.answer_disabled = true;
        self.next_disabled = false;
        self.answers_given += 1;

        debug!(correct, score = self.score, "answer scored");
        Ok(Verdict { correct, feedback })
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// The choices of the current round.
    pub fn displayed(&self) -> &[Creature] {
        &self.displayed
    }

    /// The creature to identify in the current round.
    pub fn current(&self) -> Option<&Creature> {
        self.current.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The image to show: the silhouette during a round, the real image after
    /// answering.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn answer_disabled(&self) -> bool {
        self.answer_disabled
    }

    pub fn next_disabled(&self) -> bool {
        self.next_disabled
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn answers_given(&self) -> u32 {
        self.answers_given
    }
}

/// Uniformly permute `items` in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
