//! Round controller
//!
//! Drives one reveal at a time: draws sixteen indices from the pool, steps
//! through them on timer fires, and stops on the last one. Every handler is a
//! pure transition over the controller's own state and returns what the event
//! loop should schedule next.

use super::state::{Action, Phase, RevealView, Transition};
use super::timing::{ROUND_SIZE, delay_for_step};
use crate::core::{IndexPool, WordCatalog};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Error type for controllers that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The catalog cannot fill a single round
    CatalogTooSmall { found: usize, required: usize },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogTooSmall { found, required } => write!(
                f,
                "Word list has {found} usable words, but a round needs at least {required}"
            ),
        }
    }
}

impl std::error::Error for RoundError {}

/// Timed-reveal state machine over a borrowed catalog
pub struct RoundController<'a, R> {
    catalog: &'a WordCatalog,
    pool: IndexPool<R>,
    round: Vec<usize>,
    step: Option<usize>,
    phase: Phase,
    rounds_played: u64,
}

impl<'a, R: Rng> RoundController<'a, R> {
    /// Create a controller with a freshly shuffled pool
    ///
    /// No round is running yet; call [`Self::begin_round`] to start one.
    ///
    /// # Errors
    /// Returns `RoundError::CatalogTooSmall` if the catalog has fewer than
    /// `ROUND_SIZE` words.
    ///
    /// # Examples
    /// ```
    /// use gimme_five::core::WordCatalog;
    /// use gimme_five::reveal::{Phase, RoundController, Transition};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let words: Vec<String> = ('a'..='z').map(|c| c.to_string().repeat(5)).collect();
    /// let text = words.join("\n");
    /// let catalog = WordCatalog::parse(&text).unwrap();
    /// let mut controller = RoundController::new(&catalog, StdRng::seed_from_u64(1)).unwrap();
    ///
    /// assert!(matches!(controller.begin_round(), Transition::Schedule(_)));
    /// assert_eq!(controller.phase(), Phase::Rolling);
    /// assert!(controller.current_word().is_some());
    /// ```
    pub fn new(catalog: &'a WordCatalog, rng: R) -> Result<Self, RoundError> {
        if catalog.len() < ROUND_SIZE {
            return Err(RoundError::CatalogTooSmall {
                found: catalog.len(),
                required: ROUND_SIZE,
            });
        }

        Ok(Self {
            catalog,
            pool: IndexPool::new(catalog.len(), rng),
            round: Vec::with_capacity(ROUND_SIZE),
            step: None,
            phase: Phase::Rolling,
            rounds_played: 0,
        })
    }

    /// Draw a new round and show its first word
    pub fn begin_round(&mut self) -> Transition {
        self.pool.ensure_capacity(ROUND_SIZE);
        self.round = self.pool.take(ROUND_SIZE);
        self.step = Some(0);
        self.phase = Phase::Rolling;
        self.rounds_played += 1;

        info!(
            round = self.rounds_played,
            generation = self.pool.generation(),
            "round started"
        );
        Transition::Schedule(delay_for_step(0))
    }

    /// Advance the reveal by one word
    ///
    /// Past the last word the round stops and nothing more is scheduled.
    /// Fires that arrive while stopped, or before any round, are ignored.
    pub fn on_timer_fire(&mut self) -> Transition {
        let Some(step) = self.step else {
            return Transition::Idle;
        };
        if self.phase != Phase::Rolling {
            return Transition::Idle;
        }

        let next = step + 1;
        if next >= ROUND_SIZE {
            self.step = Some(ROUND_SIZE - 1);
            self.phase = Phase::Stopped;
            debug!(
                round = self.rounds_played,
                word = self.current_word().unwrap_or_default(),
                "reveal stopped"
            );
            return Transition::Idle;
        }

        self.step = Some(next);
        Transition::Schedule(delay_for_step(next))
    }

    /// Start another round, but only once the current one has stopped
    pub fn on_new_round_request(&mut self) -> Transition {
        match self.phase {
            Phase::Stopped => self.begin_round(),
            Phase::Rolling => Transition::Idle,
        }
    }

    /// Dispatch a user action
    pub fn handle(&mut self, action: Action) -> Transition {
        match action {
            Action::Confirm | Action::Scroll => self.on_new_round_request(),
            Action::Quit => self.on_quit_request(),
        }
    }
}

impl<R> RoundController<'_, R> {
    /// End the session, whatever the phase
    #[must_use]
    pub fn on_quit_request(&self) -> Transition {
        info!(rounds = self.rounds_played, "quit requested");
        Transition::Quit
    }

    /// Word on display, or `None` before the first round
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.step.map(|step| self.catalog.word_at(self.round[step]))
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn step(&self) -> Option<usize> {
        self.step
    }

    /// Catalog indices of the current round, in reveal order
    #[must_use]
    pub fn round_indices(&self) -> &[usize] {
        &self.round
    }

    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    #[must_use]
    pub const fn pool(&self) -> &IndexPool<R> {
        &self.pool
    }

    /// Snapshot for the renderer
    #[must_use]
    pub fn view(&self) -> RevealView<'_> {
        RevealView {
            word: self.current_word(),
            phase: self.phase,
            step: self.step,
            round: self.rounds_played,
        }
    }
}
