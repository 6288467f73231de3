//! Reveal state types
//!
//! Plain data shared by the controller, the event loop and the renderer.
//! The controller consumes `Action`s and answers with `Transition`s; the event
//! loop is the only place those transitions turn into effects.

use std::fmt;
use std::time::Duration;

/// Where the current round is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reveal in progress, timer pending
    Rolling,
    /// Final word on display, waiting for input
    Stopped,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rolling => write!(f, "rolling"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Semantic user input, decoupled from raw terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Confirm key: request a new round
    Confirm,
    /// Pointer wheel up or down: request a new round
    Scroll,
    /// End the session
    Quit,
}

/// What the event loop should do after a controller step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Arm the one-shot timer to fire after this long
    Schedule(Duration),
    /// Nothing to schedule
    Idle,
    /// Leave the event loop, abandoning any pending timer
    Quit,
}

/// Everything the renderer needs, borrowed from the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealView<'a> {
    /// Word currently on display; `None` before the first round
    pub word: Option<&'a str>,
    pub phase: Phase,
    /// Zero-based position within the round
    pub step: Option<usize>,
    /// Rounds started this session, starting at 1
    pub round: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_display() {
        assert_eq!(Phase::Rolling.to_string(), "rolling");
        assert_eq!(Phase::Stopped.to_string(), "stopped");
    }

    #[test]
    fn transitions_are_distinguishable() {
        let schedule = Transition::Schedule(Duration::from_millis(400));
        assert_ne!(schedule, Transition::Idle);
        assert_ne!(Transition::Idle, Transition::Quit);
        assert_eq!(schedule, Transition::Schedule(Duration::from_millis(400)));
    }
}
