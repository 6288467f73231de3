//! Timed reveal
//!
//! The round state machine, its fixed timing table and the one-shot timer the
//! event loop arms from the controller's transitions.

mod controller;
pub mod state;
pub mod timer;
pub mod timing;

pub use controller::{RoundController, RoundError};
pub use state::{Action, Phase, RevealView, Transition};
pub use timer::OneShotTimer;
pub use timing::{ROLL_DELAYS_MS, ROUND_SIZE};
