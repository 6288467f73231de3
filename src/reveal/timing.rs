//! Reveal timing
//!
//! The reveal speeds up, holds at its fastest, then slows to a stop, like a
//! roulette wheel. The table is identical every round.

use std::time::Duration;

/// Words shown per round; the last one is the draw
pub const ROUND_SIZE: usize = 16;

/// Delay in milliseconds before leaving each step of the reveal
pub const ROLL_DELAYS_MS: [u64; ROUND_SIZE] = [
    1000, 900, 800, 700, 600, 500, 400, 400, 400, 450, 550, 680, 800, 1000, 1500, 2000,
];

/// How long step `step` stays on screen before the next timer fire
///
/// # Panics
/// Panics if `step >= ROUND_SIZE`.
#[inline]
#[must_use]
pub const fn delay_for_step(step: usize) -> Duration {
    Duration::from_millis(ROLL_DELAYS_MS[step])
}

/// Time from round start until the reveal stops
#[must_use]
pub fn total_roll_duration() -> Duration {
    Duration::from_millis(ROLL_DELAYS_MS.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_delay_per_step() {
        assert_eq!(ROLL_DELAYS_MS.len(), ROUND_SIZE);
        assert_eq!(delay_for_step(0), Duration::from_secs(1));
        assert_eq!(delay_for_step(ROUND_SIZE - 1), Duration::from_secs(2));
    }

    #[test]
    fn accelerates_then_decelerates() {
        let fastest = *ROLL_DELAYS_MS.iter().min().unwrap();
        let first_min = ROLL_DELAYS_MS.iter().position(|&d| d == fastest).unwrap();
        let last_min = ROLL_DELAYS_MS.iter().rposition(|&d| d == fastest).unwrap();

        assert!(ROLL_DELAYS_MS[..=first_min].windows(2).all(|w| w[0] > w[1]));
        let plateau = &ROLL_DELAYS_MS[first_min..=last_min];
        assert!(plateau.iter().all(|&d| d == fastest));
        assert!(ROLL_DELAYS_MS[last_min..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn total_duration() {
        assert_eq!(total_roll_duration(), Duration::from_millis(12_680));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn delay_past_last_step_panics() {
        let _ = delay_for_step(ROUND_SIZE);
    }
}
