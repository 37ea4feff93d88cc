use super::{required, ResetRule};
use crate::{EpisodeStatus, ResetError, StateSnapshot};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Ends the episode when the agent has been driving against the waypoint
/// direction for the last `window` steps. A step counts as reversed when
/// the heading deviates from the track direction by more than a right
/// angle plus `tolerance` radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReversedRule {
    window: usize,
    tolerance: f64,
}

impl ReversedRule {
    pub const DEFAULT_WINDOW: usize = 15;
    pub const DEFAULT_TOLERANCE: f64 = 0.26;

    /// A `window` of zero never reports the agent as reversed.
    pub fn new(window: usize, tolerance: f64) -> Self {
        Self { window, tolerance }
    }
}

impl Default for ReversedRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW, Self::DEFAULT_TOLERANCE)
    }
}

impl ResetRule for ReversedRule {
    fn name(&self) -> &'static str {
        "reversed"
    }
    fn status(&self) -> EpisodeStatus {
        EpisodeStatus::Reversed
    }
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError> {
        let history = required(
            snapshot.heading_history.as_deref(),
            self.name(),
            "heading_history",
        )?;
        if self.window == 0 || history.len() < self.window {
            return Ok(false);
        }
        let threshold = FRAC_PI_2 + self.tolerance;
        Ok(history[history.len() - self.window..]
            .iter()
            .all(|&(agent, track)| heading_deviation(agent, track) > threshold))
    }
}

// smallest angle between two headings, in [0, pi]
fn heading_deviation(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}
