use super::{required, ResetRule};
use crate::{EpisodeStatus, ResetError, StateSnapshot};

/// Ends the episode when the agent is stuck: every position in the last
/// `window` steps lies within `tolerance` meters of the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmobilizedRule {
    window: usize,
    tolerance: f64,
}

impl ImmobilizedRule {
    pub const DEFAULT_WINDOW: usize = 15;
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;

    /// A `window` of zero never reports the agent as stuck.
    pub fn new(window: usize, tolerance: f64) -> Self {
        Self { window, tolerance }
    }
}

impl Default for ImmobilizedRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW, Self::DEFAULT_TOLERANCE)
    }
}

impl ResetRule for ImmobilizedRule {
    fn name(&self) -> &'static str {
        "immobilized"
    }
    fn status(&self) -> EpisodeStatus {
        EpisodeStatus::Immobilized
    }
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError> {
        let history = required(
            snapshot.position_history.as_deref(),
            self.name(),
            "position_history",
        )?;
        // standing still on purpose is not being stuck
        if snapshot.is_paused == Some(true) || history.len() < self.window {
            return Ok(false);
        }
        let recent = &history[history.len() - self.window..];
        let Some(&(current_x, current_y)) = recent.last() else {
            return Ok(false);
        };
        Ok(recent
            .iter()
            .all(|&(x, y)| (x - current_x).hypot(y - current_y) <= self.tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_history(history: Vec<(f64, f64)>) -> StateSnapshot {
        StateSnapshot::default().with_position_history(history)
    }

    #[test]
    fn stuck_for_the_whole_window() {
        let rule = ImmobilizedRule::new(5, 1e-3);
        let mut history = vec![(0.0, 0.0), (0.5, 0.0)];
        history.extend([(1.0, 2.0); 5]);
        assert_eq!(rule.evaluate(&with_history(history)), Ok(true));
    }

    #[test]
    fn jitter_within_tolerance_is_still_stuck() {
        let rule = ImmobilizedRule::new(3, 1e-3);
        let history = vec![(1.0, 1.0), (1.0005, 1.0), (1.0, 1.0003)];
        assert_eq!(rule.evaluate(&with_history(history)), Ok(true));
    }

    #[test]
    fn movement_inside_the_window_is_not_stuck() {
        let rule = ImmobilizedRule::new(3, 1e-3);
        let history = vec![(1.0, 1.0), (1.2, 1.0), (1.2, 1.0)];
        assert_eq!(rule.evaluate(&with_history(history)), Ok(false));
    }

    #[test]
    fn short_history_is_not_stuck() {
        let rule = ImmobilizedRule::default();
        let history = vec![(0.0, 0.0); ImmobilizedRule::DEFAULT_WINDOW - 1];
        assert_eq!(rule.evaluate(&with_history(history)), Ok(false));
    }

    #[test]
    fn pause_is_not_stuck() {
        let rule = ImmobilizedRule::new(2, 1e-3);
        let snapshot = with_history(vec![(0.0, 0.0); 4]).with_paused(true);
        assert_eq!(rule.evaluate(&snapshot), Ok(false));
        let snapshot = with_history(vec![(0.0, 0.0); 4]).with_paused(false);
        assert_eq!(rule.evaluate(&snapshot), Ok(true));
    }

    #[test]
    fn empty_window_is_never_stuck() {
        let rule = ImmobilizedRule::new(0, 1e-3);
        assert_eq!(rule.evaluate(&with_history(vec![(0.0, 0.0); 4])), Ok(false));
        assert_eq!(rule.evaluate(&with_history(Vec::new())), Ok(false));
    }

    #[test]
    fn history_is_required() {
        assert_eq!(
            ImmobilizedRule::default().evaluate(&StateSnapshot::default().with_paused(false)),
            Err(ResetError::MissingStateField {
                rule: "immobilized",
                field: "position_history"
            })
        );
    }
}
