use super::{required, ResetRule};
use crate::{EpisodeStatus, ResetError, StateSnapshot};

pub const LAP_COMPLETE_PROGRESS: f64 = 100.0;

/// Ends the episode once the lap is closed. In continuous mode the episode
/// spans `number_of_trials` laps and only the last one counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeCompleteRule {
    is_continuous: bool,
    number_of_trials: u32,
}

impl EpisodeCompleteRule {
    pub fn new(is_continuous: bool, number_of_trials: u32) -> Self {
        Self {
            is_continuous,
            number_of_trials,
        }
    }
}

impl ResetRule for EpisodeCompleteRule {
    fn name(&self) -> &'static str {
        "episode_complete"
    }
    fn status(&self) -> EpisodeStatus {
        EpisodeStatus::EpisodeComplete
    }
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError> {
        let progress = required(snapshot.progress, self.name(), "progress")?;
        let lap_closed = progress >= LAP_COMPLETE_PROGRESS;
        if !self.is_continuous {
            return Ok(lap_closed);
        }
        let trial = required(snapshot.trial, self.name(), "trial")?;
        Ok(lap_closed && trial >= self.number_of_trials)
    }
}
