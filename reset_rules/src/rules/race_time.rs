use super::{required, ResetRule};
use crate::{EpisodeStatus, ResetError, StateSnapshot};

/// Ends the episode once the race clock runs past `race_duration` seconds.
/// Only registered for virtual events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceTimeRule {
    race_duration: f64,
}

impl RaceTimeRule {
    pub fn new(race_duration: f64) -> Self {
        Self { race_duration }
    }
}

impl ResetRule for RaceTimeRule {
    fn name(&self) -> &'static str {
        "race_time"
    }
    // a race that runs out of time ends like a finished lap
    fn status(&self) -> EpisodeStatus {
        EpisodeStatus::EpisodeComplete
    }
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError> {
        let elapsed_secs = required(snapshot.elapsed_secs, self.name(), "elapsed_secs")?;
        Ok(elapsed_secs > self.race_duration)
    }
}
