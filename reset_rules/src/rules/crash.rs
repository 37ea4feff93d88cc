use super::{required, ResetRule};
use crate::{EpisodeStatus, ResetError, StateSnapshot};

/// Ends the episode when the backend reports a collision involving
/// `agent_name`. Leaving the track is not a collision; see `OffTrackRule`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashRule {
    agent_name: String,
}

impl CrashRule {
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
        }
    }
}

impl ResetRule for CrashRule {
    fn name(&self) -> &'static str {
        "crash"
    }
    fn status(&self) -> EpisodeStatus {
        EpisodeStatus::Crashed
    }
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError> {
        if !required(snapshot.collided, self.name(), "collided")? {
            return Ok(false);
        }
        let collision_agent = required(
            snapshot.collision_agent.as_deref(),
            self.name(),
            "collision_agent",
        )?;
        Ok(collision_agent == self.agent_name)
    }
}
