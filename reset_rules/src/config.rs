use crate::{
    CrashRule, EpisodeCompleteRule, ImmobilizedRule, OffTrackRule, RaceTimeRule, ReversedRule,
    RuleManager,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Race length, in seconds, for virtual events that don't set one.
pub const DEFAULT_RACE_DURATION: f64 = 180.0;

/// The per-agent parameters the reset rules are built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetConfig {
    pub is_continuous: bool,
    pub number_of_trials: u32,
    pub agent_name: String,
    #[serde(default)]
    pub is_virtual_event: bool,
    #[serde(default = "default_race_duration")]
    pub race_duration: f64,
}

fn default_race_duration() -> f64 {
    DEFAULT_RACE_DURATION
}

/// Builds the reset rules for one agent.
///
/// Precedence, highest first: a completed episode, then being stuck, off
/// track, crashed, reversed, and finally running out of race time (only
/// for virtual events).
pub fn construct_reset_rules_manager(config: &ResetConfig) -> RuleManager {
    let mut manager = RuleManager::from_rules([
        EpisodeCompleteRule::new(config.is_continuous, config.number_of_trials).into(),
        ImmobilizedRule::default().into(),
        OffTrackRule.into(),
        CrashRule::new(config.agent_name.clone()).into(),
        ReversedRule::default().into(),
    ]);
    if config.is_virtual_event {
        manager.add(RaceTimeRule::new(config.race_duration));
    }
    debug!(
        agent = %config.agent_name,
        rules = manager.len(),
        "constructed reset rules manager"
    );
    manager
}
