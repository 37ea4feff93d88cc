mod config;
mod error;
mod manager;
mod rules;
mod snapshot;
mod status;

pub use config::{construct_reset_rules_manager, ResetConfig, DEFAULT_RACE_DURATION};
pub use error::ResetError;
pub use manager::RuleManager;
pub use rules::{
    CrashRule, EpisodeCompleteRule, ImmobilizedRule, OffTrackRule, RaceTimeRule, ResetRule,
    ReversedRule, Rule, LAP_COMPLETE_PROGRESS,
};
pub use snapshot::StateSnapshot;
pub use status::{label_for, EpisodeStatus, StatusKey};
