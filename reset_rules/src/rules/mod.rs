mod crash;
mod episode_complete;
mod immobilized;
mod off_track;
mod race_time;
mod reversed;

use crate::{EpisodeStatus, ResetError, StateSnapshot};
pub use crash::CrashRule;
pub use episode_complete::{EpisodeCompleteRule, LAP_COMPLETE_PROGRESS};
pub use immobilized::ImmobilizedRule;
pub use off_track::OffTrackRule;
pub use race_time::RaceTimeRule;
pub use reversed::ReversedRule;

/// A single termination condition. Rules are pure: whatever they are
/// configured with is bound at construction and `evaluate` only reads.
pub trait ResetRule {
    fn name(&self) -> &'static str;
    fn status(&self) -> EpisodeStatus;
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError>;
}

/// The closed set of rules a `RuleManager` can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    EpisodeComplete(EpisodeCompleteRule),
    Crash(CrashRule),
    OffTrack(OffTrackRule),
    Immobilized(ImmobilizedRule),
    Reversed(ReversedRule),
    RaceTime(RaceTimeRule),
}

macro_rules! dispatch {
    ($rule:expr, $inner:ident => $call:expr) => {
        match $rule {
            Rule::EpisodeComplete($inner) => $call,
            Rule::Crash($inner) => $call,
            Rule::OffTrack($inner) => $call,
            Rule::Immobilized($inner) => $call,
            Rule::Reversed($inner) => $call,
            Rule::RaceTime($inner) => $call,
        }
    };
}

impl ResetRule for Rule {
    fn name(&self) -> &'static str {
        dispatch!(self, rule => rule.name())
    }
    fn status(&self) -> EpisodeStatus {
        dispatch!(self, rule => rule.status())
    }
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError> {
        dispatch!(self, rule => rule.evaluate(snapshot))
    }
}

macro_rules! impl_from_rule {
    ($($variant:ident($rule:ty)),* $(,)?) => {
        $(
            impl From<$rule> for Rule {
                fn from(rule: $rule) -> Self {
                    Self::$variant(rule)
                }
            }
        )*
    };
}

impl_from_rule!(
    EpisodeComplete(EpisodeCompleteRule),
    Crash(CrashRule),
    OffTrack(OffTrackRule),
    Immobilized(ImmobilizedRule),
    Reversed(ReversedRule),
    RaceTime(RaceTimeRule),
);

fn required<T>(
    value: Option<T>,
    rule: &'static str,
    field: &'static str,
) -> Result<T, ResetError> {
    value.ok_or(ResetError::MissingStateField { rule, field })
}
