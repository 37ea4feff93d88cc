use crate::ResetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The label a simulation step carries once the reset rules have run.
///
/// Variants are ordered by declaration. On the wire a status is its
/// lowercase `as_str` label (`"off_track"`), for display it is its
/// `label` (`"Off track"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeStatus {
    #[default]
    InProgress,
    #[serde(rename = "lap_complete")]
    EpisodeComplete,
    Crashed,
    OffTrack,
    Immobilized,
    Pause,
    Reversed,
    Park,
}

impl EpisodeStatus {
    pub const ALL: [Self; 8] = [
        Self::InProgress,
        Self::EpisodeComplete,
        Self::Crashed,
        Self::OffTrack,
        Self::Immobilized,
        Self::Pause,
        Self::Reversed,
        Self::Park,
    ];
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::EpisodeComplete => "lap_complete",
            Self::Crashed => "crashed",
            Self::OffTrack => "off_track",
            Self::Immobilized => "immobilized",
            Self::Pause => "pause",
            Self::Reversed => "reversed",
            Self::Park => "park",
        }
    }
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::EpisodeComplete => "Lap complete",
            Self::Crashed => "Crashed",
            Self::OffTrack => "Off track",
            Self::Immobilized => "Immobilized",
            Self::Pause => "Pause",
            Self::Reversed => "Reversed",
            Self::Park => "Park",
        }
    }
    /// Whether the caller has to reset the episode after a step with this
    /// status. A paused episode is held, not ended.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress | Self::Pause)
    }
}

impl FromStr for EpisodeStatus {
    type Err = ResetError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ResetError::UnknownStatus(s.to_owned()))
    }
}

impl fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that names an episode status: the enum itself or its wire label.
pub trait StatusKey {
    fn resolve(&self) -> Result<EpisodeStatus, ResetError>;
}

impl StatusKey for EpisodeStatus {
    fn resolve(&self) -> Result<EpisodeStatus, ResetError> {
        Ok(*self)
    }
}

impl StatusKey for str {
    fn resolve(&self) -> Result<EpisodeStatus, ResetError> {
        self.parse()
    }
}

impl StatusKey for String {
    fn resolve(&self) -> Result<EpisodeStatus, ResetError> {
        self.as_str().parse()
    }
}

pub fn label_for<K>(key: &K) -> Result<&'static str, ResetError>
where
    K: StatusKey + ?Sized,
{
    key.resolve().map(EpisodeStatus::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_for_agrees_on_enum_and_wire_label() {
        for status in EpisodeStatus::ALL {
            assert_eq!(label_for(&status), label_for(status.as_str()));
            assert_eq!(label_for(&status.as_str().to_owned()), Ok(status.label()));
        }
    }

    #[test]
    fn label_for_rejects_unknown_labels() {
        assert_eq!(
            label_for("episode_complete"),
            Err(ResetError::UnknownStatus("episode_complete".into()))
        );
        assert!(label_for("Crashed").is_err());
        assert!(label_for("").is_err());
    }

    #[test]
    fn crashed_displays_as_crashed() {
        assert_eq!(label_for(&EpisodeStatus::Crashed), Ok("Crashed"));
        assert_eq!(EpisodeStatus::OffTrack.to_string(), "Off track");
    }

    #[test]
    fn serializes_as_wire_label() {
        for status in EpisodeStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: EpisodeStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn declaration_order_is_preserved() {
        let mut sorted = EpisodeStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, EpisodeStatus::ALL);
        assert_eq!(EpisodeStatus::default(), EpisodeStatus::InProgress);
    }

    #[test]
    fn only_running_and_paused_are_non_terminal() {
        let non_terminal: Vec<_> = EpisodeStatus::ALL
            .into_iter()
            .filter(|status| !status.is_terminal())
            .collect();
        assert_eq!(
            non_terminal,
            [EpisodeStatus::InProgress, EpisodeStatus::Pause]
        );
    }
}
