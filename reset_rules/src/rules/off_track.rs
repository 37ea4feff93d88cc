use super::{required, ResetRule};
use crate::{EpisodeStatus, ResetError, StateSnapshot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffTrackRule;

impl ResetRule for OffTrackRule {
    fn name(&self) -> &'static str {
        "off_track"
    }
    fn status(&self) -> EpisodeStatus {
        EpisodeStatus::OffTrack
    }
    fn evaluate(&self, snapshot: &StateSnapshot) -> Result<bool, ResetError> {
        required(
            snapshot.all_wheels_off_track,
            self.name(),
            "all_wheels_off_track",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_wheel_flag() {
        let off = StateSnapshot::default().with_all_wheels_off_track(true);
        let on = StateSnapshot::default().with_all_wheels_off_track(false);
        assert_eq!(OffTrackRule.evaluate(&off), Ok(true));
        assert_eq!(OffTrackRule.evaluate(&on), Ok(false));
        assert!(OffTrackRule.evaluate(&StateSnapshot::default()).is_err());
    }
}
