use reset_rules::StateSnapshot;
use serde::Deserialize;

/// One line of a recorded run: the step telemetry as the simulation
/// reported it, plus the state the reset rules are evaluated against.
/// Telemetry the recorder missed stays `None` and fails validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordedStep {
    pub steps: Option<u32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub yaw: Option<f64>,
    pub steer: Option<f64>,
    pub throttle: Option<f64>,
    pub action: Option<u32>,
    pub reward: Option<f64>,
    pub all_wheels_on_track: Option<bool>,
    pub closest_waypoint: Option<u32>,
    pub track_len: Option<f64>,
    pub tstamp: Option<f64>,
    pub snapshot: StateSnapshot,
}
