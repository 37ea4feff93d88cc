use crate::generic::{GenericMetrics, MetricKey};
use crate::{MetricValue, MetricsError};
use serde::Serialize;

/// The fields of one sim-trace row, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepMetric {
    Episode,
    Steps,
    X,
    Y,
    Yaw,
    Steer,
    Throttle,
    Action,
    Reward,
    Done,
    WheelsOnTrack,
    Progress,
    ClosestWaypoint,
    TrackLen,
    Time,
    EpisodeStatus,
}

impl MetricKey for StepMetric {
    const ALL: &'static [Self] = &[
        Self::Episode,
        Self::Steps,
        Self::X,
        Self::Y,
        Self::Yaw,
        Self::Steer,
        Self::Throttle,
        Self::Action,
        Self::Reward,
        Self::Done,
        Self::WheelsOnTrack,
        Self::Progress,
        Self::ClosestWaypoint,
        Self::TrackLen,
        Self::Time,
        Self::EpisodeStatus,
    ];
    fn key(self) -> &'static str {
        match self {
            Self::Episode => "episode",
            Self::Steps => "steps",
            Self::X => "X",
            Self::Y => "Y",
            Self::Yaw => "yaw",
            Self::Steer => "steer",
            Self::Throttle => "throttle",
            Self::Action => "action",
            Self::Reward => "reward",
            Self::Done => "done",
            Self::WheelsOnTrack => "all_wheels_on_track",
            Self::Progress => "progress",
            Self::ClosestWaypoint => "closest_waypoint",
            Self::TrackLen => "track_len",
            Self::Time => "tstamp",
            Self::EpisodeStatus => "episode_status",
        }
    }
    fn index(self) -> usize {
        self as usize
    }
}

/// One row of the sim trace. Created unset at the start of a step, filled
/// in by the caller and validated before it is handed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StepMetrics(GenericMetrics<StepMetric>);

impl StepMetrics {
    pub fn make_default() -> Self {
        Self(GenericMetrics::unset())
    }
    pub fn set(&mut self, metric: StepMetric, value: impl Into<MetricValue>) {
        self.0.set(metric, value.into());
    }
    pub fn with(mut self, metric: StepMetric, value: impl Into<MetricValue>) -> Self {
        self.set(metric, value);
        self
    }
    pub fn get(&self, metric: StepMetric) -> Option<&MetricValue> {
        self.0.get(metric)
    }
    pub fn iter(&self) -> impl Iterator<Item = (StepMetric, Option<&MetricValue>)> + '_ {
        self.0.iter()
    }
    /// Fails on the first unset field in declared order. Nothing is filled
    /// in on the caller's behalf.
    pub fn validate(&self) -> Result<(), MetricsError> {
        match self.0.first_unset() {
            Some(metric) => Err(MetricsError::MissingMetric(metric.key())),
            None => Ok(()),
        }
    }
}

impl Default for StepMetrics {
    fn default() -> Self {
        Self::make_default()
    }
}
