use crate::generic::{GenericMetrics, MetricKey};
use crate::MetricValue;
use serde::Serialize;

/// The overlay values shown on the evaluation video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoMetric {
    LapCounter,
    CompletionPercentage,
    ResetCounter,
    CrashCounter,
    Throttle,
    Steering,
    BestLapTime,
    TotalEvaluationTime,
    Done,
    X,
    Y,
    ObjectLocations,
}

impl MetricKey for VideoMetric {
    const ALL: &'static [Self] = &[
        Self::LapCounter,
        Self::CompletionPercentage,
        Self::ResetCounter,
        Self::CrashCounter,
        Self::Throttle,
        Self::Steering,
        Self::BestLapTime,
        Self::TotalEvaluationTime,
        Self::Done,
        Self::X,
        Self::Y,
        Self::ObjectLocations,
    ];
    fn key(self) -> &'static str {
        match self {
            Self::LapCounter => "lap_counter",
            Self::CompletionPercentage => "completion_percentage",
            Self::ResetCounter => "reset_counter",
            Self::CrashCounter => "crash_counter",
            Self::Throttle => "throttle",
            Self::Steering => "steering",
            Self::BestLapTime => "best_lap_time",
            Self::TotalEvaluationTime => "total_evaluation_time",
            Self::Done => "done",
            Self::X => "x",
            Self::Y => "y",
            Self::ObjectLocations => "object_locations",
        }
    }
    fn index(self) -> usize {
        self as usize
    }
}

// Unlike StepMetrics, unset fields are normal here: several producers fill
// these in at their own pace over the whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VideoMetrics(GenericMetrics<VideoMetric>);

impl VideoMetrics {
    pub fn make_empty() -> Self {
        Self(GenericMetrics::unset())
    }
    pub fn set(&mut self, metric: VideoMetric, value: impl Into<MetricValue>) {
        self.0.set(metric, value.into());
    }
    pub fn clear(&mut self, metric: VideoMetric) {
        self.0.clear(metric);
    }
    pub fn get(&self, metric: VideoMetric) -> Option<&MetricValue> {
        self.0.get(metric)
    }
    pub fn iter(&self) -> impl Iterator<Item = (VideoMetric, Option<&MetricValue>)> + '_ {
        self.0.iter()
    }
}

impl Default for VideoMetrics {
    fn default() -> Self {
        Self::make_empty()
    }
}
