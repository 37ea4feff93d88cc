use reset_rules::EpisodeStatus;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Status(EpisodeStatus),
    Points(Vec<[f64; 2]>),
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<EpisodeStatus> for MetricValue {
    fn from(status: EpisodeStatus) -> Self {
        Self::Status(status)
    }
}

impl From<Vec<[f64; 2]>> for MetricValue {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Self::Points(points)
    }
}
