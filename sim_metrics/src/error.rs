use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("step metric `{0}` was never set")]
    MissingMetric(&'static str),
}
