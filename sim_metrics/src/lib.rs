mod error;
mod generic;
mod step;
mod value;
mod video;

pub use error::MetricsError;
pub use generic::MetricKey;
pub use step::{StepMetric, StepMetrics};
pub use value::MetricValue;
pub use video::{VideoMetric, VideoMetrics};
