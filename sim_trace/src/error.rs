use file_io::JsonIoError;
use reset_rules::ResetError;
use sim_metrics::MetricsError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("step {line}: {source}")]
    Reset {
        line: usize,
        #[source]
        source: ResetError,
    },
    #[error("step {line}: {source}")]
    Metrics {
        line: usize,
        #[source]
        source: MetricsError,
    },
    #[error(transparent)]
    Json(#[from] JsonIoError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("trace sink hung up before the replay finished")]
    SinkClosed,
}
