use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path of the JSON file holding the agent's reset configuration.
    #[arg(short, long, default_value = "reset_config.json")]
    pub config: PathBuf,
    /// Recorded steps to replay, one JSON object per line.
    #[arg(short, long)]
    pub input: PathBuf,
    /// Where the sim trace is written, one JSON object per line.
    #[arg(short, long, default_value = "sim_trace.jsonl")]
    pub output: PathBuf,
    /// Where the per-step video overlay metrics are written.
    ///
    /// If unset, no video metrics are written
    #[arg(short, long, required = false)]
    pub video_output: Option<PathBuf>,
}
