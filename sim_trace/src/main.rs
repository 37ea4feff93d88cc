mod args;
mod error;
mod recorded_step;
mod replay;
mod sink_thread;

use args::Args;
use clap::Parser;
use error::TraceError;
use file_io::{create_file_buf_write, open_file_buf_read, read_json_file, JsonLinesWriter};
use replay::{replay_steps, Replay};
use reset_rules::{construct_reset_rules_manager, ResetConfig};
use sink_thread::{spawn_sink_thread, Sink};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), TraceError> {
    let config: ResetConfig = read_json_file(&args.config)?;
    info!(
        agent = %config.agent_name,
        is_continuous = config.is_continuous,
        number_of_trials = config.number_of_trials,
        is_virtual_event = config.is_virtual_event,
        "loaded reset config"
    );
    let mut replay = Replay::new(construct_reset_rules_manager(&config));
    let input = open_file_buf_read(&args.input)?;
    let trace = JsonLinesWriter::new(create_file_buf_write(&args.output)?);
    let video = args
        .video_output
        .as_ref()
        .map(create_file_buf_write)
        .transpose()?
        .map(JsonLinesWriter::new);
    let with_video = video.is_some();
    let (sink_sender, sink_receiver) = crossbeam_channel::unbounded();
    let sink_thread = spawn_sink_thread(sink_receiver, Sink::new(trace, video));
    let replayed = replay_steps(&mut replay, input, &sink_sender, with_video);
    // the sink only returns once every sender is gone
    drop(sink_sender);
    let sink = sink_thread.join().unwrap()?;
    let replayed = replayed?;
    info!(
        steps = replayed,
        rows = sink.trace_lines(),
        video_rows = sink.video_lines(),
        episodes = replay.episodes_finished(),
        output = %args.output.display(),
        "replay finished"
    );
    for (status, count) in replay.status_counts() {
        info!(status = status.as_str(), count, "{}", status.label());
    }
    Ok(())
}
