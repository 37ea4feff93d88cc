use crate::recorded_step::RecordedStep;
use crate::sink_thread::SinkMessage;
use crate::TraceError;
use crossbeam_channel::Sender;
use reset_rules::{EpisodeStatus, RuleManager, LAP_COMPLETE_PROGRESS};
use sim_metrics::{MetricValue, StepMetric, StepMetrics, VideoMetric, VideoMetrics};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::debug;

/// Runs recorded steps through one agent's reset rules, numbering episodes
/// and keeping the video overlay counters up to date.
pub struct Replay {
    manager: RuleManager,
    episode: u32,
    status_counts: BTreeMap<EpisodeStatus, usize>,
    video: VideoMetrics,
    laps: u32,
    resets: u32,
    crashes: u32,
    best_lap_time: Option<f64>,
    first_tstamp: Option<f64>,
}

impl Replay {
    pub fn new(manager: RuleManager) -> Self {
        Self {
            manager,
            episode: 0,
            status_counts: BTreeMap::new(),
            video: VideoMetrics::make_empty(),
            laps: 0,
            resets: 0,
            crashes: 0,
            best_lap_time: None,
            first_tstamp: None,
        }
    }
    pub fn step(
        &mut self,
        line: usize,
        recorded: &RecordedStep,
    ) -> Result<StepMetrics, TraceError> {
        let status = self
            .manager
            .evaluate(&recorded.snapshot)
            .map_err(|source| TraceError::Reset { line, source })?;
        let metrics = self.step_metrics(recorded, status);
        metrics
            .validate()
            .map_err(|source| TraceError::Metrics { line, source })?;
        *self.status_counts.entry(status).or_default() += 1;
        self.update_video(recorded, status);
        if status.is_terminal() {
            debug!(
                episode = self.episode,
                line,
                status = status.as_str(),
                "episode ended"
            );
            self.episode += 1;
        }
        Ok(metrics)
    }
    fn step_metrics(&self, recorded: &RecordedStep, status: EpisodeStatus) -> StepMetrics {
        let mut metrics = StepMetrics::make_default();
        metrics.set(StepMetric::Episode, self.episode);
        let telemetry: [(StepMetric, Option<MetricValue>); 13] = [
            (StepMetric::Steps, recorded.steps.map(Into::into)),
            (StepMetric::X, recorded.x.map(Into::into)),
            (StepMetric::Y, recorded.y.map(Into::into)),
            (StepMetric::Yaw, recorded.yaw.map(Into::into)),
            (StepMetric::Steer, recorded.steer.map(Into::into)),
            (StepMetric::Throttle, recorded.throttle.map(Into::into)),
            (StepMetric::Action, recorded.action.map(Into::into)),
            (StepMetric::Reward, recorded.reward.map(Into::into)),
            (
                StepMetric::WheelsOnTrack,
                recorded.all_wheels_on_track.map(Into::into),
            ),
            (StepMetric::Progress, recorded.snapshot.progress.map(Into::into)),
            (
                StepMetric::ClosestWaypoint,
                recorded.closest_waypoint.map(Into::into),
            ),
            (StepMetric::TrackLen, recorded.track_len.map(Into::into)),
            (StepMetric::Time, recorded.tstamp.map(Into::into)),
        ];
        for (metric, value) in telemetry {
            if let Some(value) = value {
                metrics.set(metric, value);
            }
        }
        metrics.set(StepMetric::Done, status.is_terminal());
        metrics.set(StepMetric::EpisodeStatus, status);
        metrics
    }
    fn update_video(&mut self, recorded: &RecordedStep, status: EpisodeStatus) {
        match status {
            EpisodeStatus::EpisodeComplete
                if recorded
                    .snapshot
                    .progress
                    .is_some_and(|progress| progress >= LAP_COMPLETE_PROGRESS) =>
            {
                self.laps += 1;
                if let Some(lap_time) = recorded.snapshot.elapsed_secs {
                    let best = self.best_lap_time.map_or(lap_time, |best| best.min(lap_time));
                    self.best_lap_time = Some(best);
                    self.video.set(VideoMetric::BestLapTime, best);
                }
            }
            // a race that runs out of time mid-lap also ends complete
            EpisodeStatus::EpisodeComplete => {}
            EpisodeStatus::Crashed => {
                self.crashes += 1;
                self.resets += 1;
            }
            EpisodeStatus::OffTrack | EpisodeStatus::Immobilized | EpisodeStatus::Reversed => {
                self.resets += 1;
            }
            EpisodeStatus::InProgress | EpisodeStatus::Pause | EpisodeStatus::Park => {}
        }
        self.video.set(VideoMetric::LapCounter, self.laps);
        self.video.set(VideoMetric::ResetCounter, self.resets);
        self.video.set(VideoMetric::CrashCounter, self.crashes);
        self.video.set(VideoMetric::Done, status.is_terminal());
        if let Some(progress) = recorded.snapshot.progress {
            self.video.set(VideoMetric::CompletionPercentage, progress);
        }
        if let Some(throttle) = recorded.throttle {
            self.video.set(VideoMetric::Throttle, throttle);
        }
        if let Some(steer) = recorded.steer {
            self.video.set(VideoMetric::Steering, steer);
        }
        if let Some(x) = recorded.x {
            self.video.set(VideoMetric::X, x);
        }
        if let Some(y) = recorded.y {
            self.video.set(VideoMetric::Y, y);
        }
        if let Some(tstamp) = recorded.tstamp {
            let first = *self.first_tstamp.get_or_insert(tstamp);
            self.video.set(VideoMetric::TotalEvaluationTime, tstamp - first);
        }
    }
    pub fn episodes_finished(&self) -> u32 {
        self.episode
    }
    pub fn status_counts(&self) -> &BTreeMap<EpisodeStatus, usize> {
        &self.status_counts
    }
    pub fn video(&self) -> &VideoMetrics {
        &self.video
    }
}

/// Replays every line of `reader`, forwarding each validated row to the
/// sink. Stops at the first error; rows already sent stay sent.
pub fn replay_steps<R: BufRead>(
    replay: &mut Replay,
    reader: R,
    sink_sender: &Sender<SinkMessage>,
    with_video: bool,
) -> Result<usize, TraceError> {
    let mut replayed = 0;
    for (index, recorded) in file_io::read_json_lines::<_, RecordedStep>(reader).enumerate() {
        let recorded = recorded?;
        let metrics = replay.step(index + 1, &recorded)?;
        sink_sender
            .send(SinkMessage::Step(metrics))
            .map_err(|_| TraceError::SinkClosed)?;
        if with_video {
            sink_sender
                .send(SinkMessage::Video(replay.video().clone()))
                .map_err(|_| TraceError::SinkClosed)?;
        }
        replayed += 1;
    }
    Ok(replayed)
}
