use crossbeam_channel::Receiver;
use file_io::{JsonIoError, JsonLinesWriter};
use sim_metrics::{StepMetrics, VideoMetrics};
use std::io::Write;
use std::thread::JoinHandle;

const THREAD_NAME: &str = "sink";

pub enum SinkMessage {
    Step(StepMetrics),
    Video(VideoMetrics),
}

pub struct Sink<W: Write> {
    trace: JsonLinesWriter<W>,
    video: Option<JsonLinesWriter<W>>,
}

impl<W: Write> Sink<W> {
    pub fn new(trace: JsonLinesWriter<W>, video: Option<JsonLinesWriter<W>>) -> Self {
        Self { trace, video }
    }
    // drains the channel until every sender is dropped
    pub fn run(mut self, receiver: Receiver<SinkMessage>) -> Result<Self, JsonIoError> {
        for message in receiver.iter() {
            match message {
                SinkMessage::Step(metrics) => self.trace.write(&metrics)?,
                SinkMessage::Video(video) => match &mut self.video {
                    Some(writer) => writer.write(&video)?,
                    None => {
                        tracing::warn!("{THREAD_NAME} thread: video metrics without a video output")
                    }
                },
            }
        }
        self.trace.flush()?;
        if let Some(video) = &mut self.video {
            video.flush()?;
        }
        Ok(self)
    }
    pub fn trace_lines(&self) -> usize {
        self.trace.lines_written()
    }
    pub fn video_lines(&self) -> usize {
        self.video.as_ref().map_or(0, JsonLinesWriter::lines_written)
    }
}

pub fn spawn_sink_thread<W>(
    receiver: Receiver<SinkMessage>,
    sink: Sink<W>,
) -> JoinHandle<Result<Sink<W>, JsonIoError>>
where
    W: Write + Send + 'static,
{
    std::thread::spawn(move || sink.run(receiver))
}
