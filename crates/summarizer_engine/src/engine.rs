use std::sync::{mpsc, Arc};
use std::thread;

use crate::captions::{CaptionExtractor, PollSettings};
use crate::decode::decode_text;
use crate::extract::{ArticleTextExtractor, TextExtractor};
use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::gemini::{GeminiClient, SummaryClient, SummaryError, DEFAULT_MODEL};
use crate::{
    EngineEvent, ExtractError, ExtractedText, JobId, JobProgress, PageKind, Stage,
};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub fetch: FetchSettings,
    pub poll: PollSettings,
    /// Absent key is not fatal at startup; summarize requests fail with a
    /// user-visible message instead.
    pub api_key: Option<String>,
    pub model: String,
    /// Overrides the generation API endpoint (tests, proxies).
    pub api_base_url: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            poll: PollSettings::default(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: None,
        }
    }
}

enum EngineCommand {
    Extract {
        job_id: JobId,
        url: String,
        kind: PageKind,
    },
    Summarize {
        job_id: JobId,
        prompt: String,
    },
}

struct Worker {
    fetcher: ReqwestFetcher,
    extractor: ArticleTextExtractor,
    captions: CaptionExtractor,
    summarizer: Result<GeminiClient, SummaryError>,
}

/// Runs engine commands on a background Tokio runtime and reports results
/// over an event channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let summarizer = match settings.api_key {
            Some(key) => {
                let built = match settings.api_base_url {
                    Some(base) => GeminiClient::with_base_url(key, base),
                    None => GeminiClient::new(key),
                };
                built.map(|client| client.with_model(settings.model))
            }
            None => Err(SummaryError::MissingApiKey),
        };
        let worker = Arc::new(Worker {
            fetcher: ReqwestFetcher::new(settings.fetch),
            extractor: ArticleTextExtractor,
            captions: CaptionExtractor::new(settings.poll),
            summarizer,
        });

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let worker = worker.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&worker, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn extract(&self, job_id: JobId, url: impl Into<String>, kind: PageKind) {
        let _ = self.cmd_tx.send(EngineCommand::Extract {
            job_id,
            url: url.into(),
            kind,
        });
    }

    pub fn summarize(&self, job_id: JobId, prompt: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Summarize {
            job_id,
            prompt: prompt.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. `None` means the engine shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(worker: &Worker, command: EngineCommand, event_tx: mpsc::Sender<EngineEvent>) {
    let sink = ChannelProgressSink::new(event_tx.clone());
    match command {
        EngineCommand::Extract { job_id, url, kind } => {
            sink.emit(EngineEvent::Progress(JobProgress {
                job_id,
                stage: Stage::Queued,
                bytes: None,
            }));
            let result = run_extraction(worker, job_id, &url, kind, &sink).await;
            let _ = event_tx.send(EngineEvent::ExtractionCompleted { job_id, result });
        }
        EngineCommand::Summarize { job_id, prompt } => {
            sink.emit(EngineEvent::Progress(JobProgress {
                job_id,
                stage: Stage::Summarizing,
                bytes: None,
            }));
            let result = match &worker.summarizer {
                Ok(client) => client.summarize(&prompt).await,
                Err(err) => Err(err.clone()),
            };
            if result.is_ok() {
                sink.emit(EngineEvent::Progress(JobProgress {
                    job_id,
                    stage: Stage::Done,
                    bytes: None,
                }));
            }
            let _ = event_tx.send(EngineEvent::SummaryCompleted { job_id, result });
        }
    }
}

async fn run_extraction(
    worker: &Worker,
    job_id: JobId,
    url: &str,
    kind: PageKind,
    sink: &dyn ProgressSink,
) -> Result<ExtractedText, ExtractError> {
    match kind {
        PageKind::Article => {
            let output = worker.fetcher.fetch(job_id, url, sink).await?;
            let decoded = decode_text(&output.bytes, output.metadata.content_type.as_deref())?;
            sink.emit(EngineEvent::Progress(JobProgress {
                job_id,
                stage: Stage::Extracting,
                bytes: Some(output.metadata.byte_len),
            }));
            Ok(worker.extractor.extract(&decoded.text))
        }
        PageKind::VideoCaptions => {
            let text = worker
                .captions
                .transcript(&worker.fetcher, job_id, url, sink)
                .await?;
            sink.emit(EngineEvent::Progress(JobProgress {
                job_id,
                stage: Stage::Extracting,
                bytes: None,
            }));
            Ok(ExtractedText { title: None, text })
        }
    }
}
