//! Drives the core state machine against the engine's event channel.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::bail;
use summarizer_core::{
    update, AppState, Effect, ExtractOutcome, Msg, RequestPhase, SourceKind, SummaryOutcome,
};
use summarizer_engine::{
    EngineEvent, EngineHandle, EngineSettings, FetchSettings, JobId, PageKind,
};
use summarizer_logging::summarizer_info;

use crate::cli::Cli;

pub(crate) fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    summarizer_logging::init_terminal(level);

    let engine = EngineHandle::new(EngineSettings {
        fetch: FetchSettings {
            request_timeout: Duration::from_secs(cli.timeout_secs),
            ..FetchSettings::default()
        },
        api_key: cli.api_key,
        model: cli.model,
        ..EngineSettings::default()
    });

    let mut driver = Driver {
        state: AppState::new(),
        engine,
        next_job: 0,
    };

    driver.dispatch(Msg::InputChanged(cli.url));
    driver.dispatch(Msg::StyleSelected(cli.style));
    driver.dispatch(Msg::SummarizeClicked);

    while driver.state.is_busy() {
        let Some(event) = driver.engine.recv() else {
            bail!("engine stopped unexpectedly");
        };
        if let Some(msg) = map_event(event) {
            driver.dispatch(msg);
        }
    }

    let view = driver.state.view();
    match view.phase {
        RequestPhase::Done => {
            if let Some(summary) = view.summary {
                println!("{summary}");
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            if let Some(status) = view.status {
                eprintln!("{status}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

struct Driver {
    state: AppState,
    engine: EngineHandle,
    next_job: JobId,
}

impl Driver {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            if let Some(status) = state.view().status {
                summarizer_info!("{status}");
            }
        }
        self.state = state;
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: Effect) {
        self.next_job += 1;
        match effect {
            Effect::Extract { url, kind } => {
                self.engine.extract(self.next_job, url, map_kind(kind));
            }
            Effect::Summarize { prompt } => {
                self.engine.summarize(self.next_job, prompt);
            }
        }
    }
}

fn map_kind(kind: SourceKind) -> PageKind {
    match kind {
        SourceKind::Article => PageKind::Article,
        SourceKind::VideoCaptions => PageKind::VideoCaptions,
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::Progress(progress) => {
            log::debug!("job {} at stage {:?}", progress.job_id, progress.stage);
            None
        }
        EngineEvent::ExtractionCompleted { result, .. } => {
            let outcome = match result {
                Ok(extracted) => {
                    if let Some(title) = &extracted.title {
                        log::debug!("page title: {title}");
                    }
                    ExtractOutcome::Text(extracted.text)
                }
                Err(err) => ExtractOutcome::Failed {
                    message: err.to_string(),
                },
            };
            Some(Msg::ExtractionDone { outcome })
        }
        EngineEvent::SummaryCompleted { result, .. } => {
            let outcome = match result {
                Ok(summary) => SummaryOutcome::Summary(summary),
                Err(err) => SummaryOutcome::Failed {
                    message: err.to_string(),
                },
            };
            Some(Msg::SummaryDone { outcome })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summarizer_engine::{ExtractError, ExtractedText, FailureKind, FetchError, JobProgress, Stage};

    #[test]
    fn extraction_events_map_to_core_messages() {
        let event = EngineEvent::ExtractionCompleted {
            job_id: 1,
            result: Ok(ExtractedText {
                title: Some("T".to_string()),
                text: "body".to_string(),
            }),
        };
        assert_eq!(
            map_event(event),
            Some(Msg::ExtractionDone {
                outcome: ExtractOutcome::Text("body".to_string())
            })
        );
    }

    #[test]
    fn extraction_errors_carry_display_text() {
        let event = EngineEvent::ExtractionCompleted {
            job_id: 1,
            result: Err(ExtractError::Fetch(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "server".to_string(),
            })),
        };
        assert_eq!(
            map_event(event),
            Some(Msg::ExtractionDone {
                outcome: ExtractOutcome::Failed {
                    message: "http status 500".to_string()
                }
            })
        );
    }

    #[test]
    fn progress_events_do_not_reach_the_core() {
        let event = EngineEvent::Progress(JobProgress {
            job_id: 1,
            stage: Stage::Fetching,
            bytes: Some(10),
        });
        assert_eq!(map_event(event), None);
    }
}
