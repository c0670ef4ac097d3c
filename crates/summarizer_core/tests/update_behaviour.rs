use std::sync::Once;

use summarizer_core::{
    update, AppState, Effect, ExtractOutcome, Msg, RequestPhase, SourceKind, SummaryOutcome,
    SummaryStyle,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(summarizer_logging::initialize_for_tests);
}

fn click_summarize(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(url.to_string()));
    update(state, Msg::SummarizeClicked)
}

#[test]
fn summarize_click_starts_extraction() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = click_summarize(state, "https://example.com/post");
    let view = next.view();

    assert_eq!(view.phase, RequestPhase::Extracting);
    assert!(view.busy);
    assert!(view.dirty);
    assert_eq!(view.status.as_deref(), Some("Extracting article text..."));
    assert_eq!(
        effects,
        vec![Effect::Extract {
            url: "https://example.com/post".to_string(),
            kind: SourceKind::Article,
        }]
    );
}

#[test]
fn youtube_watch_url_requests_captions() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = click_summarize(state, "https://www.youtube.com/watch?v=abc");

    assert_eq!(
        effects,
        vec![Effect::Extract {
            url: "https://www.youtube.com/watch?v=abc".to_string(),
            kind: SourceKind::VideoCaptions,
        }]
    );
    assert_eq!(
        next.view().status.as_deref(),
        Some("Fetching video captions...")
    );
}

#[test]
fn click_is_ignored_while_busy() {
    init_logging();
    let state = AppState::new();
    let (state, _) = click_summarize(state, "https://example.com");

    let (state, effects) = update(state, Msg::SummarizeClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().phase, RequestPhase::Extracting);
}

#[test]
fn empty_url_fails_without_effects() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::SummarizeClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().phase, RequestPhase::Failed);
    assert_eq!(
        state.view().status.as_deref(),
        Some("Enter a URL to summarize.")
    );
}

#[test]
fn extraction_text_moves_to_summarizing_with_prompt() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::StyleSelected(SummaryStyle::Bullets));
    let (state, _) = click_summarize(state, "https://example.com");

    let (state, effects) = update(
        state,
        Msg::ExtractionDone {
            outcome: ExtractOutcome::Text("article body".to_string()),
        },
    );

    assert_eq!(state.view().phase, RequestPhase::Summarizing);
    assert_eq!(effects.len(), 1);
    let Effect::Summarize { prompt } = &effects[0] else {
        panic!("expected summarize effect, got {effects:?}");
    };
    assert!(prompt.contains("5-7 key points"));
    assert!(prompt.ends_with("article body"));
}

#[test]
fn empty_article_extraction_fails_with_status() {
    init_logging();
    let state = AppState::new();
    let (state, _) = click_summarize(state, "https://example.com");

    let (state, effects) = update(
        state,
        Msg::ExtractionDone {
            outcome: ExtractOutcome::Text("  \n ".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().phase, RequestPhase::Failed);
    assert_eq!(state.view().status.as_deref(), Some("No article text found."));
}

#[test]
fn empty_transcript_reports_video_status() {
    init_logging();
    let state = AppState::new();
    let (state, _) = click_summarize(state, "https://www.youtube.com/watch?v=abc");

    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            outcome: ExtractOutcome::Text(String::new()),
        },
    );

    assert_eq!(
        state.view().status.as_deref(),
        Some("No transcript found for this video.")
    );
}

#[test]
fn extraction_failure_surfaces_message() {
    init_logging();
    let state = AppState::new();
    let (state, _) = click_summarize(state, "https://example.com");

    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            outcome: ExtractOutcome::Failed {
                message: "http status 503".to_string(),
            },
        },
    );

    assert_eq!(state.view().phase, RequestPhase::Failed);
    assert_eq!(
        state.view().status.as_deref(),
        Some("Error: http status 503")
    );
}

#[test]
fn summary_completion_stores_summary() {
    init_logging();
    let state = AppState::new();
    let (state, _) = click_summarize(state, "https://example.com");
    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            outcome: ExtractOutcome::Text("body".to_string()),
        },
    );

    let (state, effects) = update(
        state,
        Msg::SummaryDone {
            outcome: SummaryOutcome::Summary("a fine summary".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.phase, RequestPhase::Done);
    assert!(!view.busy);
    assert_eq!(view.summary.as_deref(), Some("a fine summary"));
    assert_eq!(view.status, None);
}

#[test]
fn stale_extraction_after_reset_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _) = click_summarize(state, "https://example.com");
    let (state, _) = update(
        state,
        Msg::ExtractionDone {
            outcome: ExtractOutcome::Failed {
                message: "timeout".to_string(),
            },
        },
    );
    let (state, _) = update(state, Msg::ResetClicked);

    let (state, effects) = update(
        state,
        Msg::ExtractionDone {
            outcome: ExtractOutcome::Text("late".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().phase, RequestPhase::Idle);
}

#[test]
fn reset_is_blocked_while_busy() {
    init_logging();
    let state = AppState::new();
    let (state, _) = click_summarize(state, "https://example.com");

    let (state, effects) = update(state, Msg::ResetClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().phase, RequestPhase::Extracting);
}
