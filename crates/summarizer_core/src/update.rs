use crate::{
    build_prompt, classify_source, AppState, Effect, ExtractOutcome, Msg, SourceKind,
    SummaryOutcome,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(input) => {
            state.set_url_input(input);
            Vec::new()
        }
        Msg::StyleSelected(style) => {
            state.set_style(style);
            Vec::new()
        }
        Msg::SummarizeClicked => {
            // Only one extraction result is in flight per click.
            if state.is_busy() {
                return (state, Vec::new());
            }
            let url = state.url_input().trim().to_string();
            if url.is_empty() {
                state.fail("Enter a URL to summarize.");
                return (state, Vec::new());
            }
            let kind = classify_source(&url);
            let status = match kind {
                SourceKind::Article => "Extracting article text...",
                SourceKind::VideoCaptions => "Fetching video captions...",
            };
            state.begin_extracting(kind, status);
            vec![Effect::Extract { url, kind }]
        }
        Msg::ExtractionDone { outcome } => {
            if state.phase() != crate::RequestPhase::Extracting {
                // Stale completion from a dismissed request.
                return (state, Vec::new());
            }
            match outcome {
                ExtractOutcome::Text(text) if text.trim().is_empty() => {
                    let status = match state.source() {
                        Some(SourceKind::VideoCaptions) => "No transcript found for this video.",
                        _ => "No article text found.",
                    };
                    state.fail(status);
                    Vec::new()
                }
                ExtractOutcome::Text(text) => {
                    let prompt = build_prompt(state.style(), &text);
                    state.begin_summarizing("Summarizing...");
                    vec![Effect::Summarize { prompt }]
                }
                ExtractOutcome::Failed { message } => {
                    state.fail(format!("Error: {message}"));
                    Vec::new()
                }
            }
        }
        Msg::SummaryDone { outcome } => {
            if state.phase() != crate::RequestPhase::Summarizing {
                return (state, Vec::new());
            }
            match outcome {
                SummaryOutcome::Summary(summary) => {
                    state.complete(summary);
                }
                SummaryOutcome::Failed { message } => {
                    state.fail(format!("Error: {message}"));
                }
            }
            Vec::new()
        }
        Msg::ResetClicked => {
            if state.is_busy() {
                // No cancellation: the running request must finish first.
                return (state, Vec::new());
            }
            state.reset();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
