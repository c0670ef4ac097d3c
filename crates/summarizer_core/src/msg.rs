/// Result of the extraction step, as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// Extraction finished; the text may still be empty.
    Text(String),
    /// Extraction could not complete (network, decode, missing player data).
    Failed { message: String },
}

/// Result of the summarize step, as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summary(String),
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    InputChanged(String),
    /// User picked a summary style.
    StyleSelected(crate::SummaryStyle),
    /// User asked for a summary of the current URL.
    SummarizeClicked,
    /// Engine finished the extraction step.
    ExtractionDone { outcome: ExtractOutcome },
    /// Engine finished the summarize step.
    SummaryDone { outcome: SummaryOutcome },
    /// User dismissed the current result to start over.
    ResetClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
