use crate::{RequestPhase, SummaryStyle};

/// Render-ready snapshot of the request state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: RequestPhase,
    pub url_input: String,
    pub style: SummaryStyle,
    /// User-visible status line ("Extracting...", error text, ...).
    pub status: Option<String>,
    /// The finished summary, present only in the `Done` phase.
    pub summary: Option<String>,
    pub busy: bool,
    pub dirty: bool,
}
