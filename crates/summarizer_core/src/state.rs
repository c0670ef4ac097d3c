use crate::view_model::AppViewModel;
use crate::{SourceKind, SummaryStyle};

/// Lifecycle of the single in-flight summarize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Extracting,
    Summarizing,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    style: SummaryStyle,
    phase: RequestPhase,
    source: Option<SourceKind>,
    status: Option<String>,
    summary: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            url_input: self.url_input.clone(),
            style: self.style,
            status: self.status.clone(),
            summary: self.summary.clone(),
            busy: self.is_busy(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. Drivers use this to coalesce
    /// redraws.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn style(&self) -> SummaryStyle {
        self.style
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    /// True while a request is between click and completion. At most one
    /// request is in flight; new clicks are ignored while busy.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            RequestPhase::Extracting | RequestPhase::Summarizing
        )
    }

    pub(crate) fn set_url_input(&mut self, input: String) {
        if self.url_input != input {
            self.url_input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn set_style(&mut self, style: SummaryStyle) {
        if self.style != style {
            self.style = style;
            self.dirty = true;
        }
    }

    pub(crate) fn source(&self) -> Option<SourceKind> {
        self.source
    }

    pub(crate) fn begin_extracting(&mut self, kind: SourceKind, status: impl Into<String>) {
        self.phase = RequestPhase::Extracting;
        self.source = Some(kind);
        self.summary = None;
        self.status = Some(status.into());
        self.dirty = true;
    }

    pub(crate) fn begin_summarizing(&mut self, status: impl Into<String>) {
        self.phase = RequestPhase::Summarizing;
        self.status = Some(status.into());
        self.dirty = true;
    }

    pub(crate) fn complete(&mut self, summary: String) {
        self.phase = RequestPhase::Done;
        self.summary = Some(summary);
        self.status = None;
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, status: impl Into<String>) {
        self.phase = RequestPhase::Failed;
        self.status = Some(status.into());
        self.dirty = true;
    }

    pub(crate) fn reset(&mut self) {
        self.phase = RequestPhase::Idle;
        self.source = None;
        self.status = None;
        self.summary = None;
        self.dirty = true;
    }
}
