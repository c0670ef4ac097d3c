use crate::SourceKind;

/// Side effects requested by the pure update function, executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the page and extract its text (article body or caption track).
    Extract { url: String, kind: SourceKind },
    /// Send the finished prompt to the generation API.
    Summarize { prompt: String },
}
