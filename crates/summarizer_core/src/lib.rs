//! Summarizer core: pure request state machine and prompt templating.
mod effect;
mod msg;
mod prompt;
mod source;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{ExtractOutcome, Msg, SummaryOutcome};
pub use prompt::{build_prompt, truncate_for_prompt, SummaryStyle, MAX_PROMPT_INPUT_CHARS};
pub use source::{classify_source, SourceKind};
pub use state::{AppState, RequestPhase};
pub use update::update;
pub use view_model::AppViewModel;
