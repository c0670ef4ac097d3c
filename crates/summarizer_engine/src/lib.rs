//! Summarizer engine: IO pipeline and effect execution.
mod captions;
mod decode;
mod engine;
mod extract;
mod fetch;
mod gemini;
mod types;

pub use captions::{
    find_player_response, flatten_caption_xml, pick_track, CaptionError, CaptionExtractor,
    CaptionTrack, PlayerResponse, PollSettings,
};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{EngineHandle, EngineSettings};
pub use extract::{ArticleTextExtractor, TextExtractor};
pub use fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use gemini::{GeminiClient, SummaryClient, SummaryError, DEFAULT_MODEL, GEMINI_BASE_URL};
pub use types::{
    EngineEvent, ExtractError, ExtractedText, FailureKind, FetchError, FetchMetadata, FetchOutput,
    JobId, JobProgress, PageKind, Stage,
};
