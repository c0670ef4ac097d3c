use std::time::Duration;

use scraper::{Html, Selector};
use serde::Deserialize;
use summarizer_logging::summarizer_debug;

use crate::decode::decode_text;
use crate::fetch::{Fetcher, ProgressSink};
use crate::{ExtractError, JobId};

const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptionError {
    #[error("player data not found after {attempts} attempts")]
    PlayerDataMissing { attempts: u32 },
}

/// Bounded wait for the player data to appear in the watch page.
#[derive(Debug, Clone)]
pub struct PollSettings {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval: Duration::from_millis(500),
        }
    }
}

/// The slice of the player response the summarizer cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(default)]
    captions: Option<Captions>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    #[serde(default)]
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl PlayerResponse {
    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        self.captions
            .as_ref()
            .and_then(|captions| captions.player_captions_tracklist_renderer.as_ref())
            .map(|renderer| renderer.caption_tracks.as_slice())
            .unwrap_or_default()
    }
}

/// Finds the `ytInitialPlayerResponse` assignment in the page HTML and
/// deserializes the object literal. Later occurrences are tried when an
/// earlier one does not parse.
pub fn find_player_response(html: &str) -> Option<PlayerResponse> {
    let mut search_from = 0;
    while let Some(pos) = html[search_from..].find(PLAYER_RESPONSE_MARKER) {
        let after_marker = search_from + pos + PLAYER_RESPONSE_MARKER.len();
        search_from = after_marker;

        let rest = html[after_marker..].trim_start();
        let Some(assigned) = rest.strip_prefix('=') else {
            continue;
        };
        let Some(object) = balanced_object(assigned.trim_start()) else {
            continue;
        };
        if let Ok(parsed) = serde_json::from_str::<PlayerResponse>(object) {
            return Some(parsed);
        }
    }
    None
}

/// Returns the shortest prefix of `input` that is a brace-balanced JSON
/// object, respecting string literals and escapes.
fn balanced_object(input: &str) -> Option<&str> {
    if !input.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in input.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&input[..=idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// The `en` track when present, otherwise the first track.
pub fn pick_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|track| track.language_code.as_deref() == Some("en"))
        .or_else(|| tracks.first())
}

/// Flattens a caption document to plain text: every `<text>` element,
/// trimmed, one per line. The lenient HTML parser copes with the XML
/// prolog and decodes entities.
pub fn flatten_caption_xml(xml: &str) -> String {
    let Ok(selector) = Selector::parse("text") else {
        return String::new();
    };
    let doc = Html::parse_document(xml);
    doc.select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Retrieves the transcript of a watch page: poll for the player data,
/// pick a caption track, fetch and flatten it. No caption tracks yields an
/// empty transcript, not an error.
pub struct CaptionExtractor {
    poll: PollSettings,
}

impl CaptionExtractor {
    pub fn new(poll: PollSettings) -> Self {
        Self { poll }
    }

    pub async fn transcript(
        &self,
        fetcher: &dyn Fetcher,
        job_id: JobId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<String, ExtractError> {
        let player = self.wait_for_player_data(fetcher, job_id, url, sink).await?;
        let Some(track) = pick_track(player.caption_tracks()) else {
            log::debug!("no caption tracks on {url}");
            return Ok(String::new());
        };

        let output = fetcher.fetch(job_id, &track.base_url, sink).await?;
        let decoded = decode_text(&output.bytes, output.metadata.content_type.as_deref())?;
        Ok(flatten_caption_xml(&decoded.text))
    }

    async fn wait_for_player_data(
        &self,
        fetcher: &dyn Fetcher,
        job_id: JobId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<PlayerResponse, ExtractError> {
        let attempts = self.poll.max_attempts.max(1);
        for attempt in 1..=attempts {
            let output = fetcher.fetch(job_id, url, sink).await?;
            let decoded = decode_text(&output.bytes, output.metadata.content_type.as_deref())?;
            if let Some(player) = find_player_response(&decoded.text) {
                return Ok(player);
            }
            summarizer_debug!("player data missing on attempt {attempt}/{attempts}");
            if attempt < attempts {
                tokio::time::sleep(self.poll.interval).await;
            }
        }
        Err(CaptionError::PlayerDataMissing { attempts }.into())
    }
}
