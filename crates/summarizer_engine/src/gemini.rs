use std::time::Duration;

use serde::{Deserialize, Serialize};
use summarizer_logging::summarizer_warn;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Deterministic-ish summaries; matches the temperature the prompt templates
/// were tuned against.
const SUMMARY_TEMPERATURE: f32 = 0.2;
const NO_SUMMARY_FALLBACK: &str = "No summary available.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error("API key not found. Set GEMINI_API_KEY or pass --api-key.")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("unexpected API response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Clone, Serialize)]
struct RequestContent {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Error envelope the API returns on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait::async_trait]
pub trait SummaryClient: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError>;
}

/// Client for the Gemini generateContent endpoint. Auth is the `key` query
/// parameter; one POST per summary, no retries.
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, SummaryError> {
        Self::with_base_url(api_key, GEMINI_BASE_URL)
    }

    /// Same client against a different endpoint; tests point this at a mock
    /// server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SummaryError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SummaryError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|err| SummaryError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait::async_trait]
impl SummaryClient for GeminiClient {
    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: SUMMARY_TEMPERATURE,
            },
        };

        log::debug!("requesting summary from model {}", self.model);
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|err| SummaryError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| SummaryError::Network(err.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            summarizer_warn!("summary request failed with status {status}: {message}");
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|err| SummaryError::InvalidResponse(err.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string());

        Ok(text)
    }
}
