//! Client for the hosted generative-language model.
//!
//! The model is reached through the Gemini `generateContent` REST endpoint.
//! [`ItineraryModel`] is the seam the HTTP layer depends on, so handlers can be
//! exercised without network access.

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::TripRequest;
use super::prompt::build_prompt;
use crate::config::ModelConfig;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model API key is not configured (set API_KEY)")]
    MissingApiKey,
    #[error("request to model service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model service returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("failed to decode model response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// A text-completion backend.
#[async_trait]
pub trait ItineraryModel: Send + Sync {
    /// Send a single prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    http_client: reqwest::Client,
    config: ModelConfig,
}

impl GeminiClient {
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("itinerary-pdf-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl ItineraryModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ModelError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Requesting completion from model '{}'", self.config.model);
        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;
        if !status.is_success() {
            warn!("Model service responded with status {}", status);
            return Err(ModelError::Upstream {
                status: status.as_u16(),
                body: payload,
            });
        }

        extract_completion(&payload)
    }
}

/// Pull the concatenated text parts of the first candidate out of a
/// `generateContent` response body.
fn extract_completion(payload: &str) -> Result<String, ModelError> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(payload).map_err(ModelError::Decode)?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ModelError::EmptyCompletion);
    }
    Ok(text)
}

/// Crude de-markdown pass over a model completion: drops every `*`, `#` and
/// `-`, then trims the result.
///
/// Hyphens inside words and numbers are removed too.
pub fn strip_markdown(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '*' | '#' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Build the prompt for `request`, ask the model and clean up its answer.
pub async fn generate_itinerary(
    model: &dyn ItineraryModel,
    request: &TripRequest,
    duration: i64,
) -> Result<String, ModelError> {
    let prompt = build_prompt(request, duration);
    let raw = model.complete(&prompt).await?;
    Ok(strip_markdown(&raw))
}
