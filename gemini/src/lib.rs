//! Minimal Google Gemini API client.
//!
//! This crate provides a focused client for the `generateContent` endpoint:
//! - Single-shot (non-streaming) text generation
//! - System instructions and basic generation settings
//! - Typed errors for network, HTTP status and response-shape failures

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Errors that can occur when using the Gemini client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not configured")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Response contained no text: {0}")]
    EmptyResponse(String),
}

/// Gemini API client.
#[derive(Clone)]
pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl Gemini {
    /// Create a new Gemini client with the given API key.
    ///
    /// No request timeout is set; the transport defaults apply.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Create a Gemini client from the GOOGLE_API_KEY environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| Error::NoApiKey)?;
        if api_key.trim().is_empty() {
            return Err(Error::NoApiKey);
        }
        Ok(Self::new(api_key))
    }

    /// Set the default model for this client.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different API root (mock servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a generation request and return the full response.
    pub async fn complete(&self, request: Request) -> Result<Response, Error> {
        let model = request.model.clone().unwrap_or_else(|| self.model.clone());
        let api_request = build_api_request(&request);
        let headers = self.build_headers()?;

        let response = self
            .client
            .post(format!("{}/models/{model}:generateContent", self.base_url))
            .headers(headers)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        parse_response(api_response)
    }

    /// Generate text for a single user prompt.
    ///
    /// Fails with [`Error::EmptyResponse`] when the model produced no text,
    /// e.g. because the prompt was blocked.
    pub async fn generate_text(&self, prompt: impl Into<String>) -> Result<String, Error> {
        let response = self
            .complete(Request::new(vec![Content::user(prompt)]))
            .await?;

        let text = response.text();
        if text.is_empty() {
            return Err(Error::EmptyResponse(format!(
                "finish reason {:?}",
                response.finish_reason
            )));
        }
        Ok(text)
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| Error::Config(format!("Invalid API key: {e}")))?,
        );
        Ok(headers)
    }
}

fn build_api_request(request: &Request) -> ApiRequest {
    let contents = request
        .contents
        .iter()
        .map(|c| ApiContent {
            role: Some(c.role.as_str().to_string()),
            parts: c.parts.iter().map(ApiPart::from).collect(),
        })
        .collect();

    let generation_config = if request.temperature.is_some() || request.max_output_tokens.is_some()
    {
        Some(ApiGenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_output_tokens,
        })
    } else {
        None
    };

    ApiRequest {
        contents,
        system_instruction: request.system.as_ref().map(|text| ApiContent {
            role: None,
            parts: vec![ApiPart {
                text: Some(text.clone()),
            }],
        }),
        generation_config,
    }
}

fn parse_response(api_response: ApiResponse) -> Result<Response, Error> {
    let Some(candidate) = api_response.candidates.into_iter().next() else {
        let reason = api_response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(Error::EmptyResponse(reason));
    };

    let parts = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text.map(|text| Part::Text { text }))
        .collect();

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::MaxTokens,
        Some("SAFETY") => FinishReason::Safety,
        Some("RECITATION") => FinishReason::Recitation,
        Some(_) => FinishReason::Other,
    };

    let usage = api_response.usage_metadata.unwrap_or_default();

    Ok(Response {
        model_version: api_response.model_version,
        parts,
        finish_reason,
        usage: Usage {
            prompt_tokens: usage.prompt_token_count,
            candidate_tokens: usage.candidates_token_count,
        },
    })
}

// ============================================================================
// Public types
// ============================================================================

/// A generation request to send to Gemini.
#[derive(Debug, Clone)]
pub struct Request {
    pub model: Option<String>,
    pub system: Option<String>,
    pub contents: Vec<Content>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Request {
    /// Create a new request with the given conversation contents.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            model: None,
            system: None,
            contents,
            temperature: None,
            max_output_tokens: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// One turn of conversation content.
#[derive(Debug, Clone)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn with text content.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// Create a model turn with text content.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text { text: text.into() }],
        }
    }
}

/// The role of a content author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// A piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text { text: String },
}

impl Part {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
        }
    }
}

/// A generation response from Gemini (first candidate only).
#[derive(Debug, Clone)]
pub struct Response {
    pub model_version: Option<String>,
    pub parts: Vec<Part>,
    pub finish_reason: FinishReason,
    pub usage: Usage,
}

impl Response {
    /// Get all text parts concatenated.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Other,
}

/// Token usage information.
#[derive(Debug, Clone, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub candidate_tokens: u32,
}

// ============================================================================
// Internal API types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<ApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<ApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<ApiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl From<&Part> for ApiPart {
    fn from(part: &Part) -> Self {
        match part {
            Part::Text { text } => ApiPart {
                text: Some(text.clone()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<ApiPromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<ApiUsage>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = Gemini::new("test-key");
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.base_url, API_BASE);
    }

    #[test]
    fn test_client_with_model_and_base_url() {
        let client = Gemini::new("test-key")
            .with_model("gemini-2.0-pro")
            .with_base_url("http://127.0.0.1:9999/");
        assert_eq!(client.model(), "gemini-2.0-pro");
        assert_eq!(client.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_request_builder() {
        let request = Request::new(vec![Content::user("Hello")])
            .with_system("You are terse")
            .with_max_output_tokens(256)
            .with_temperature(0.4);

        assert_eq!(request.max_output_tokens, Some(256));
        assert!(request.system.is_some());
        assert_eq!(request.temperature, Some(0.4));
    }

    #[test]
    fn test_api_request_shape() {
        let request = Request::new(vec![Content::user("Hi"), Content::model("Hello")])
            .with_system("Be brief")
            .with_temperature(0.5);

        let value = serde_json::to_value(build_api_request(&request)).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Hi");
        assert_eq!(value["contents"][1]["role"], "model");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "Be brief");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["generationConfig"]["temperature"], 0.5);
        assert!(value["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn test_api_request_omits_empty_generation_config() {
        let request = Request::new(vec![Content::user("Hi")]);
        let value = serde_json::to_value(build_api_request(&request)).unwrap();
        assert!(value.get("generationConfig").is_none());
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_parse_response_joins_text_parts() {
        let api: ApiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hello, " }, { "text": "world" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 7, "candidatesTokenCount": 3 },
            "modelVersion": "gemini-2.5-flash"
        }))
        .unwrap();

        let response = parse_response(api).unwrap();
        assert_eq!(response.text(), "Hello, world");
        assert_eq!(response.finish_reason, FinishReason::Stop);
        assert_eq!(response.usage.prompt_tokens, 7);
        assert_eq!(response.usage.candidate_tokens, 3);
        assert_eq!(response.model_version.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn test_parse_response_blocked_prompt() {
        let api: ApiResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        match parse_response(api) {
            Err(Error::EmptyResponse(reason)) => assert_eq!(reason, "SAFETY"),
            other => panic!("expected EmptyResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_candidate_without_content() {
        let api: ApiResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();

        let response = parse_response(api).unwrap();
        assert!(response.text().is_empty());
        assert_eq!(response.finish_reason, FinishReason::Safety);
    }
}
