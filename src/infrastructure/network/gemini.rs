use crate::domain::error::SqlChatError;
use crate::domain::traits::ModelCaller;
use crate::infrastructure::config::GeminiConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

// generateContent request/response structures
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(client: Client, config: &GeminiConfig, api_key: Option<String>) -> Result<Self, SqlChatError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SqlChatError::Config("Missing GEMINI_API_KEY".to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl ModelCaller for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, SqlChatError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SqlChatError::ModelCall(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| SqlChatError::ModelCall(e.to_string()))?;

        if !status.is_success() {
            return Err(SqlChatError::ModelCall(describe_error(status.as_u16(), &raw)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&raw)?;
        let text = response_text(parsed);
        debug!("Gemini returned {} chars", text.len());
        Ok(text)
    }
}

/// Concatenated text parts of the first candidate; empty when there is none.
fn response_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn describe_error(status: u16, raw: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(raw) {
        Ok(envelope) => {
            let reasons: Vec<String> = envelope
                .error
                .details
                .into_iter()
                .filter_map(|d| d.reason)
                .collect();
            let mut msg = format!(
                "Gemini API Error {} {}: {}",
                status, envelope.error.status, envelope.error.message
            );
            if !reasons.is_empty() {
                msg.push_str(&format!(" ({})", reasons.join(", ")));
            }
            msg
        }
        Err(_) => format!("Gemini API Error {}: {}", status, raw.trim()),
    }
}
