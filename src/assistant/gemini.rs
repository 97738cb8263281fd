// src/assistant/gemini.rs

use crate::assistant::{AssistantError, LanguageModel};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini `generateContent` over blocking HTTP.
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    client: Client,
}

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AssistantError::RequestFailed(e.to_string()))?;

        Ok(Self {
            api_key,
            model: model.into(),
            client,
        })
    }
}

impl LanguageModel for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<Option<String>, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::NotConfigured)?;

        let payload = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(format!("{API_BASE}/{}:generateContent", self.model))
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .map_err(|e| AssistantError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(AssistantError::ApiError(format!("{status} - {body}")));
        }

        let parsed: GeminiResponse = resp
            .json()
            .map_err(|e| AssistantError::ApiError(format!("unexpected response: {e}")))?;

        Ok(first_text(parsed))
    }
}

/// Concatenated text parts of the first candidate, if any.
fn first_text(resp: GeminiResponse) -> Option<String> {
    let content = resp.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    (!text.trim().is_empty()).then_some(text)
}
