use crate::config::GeminiConfig;
use crate::error::ProxyError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Model used when the caller does not override it.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated. None when the model
    /// returned no candidates at all, e.g. a blocked prompt.
    fn first_candidate_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
    }
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Thin client over the generateContent REST endpoint. One request per
/// invocation, no retries.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
        }
    }

    /// Sends one prompt and returns the raw text of the first candidate.
    /// The text carries no structural guarantee.
    pub async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, ProxyError> {
        let url = format!("{}/models/{}:generateContent", API_BASE, model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!("Gemini request: model {}", model);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Gemini error body: {}", body);
            return Err(ProxyError::Downstream(format!(
                "Gemini request failed with status {}",
                status
            )));
        }

        let response: GenerateContentResponse = response.json().await?;

        response
            .first_candidate_text()
            .ok_or_else(|| ProxyError::Downstream("Gemini returned no candidates".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Here "}, {"text": "you go"}], "role": "model"}},
                    {"content": {"parts": [{"text": "ignored"}], "role": "model"}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(response.first_candidate_text().unwrap(), "Here you go");
    }

    #[test]
    fn missing_candidates_yield_none() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_candidate_text().is_none());
    }

    #[test]
    fn candidate_without_parts_yields_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model"}}]}"#,
        )
        .unwrap();

        assert_eq!(response.first_candidate_text().unwrap(), "");
    }
}
