//! Gemini REST client (`models/{model}:generateContent`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{CompletionClient, CompletionRequest, LlmError, ToolGrant};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini generateContent endpoint.
///
/// Authentication uses the `x-goog-api-key` header. Each call is a fresh
/// session: the request carries exactly one user message.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

fn build_request(request: &CompletionRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: SystemInstruction {
            parts: vec![Part {
                text: Some(request.system_instruction.clone()),
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(request.user_message.clone()),
            }],
        }],
        tools: request.tools.iter().map(tool_declaration).collect(),
    }
}

fn tool_declaration(grant: &ToolGrant) -> Value {
    match grant {
        ToolGrant::GoogleSearch => json!({ "google_search": {} }),
    }
}

/// Collect the text of the final response: every text part of the first
/// candidate, each followed by a newline. No candidate or no text parts
/// yields an empty string.
fn collect_text(response: GenerateContentResponse) -> String {
    let mut collected = String::new();
    if let Some(content) = response.candidates.into_iter().next().and_then(|c| c.content) {
        for part in content.parts {
            if let Some(text) = part.text {
                collected.push_str(&text);
                collected.push('\n');
            }
        }
    }
    collected
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, request.model
        );
        let body = build_request(request);

        tracing::debug!(model = %request.model, tools = request.tools.len(), "calling Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = collect_text(parsed);
        if text.is_empty() {
            tracing::warn!(model = %request.model, "Gemini returned no final response text");
        }
        Ok(text)
    }
}
