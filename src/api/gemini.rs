use crate::api::{GenerationRequest, TextGenerator};
use crate::error::{Result, StoryboardError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::info;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }

    /// 拼接首个候选回复中的全部文本片段，可能为空
    fn extract_text(response: &GenerateContentResponse) -> String {
        response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// 向 Gemini 发起一次 generateContent 调用
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String> {
        info!("Calling Gemini generateContent with {}...", request.model);

        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.source_text }]
                }
            ],
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "generationConfig": {
                "temperature": request.temperature
            }
        });

        let url = format!(
            "{}/{}:generateContent",
            GEMINI_API_BASE,
            request.model.as_str()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(StoryboardError::ApiError(format!(
                "Gemini API error: {}",
                error_text
            )));
        }

        let response_json: GenerateContentResponse = response.json().await?;
        Ok(Self::extract_text(&response_json))
    }
}
