use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::MeetingSummary;
use crate::infrastructure::observability::text_preview;

const SYSTEM_PROMPT: &str = "You are an expert meeting summarizer. \
    Given a raw meeting transcript, produce concise, actionable outputs. \
    Return JSON with fields: summary (string), decisions (string[]), action_items (string[]).";

// Low temperature for determinism across identical transcripts.
const TEMPERATURE: f32 = 0.2;

/// Remote summarization over the OpenAI chat completions API.
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, base_url: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<MeetingSummary, SummarizerError> {
        let user_prompt = format!(
            "Summarize this meeting transcript into key decisions and action items.\n\
             Be concise but capture important details.\n\
             Transcript:\n{}",
            transcript
        );

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = %self.model, transcript_chars = transcript.len(), "Requesting remote summarization");

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SummarizerError::InvalidResponse("no choices returned".to_string()))?;
        let content = content.trim();

        tracing::debug!(reply = %text_preview(content), "Remote summarization completed");

        Ok(normalize_model_reply(content))
    }
}

/// Single normalization step applied to the model's reply.
///
/// The model is asked for a JSON object but may misbehave; nothing here is
/// allowed to fail. Non-JSON (or non-object) content becomes the summary
/// text wholesale; `decisions`/`action_items` that are not string arrays are
/// coerced to empty lists.
fn normalize_model_reply(content: &str) -> MeetingSummary {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(content) else {
        return MeetingSummary {
            summary: content.to_string(),
            decisions: Vec::new(),
            action_items: Vec::new(),
        };
    };

    let summary = fields
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    MeetingSummary {
        summary,
        decisions: string_items(fields.get("decisions")),
        action_items: string_items(fields.get("action_items")),
    }
}

fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
