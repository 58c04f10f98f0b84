use anyhow::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::engine::prompt_builder::SessionPrompt;

const COMPLETIONS_URL: &str = "http://localhost:1234/v1/chat/completions";
const MODELS_URL: &str = "http://localhost:1234/v1/models";
const MODEL: &str = "local-model";
const TEMPERATURE: f32 = 1.0;

/// The generative text collaborator: one prompt in, one raw string out.
///
/// The engine only sees this seam, so tests substitute a scripted
/// responder and never touch the network.
pub trait TextService: Send {
    fn generate(&self, prompt: &SessionPrompt) -> Result<String>;
}

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: String,
}

/// Blocking client for an OpenAI-compatible local endpoint (LM Studio).
pub struct LmStudioClient {
    client: Client,
}

impl LmStudioClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for LmStudioClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TextService for LmStudioClient {
    fn generate(&self, prompt: &SessionPrompt) -> Result<String> {
        let req = ChatCompletionRequest {
            model: MODEL.into(),
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompt.user.clone(),
                },
            ],
        };

        let resp = self
            .client
            .post(COMPLETIONS_URL)
            .json(&req)
            .send()?
            .json::<ChatCompletionResponse>()?;

        resp.choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("completion response had no choices"))
    }
}

pub fn test_connection() -> Result<String> {
    let client = Client::new();

    let resp: serde_json::Value = client.get(MODELS_URL).send()?.json()?;

    Ok(format!(
        "Connected ({} models available)",
        resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
    ))
}
