//! Mistral chat-completions client: auth preflight and article generation.
//!
//! One client per run. The preflight fails fast on bad credentials before any
//! generation tokens are spent; generation asks for the whole article in a
//! single user message. There are no retries: a failed call fails the run.

use crate::error::{BotError, BotResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout for the connectivity and auth preflight.
const AUTH_CHECK_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for the article generation call.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(180);
/// Sampling temperature for article generation.
const GENERATION_TEMPERATURE: f32 = 0.7;
/// Token budget, sized for an article of roughly 1200 French words.
const GENERATION_MAX_TOKENS: u32 = 2000;

// Mistral request/response (OpenAI-compatible wire format)
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Mistral client bound to one API key, model and endpoint.
pub struct MistralClient {
    api_key: String,
    model: String,
    api_url: String,
    client: reqwest::Client,
}

impl MistralClient {
    pub fn new(api_key: &str, model: &str, api_url: &str) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            model: model.to_string(),
            api_url: api_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Verify the API key and model before spending the generation budget.
    ///
    /// A 401 is an authentication failure; any other non-2xx status or a
    /// network error is fatal too. A 2xx whose body lacks the expected
    /// `choices` field only logs a warning, since the credentials are proven.
    pub async fn check_auth(&self) -> BotResult<()> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Test de connexion.".to_string(),
            }],
            temperature: None,
            max_tokens: None,
        };

        tracing::info!(model = %self.model, "Checking Mistral API authentication");
        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(AUTH_CHECK_TIMEOUT)
            .send()
            .await
            .map_err(|e| BotError::GenerationAuth(format!("connection test failed: {e}")))?;

        let status = res.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BotError::GenerationAuth(
                "401 Unauthorized: check MISTRAL_API_KEY and its permissions".to_string(),
            ));
        }
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(BotError::GenerationAuth(format!(
                "Mistral API error {status}: {body}"
            )));
        }

        match res.json::<serde_json::Value>().await {
            Ok(value) if value.get("choices").is_none() => {
                tracing::warn!("Auth probe succeeded but the response has no 'choices' field");
            }
            Ok(_) => tracing::info!("Mistral authentication OK, model reachable"),
            Err(e) => {
                tracing::warn!(error = %e, "Auth probe succeeded but the body is not valid JSON");
            }
        }
        Ok(())
    }

    /// Generate the article for `prompt`. Returns the trimmed raw text.
    pub async fn generate_article(&self, prompt: &str) -> BotResult<String> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(GENERATION_TEMPERATURE),
            max_tokens: Some(GENERATION_MAX_TOKENS),
        };

        tracing::info!(model = %self.model, "Requesting article generation");
        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(GENERATION_TIMEOUT)
            .send()
            .await
            .map_err(|e| BotError::Generation(format!("generation request failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(BotError::Generation(format!(
                "Mistral API error {status}: {body}"
            )));
        }

        let parsed: ChatResponse = res
            .json()
            .await
            .map_err(|e| BotError::GenerationResponse(format!("response parse failed: {e}")))?;

        let content = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| {
                BotError::GenerationResponse("response carries no completion choice".to_string())
            })?;

        tracing::info!(chars = content.len(), "Received generated article");
        Ok(content)
    }
}
