//! OpenAI-compatible chat-completions client and response helpers.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};

use crate::app::logging::{LogLevel, Logger, mask_key};
use crate::config::Settings;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::error::{ConfigError, ProviderError};

/// One system prompt plus one user message.
#[derive(Clone, Copy, Debug)]
pub struct CompletionRequest<'a> {
    pub system_prompt: &'a str,
    pub user_text: &'a str,
    /// Overrides the client's model for this call.
    pub model: Option<&'a str>,
}

/// Text extracted from a provider reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionReply {
    pub text: String,
}

/// Anything that can turn a [`CompletionRequest`] into reply text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<CompletionReply, ProviderError>;
}

/// Thin wrapper around an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    pub model: String,
    pub base_url: String,
    api_key: String,
    http_client: HttpClient,
    logger: Logger,
}

impl OpenAiClient {
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let mut builder =
            HttpClient::builder().user_agent(format!("{APP_NAME}/{APP_VERSION}"));
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ConfigError::HttpClient)?;

        let logger = Logger::new(settings.log_level);
        logger.log(
            LogLevel::Info,
            format!(
                "Provider {} model {} key {}",
                settings.base_url,
                settings.model,
                mask_key(&settings.api_key)
            ),
        );

        Ok(OpenAiClient {
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            http_client,
            logger,
        })
    }

    async fn request(&self, path: &str, body: Value) -> Result<Value, ProviderError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status { status, body: text });
        }
        serde_json::from_str(&text)
            .map_err(|err| ProviderError::malformed(format!("response is not JSON: {err}")))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<CompletionReply, ProviderError> {
        let model = request.model.unwrap_or(&self.model);
        let body = chat_body(model, request);

        let started = Instant::now();
        let response = self.request("chat/completions", body).await?;
        self.logger.log(
            LogLevel::Debug,
            format!(
                "chat/completions ({model}) answered in {} ms",
                started.elapsed().as_millis()
            ),
        );

        let text = extract_reply_text(&response)?;
        Ok(CompletionReply { text })
    }
}

/// Build the JSON body for a two-message chat completion.
pub fn chat_body(model: &str, request: &CompletionRequest<'_>) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": request.system_prompt },
            { "role": "user", "content": request.user_text },
        ],
    })
}

/// Pull `choices[0].message.content` out of a chat-completion response.
///
/// Content may be a plain string or an array of `{ "type": "text", "text": .. }`
/// parts, which are joined in order.
pub fn extract_reply_text(response: &Value) -> Result<String, ProviderError> {
    let message = response
        .get("choices")
        .and_then(|v| v.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .ok_or_else(|| ProviderError::malformed("no choices[0].message in response"))?;

    match message.get("content") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Array(parts)) => {
            let texts: Vec<&str> = parts
                .iter()
                .filter(|part| {
                    part.get("type")
                        .and_then(|v| v.as_str())
                        .is_none_or(|kind| kind == "text")
                })
                .filter_map(|part| part.get("text").and_then(|v| v.as_str()))
                .collect();
            if texts.is_empty() {
                return Err(ProviderError::malformed("content array has no text parts"));
            }
            Ok(texts.join(""))
        }
        _ => {
            let reason = message
                .get("refusal")
                .and_then(|v| v.as_str())
                .map(|refusal| format!("model refused: {refusal}"))
                .unwrap_or_else(|| "message has no text content".to_string());
            Err(ProviderError::malformed(reason))
        }
    }
}
