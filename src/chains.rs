use crate::config::Config;
use crate::types::{
    ProgressSummaryRequest, ProgressSummaryResponse, StoryGenerationRequest,
    StoryGenerationResponse,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use thiserror::Error;

/// Failure surfaced by a chain invocation. Mapped to an HTTP 500 with a
/// per-endpoint prefix at the handler boundary.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("model provider error: {0}")]
    Provider(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed model output: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait StoryChain: Send + Sync {
    async fn run(
        &self,
        request: &StoryGenerationRequest,
    ) -> Result<StoryGenerationResponse, ChainError>;
}

#[async_trait]
pub trait ProgressChain: Send + Sync {
    async fn run(
        &self,
        request: &ProgressSummaryRequest,
    ) -> Result<ProgressSummaryResponse, ChainError>;
}

static STORY_PROMPT: Lazy<String> = Lazy::new(|| {
    [
        "You are an educational storyteller for neurodivergent learners.",
        "Write a short personalized story that teaches the given topic.",
        "Respond with a single JSON object and nothing else, using exactly",
        "these fields: \"title\" (string), \"story\" (string),",
        "\"learning_points\" (array of strings).",
    ]
    .join(" ")
});

static PROGRESS_PROMPT: Lazy<String> = Lazy::new(|| {
    [
        "You are an encouraging learning coach writing for parents.",
        "Summarize the learner's recent progress from the given data.",
        "Respond with a single JSON object and nothing else, using exactly",
        "these fields: \"summary\" (string), \"strengths\" (array of",
        "strings), \"recommendations\" (array of strings).",
    ]
    .join(" ")
});

/// Shared plumbing for the two LLM-backed chains: send a system + user
/// message pair to an OpenAI-compatible chat completions endpoint and
/// return the first choice's message content.
async fn chat_completion(
    client: &Client,
    config: &Config,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, ChainError> {
    let request_body = serde_json::json!({
        "model": config.llm_model,
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": user_prompt }
        ],
        "temperature": config.temperature,
        "max_tokens": config.max_tokens,
        "response_format": { "type": "json_object" },
        "stream": false
    });

    let mut req = client
        .post(format!("{}/v1/chat/completions", config.llm_api_url))
        .json(&request_body);
    if !config.llm_api_key.is_empty() {
        req = req.bearer_auth(&config.llm_api_key);
    }

    let resp = req
        .send()
        .await
        .map_err(|e| ChainError::Network(format!("failed to reach model provider: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let error_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error body".into());
        log::error!("Model provider returned HTTP {status}: {error_text}");
        return Err(ChainError::Provider(format!(
            "model provider returned HTTP {status}"
        )));
    }

    let json = resp
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ChainError::Malformed(format!("response body is not JSON: {e}")))?;

    let content = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            ChainError::Malformed("missing choices[0].message.content in provider response".into())
        })?;

    Ok(content.to_string())
}

fn parse_model_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ChainError> {
    serde_json::from_str(content)
        .map_err(|e| ChainError::Malformed(format!("model output did not match schema: {e}")))
}

pub struct LlmStoryChain {
    client: Client,
    config: Config,
}

impl LlmStoryChain {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    fn user_prompt(request: &StoryGenerationRequest) -> String {
        let mut prompt = format!(
            "Child: {} (age {}). Topic to teach: {}. Interests: {}.",
            request.child_name,
            request.age,
            request.topic,
            request.interests.join(", "),
        );
        if let Some(style) = &request.learning_style {
            prompt.push_str(&format!(" Learning style: {style}."));
        }
        if let Some(level) = &request.reading_level {
            prompt.push_str(&format!(" Reading level: {level}."));
        }
        prompt
    }
}

#[async_trait]
impl StoryChain for LlmStoryChain {
    async fn run(
        &self,
        request: &StoryGenerationRequest,
    ) -> Result<StoryGenerationResponse, ChainError> {
        let user_prompt = Self::user_prompt(request);
        log::debug!("Story prompt ({} chars): {user_prompt}", user_prompt.len());
        let content = chat_completion(&self.client, &self.config, &STORY_PROMPT, &user_prompt).await?;
        parse_model_json(&content)
    }
}

pub struct LlmProgressChain {
    client: Client,
    config: Config,
}

impl LlmProgressChain {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    fn user_prompt(request: &ProgressSummaryRequest) -> String {
        let mut prompt = format!(
            "Child: {}. Timeframe: {}. Stories completed: {}. Topics covered: {}.",
            request.child_name,
            request.timeframe,
            request.stories_completed,
            request.topics_covered.join(", "),
        );
        if let Some(notes) = &request.notes {
            prompt.push_str(&format!(" Educator notes: {notes}"));
        }
        prompt
    }
}

#[async_trait]
impl ProgressChain for LlmProgressChain {
    async fn run(
        &self,
        request: &ProgressSummaryRequest,
    ) -> Result<ProgressSummaryResponse, ChainError> {
        let user_prompt = Self::user_prompt(request);
        log::debug!(
            "Progress prompt ({} chars): {user_prompt}",
            user_prompt.len()
        );
        let content =
            chat_completion(&self.client, &self.config, &PROGRESS_PROMPT, &user_prompt).await?;
        parse_model_json(&content)
    }
}
