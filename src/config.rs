use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub llm_api_url: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub cors_origins: Vec<String>,
    pub cors_allow_credentials: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".into())
                .parse()
                .unwrap_or(8000),
            llm_api_url: env::var("LLM_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            llm_api_key: env::var("LLM_API_KEY").unwrap_or_default(),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
            temperature: env::var("TEMPERATURE")
                .unwrap_or_else(|_| "0.7".into())
                .parse()
                .unwrap_or(0.7),
            max_tokens: env::var("MAX_TOKENS")
                .unwrap_or_else(|_| "1024".into())
                .parse()
                .unwrap_or(1024),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            cors_allow_credentials: env::var("CORS_ALLOW_CREDENTIALS")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
        }
    }

    /// A single `*` entry opts in to the permissive any-origin mode.
    pub fn cors_allow_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}
