use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryGenerationRequest {
    pub child_name: String,
    pub age: u8,
    pub interests: Vec<String>,
    pub topic: String,
    pub learning_style: Option<String>,
    pub reading_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryGenerationResponse {
    pub title: String,
    pub story: String,
    pub learning_points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummaryRequest {
    pub child_name: String,
    pub timeframe: String,
    pub topics_covered: Vec<String>,
    pub stories_completed: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummaryResponse {
    pub summary: String,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Uniform error body: `{"detail": "<prefix><message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
