//! Wire types for the three POST endpoints.

use sentio_core::{ConversationState, EmotionSample};
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

fn default_threshold() -> f64 {
    0.5
}

fn default_user_id() -> String {
    "default_user".to_string()
}

// ============================================================================
// /detect_anger
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct DetectAngerRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_threshold")]
    pub confidence_threshold: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectAngerResponse {
    pub emotion: &'static str,
    pub language: String,
    pub input_text: String,
    pub total_words: usize,
    pub matching_words: usize,
    pub matching_word_list: Vec<String>,
    pub intensity: f64,
    pub confidence_threshold: f64,
    pub anger_detected: bool,
}

// ============================================================================
// /sentiment
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentResponse {
    pub polarity: f64,
    pub subjectivity: f64,
}

// ============================================================================
// /chat
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub user_message: String,
    /// Absent means "use the server's configured default language".
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub user_id: String,
    pub assistant_message: String,
    pub current_state: ConversationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sentiment_score: Option<f64>,
    pub emotion_history: Vec<EmotionSample>,
}
