//! The HTTP server.
//!
//! Routes:
//! - `POST /detect_anger` — lexicon anger matcher
//! - `POST /sentiment` — polarity/subjectivity from the oracle
//! - `POST /chat` — stateful conversation flow
//! - `GET /health` — health check

use crate::error::ApiError;
use crate::types::{
    ChatRequest, ChatResponse, DetectAngerRequest, DetectAngerResponse, SentimentRequest,
    SentimentResponse,
};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use sentio_chat::ConversationController;
use sentio_core::{anger, CoreError, SentimentOracle};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::Instrument;
use uuid::Uuid;

/// Shared state handed to the route handlers.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ConversationController>,
    pub oracle: Arc<dyn SentimentOracle>,
    /// Language assumed when a chat request omits `lang`.
    pub default_language: String,
}

/// The gateway HTTP server.
pub struct GatewayServer {
    state: AppState,
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(
        controller: Arc<ConversationController>,
        oracle: Arc<dyn SentimentOracle>,
        host: &str,
        port: u16,
        default_language: &str,
    ) -> Self {
        Self {
            state: AppState {
                controller,
                oracle,
                default_language: default_language.to_string(),
            },
            host: host.to_string(),
            port,
        }
    }

    /// Build the router. Exposed so embedders can mount the routes
    /// without binding a socket.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/detect_anger", post(detect_anger))
            .route("/sentiment", post(sentiment))
            .route("/chat", post(chat))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.host, self.port);
        let app = Self::router(self.state);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Gateway listening on {}", addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health() -> &'static str {
    "ok"
}

/// POST /detect_anger — validate, match against the lexicon, report.
async fn detect_anger(
    Json(req): Json<DetectAngerRequest>,
) -> Result<Json<DetectAngerResponse>, ApiError> {
    let input_text = req.text.trim().to_string();
    if input_text.is_empty() {
        return Err(CoreError::EmptyText.into());
    }

    let language = req.language.to_lowercase();
    anger::validate_language(&language)?;
    anger::validate_threshold(req.confidence_threshold)?;

    let analysis = anger::analyze(&input_text, &language)?;
    let anger_detected = analysis.detected(req.confidence_threshold);

    Ok(Json(DetectAngerResponse {
        emotion: "anger",
        language,
        input_text,
        total_words: analysis.total_words,
        matching_words: analysis.matching_words.len(),
        matching_word_list: analysis.matching_words,
        intensity: analysis.intensity,
        confidence_threshold: req.confidence_threshold,
        anger_detected,
    }))
}

/// POST /sentiment — polarity/subjectivity pair from the oracle.
async fn sentiment(
    State(state): State<AppState>,
    Json(req): Json<SentimentRequest>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let text = req
        .text
        .ok_or_else(|| ApiError::BadRequest("Missing \"text\" field in request data".to_string()))?;

    let snapshot = state
        .oracle
        .snapshot(&text)
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(SentimentResponse {
        polarity: snapshot.polarity,
        subjectivity: snapshot.subjectivity,
    }))
}

/// POST /chat — one turn of the conversation flow.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.user_message.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "The \"user_message\" field is required and cannot be empty".to_string(),
        ));
    }

    let lang = req
        .lang
        .clone()
        .unwrap_or_else(|| state.default_language.clone());

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat_turn", %request_id, user_id = %req.user_id);

    let outcome = state
        .controller
        .handle_turn(&req.user_id, &req.user_message, &lang)
        .instrument(span)
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(ChatResponse {
        user_id: req.user_id,
        assistant_message: outcome.assistant_message,
        current_state: outcome.state,
        last_sentiment_score: outcome.sentiment_score,
        emotion_history: outcome.emotion_history,
    }))
}
