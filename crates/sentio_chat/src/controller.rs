//! The conversation state machine.
//!
//! One turn: check out the session under its per-user lock, branch on
//! the current state, score sentiment where the branch calls for it,
//! pick a canned response, transition, record history.

use sentio_core::responses::{self, resolve};
use sentio_core::{
    ConversationState, EmotionSample, FeedbackToken, SentimentCategory, SentimentOracle,
};
use std::sync::Arc;

use crate::store::SessionStore;

/// What one chat turn produced, for the caller to serialize.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub assistant_message: String,
    pub state: ConversationState,
    /// Signed sentiment score for this turn; absent on feedback-branch
    /// turns, where nothing is scored.
    pub sentiment_score: Option<f64>,
    /// Full emotional trajectory of the session so far.
    pub emotion_history: Vec<EmotionSample>,
}

/// Drives the Init/End/Feedback flow over an explicit store and oracle.
pub struct ConversationController {
    store: Arc<dyn SessionStore>,
    oracle: Arc<dyn SentimentOracle>,
}

impl ConversationController {
    pub fn new(store: Arc<dyn SessionStore>, oracle: Arc<dyn SentimentOracle>) -> Self {
        Self { store, oracle }
    }

    /// Handle one inbound message for `user_id`.
    ///
    /// The session mutex is held for the whole turn, so concurrent
    /// messages from one user are applied in sequence.
    pub async fn handle_turn(
        &self,
        user_id: &str,
        message: &str,
        lang: &str,
    ) -> anyhow::Result<TurnOutcome> {
        let handle = self.store.checkout(user_id).await?;
        let mut session = handle.lock().await;

        let (reply, score) = match session.state {
            ConversationState::Init => {
                let score = self.score(message).await?;
                let category = SentimentCategory::from_score(score);
                let reply = resolve(ConversationState::Init, lang, category).to_string();
                session.state = ConversationState::End;
                (reply, Some(score))
            }
            ConversationState::End => {
                let score = self.score(message).await?;
                let category = SentimentCategory::from_score(score);
                let base = resolve(ConversationState::End, lang, category);
                let reply = format!("{}{}", base, responses::feedback_prompt(lang));
                session.state = ConversationState::Feedback;
                (reply, Some(score))
            }
            ConversationState::Feedback => match FeedbackToken::from_message(message) {
                Some(token) => {
                    session.feedback.push(token);
                    session.state = ConversationState::End;
                    (responses::feedback_thanks(lang).to_string(), None)
                }
                None => (responses::feedback_reprompt(lang).to_string(), None),
            },
        };

        if let Some(score) = score {
            session.emotion_history.push(EmotionSample {
                input: message.to_string(),
                score,
            });
        }
        session
            .history
            .push((message.to_string(), reply.clone()));
        session.touch(chrono::Utc::now().timestamp());

        tracing::debug!(
            user_id,
            state = session.state.as_str(),
            score = ?score,
            "Chat turn handled"
        );

        Ok(TurnOutcome {
            assistant_message: reply,
            state: session.state,
            sentiment_score: score,
            emotion_history: session.emotion_history.clone(),
        })
    }

    async fn score(&self, message: &str) -> anyhow::Result<f64> {
        let reading = self.oracle.assess(message).await?;
        Ok(reading.signed_score())
    }
}
