//! Per-user conversation session model.

use serde::{Deserialize, Serialize};

/// Position in the conversation flow.
///
/// Exactly three states exist: the flow cycles End → Feedback → End
/// indefinitely after the opening turn; nothing is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Init,
    End,
    Feedback,
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Init => "init",
            ConversationState::End => "end",
            ConversationState::Feedback => "feedback",
        }
    }
}

/// One scored input in a session's emotional trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSample {
    pub input: String,
    pub score: f64,
}

/// Thumbs-up/down reaction recorded in the feedback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackToken {
    ThumbsUp,
    ThumbsDown,
}

impl FeedbackToken {
    /// Parse a chat message as a feedback token, if it is one.
    pub fn from_message(message: &str) -> Option<Self> {
        match message.trim() {
            "👍" => Some(FeedbackToken::ThumbsUp),
            "👎" => Some(FeedbackToken::ThumbsDown),
            _ => None,
        }
    }
}

/// Mutable state for one user, created on their first message.
///
/// `history` only ever grows within a session's lifetime. The store owns
/// expiry; `last_active` is the Unix timestamp it judges idleness by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub state: ConversationState,
    /// Reserved relationship descriptor; not consulted by the flow.
    pub relationship: Option<String>,
    /// Reserved coping-method descriptor; not consulted by the flow.
    pub method: Option<String>,
    /// (input, output) pairs, appended on every turn.
    pub history: Vec<(String, String)>,
    /// Scored inputs, appended on every sentiment-scored turn.
    pub emotion_history: Vec<EmotionSample>,
    pub feedback: Vec<FeedbackToken>,
    pub last_active: i64,
}

impl Session {
    pub fn new(now: i64) -> Self {
        Self {
            state: ConversationState::Init,
            relationship: None,
            method: None,
            history: Vec::new(),
            emotion_history: Vec::new(),
            feedback: Vec::new(),
            last_active: now,
        }
    }

    pub fn touch(&mut self, now: i64) {
        self.last_active = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_init() {
        let session = Session::new(0);
        assert_eq!(session.state, ConversationState::Init);
        assert!(session.history.is_empty());
        assert!(session.emotion_history.is_empty());
        assert!(session.feedback.is_empty());
    }

    #[test]
    fn test_feedback_token_parsing() {
        assert_eq!(
            FeedbackToken::from_message("👍"),
            Some(FeedbackToken::ThumbsUp)
        );
        assert_eq!(
            FeedbackToken::from_message("  👎  "),
            Some(FeedbackToken::ThumbsDown)
        );
        assert_eq!(FeedbackToken::from_message("thanks"), None);
        assert_eq!(FeedbackToken::from_message(""), None);
    }

    #[test]
    fn test_state_serializes_snake_case() {
        let json = serde_json::to_string(&ConversationState::Feedback).unwrap();
        assert_eq!(json, "\"feedback\"");
        assert_eq!(ConversationState::Feedback.as_str(), "feedback");
    }
}
