//! End-to-end flow tests: real keyword oracle, real in-memory store.

use sentio_chat::{ConversationController, MemorySessionStore, SessionStore};
use sentio_core::sentiment::KeywordOracle;
use sentio_core::{ConversationState, SentimentOracle};
use std::sync::Arc;

fn build() -> (Arc<MemorySessionStore>, ConversationController) {
    let store = Arc::new(MemorySessionStore::new(3600));
    let oracle: Arc<dyn SentimentOracle> = Arc::new(KeywordOracle);
    let controller = ConversationController::new(store.clone(), oracle);
    (store, controller)
}

#[tokio::test]
async fn test_full_cycle_with_keyword_oracle() {
    let (_store, controller) = build();

    let t1 = controller
        .handle_turn("u1", "I feel terrible and sad today", "en")
        .await
        .unwrap();
    assert_eq!(t1.state, ConversationState::End);
    let score = t1.sentiment_score.unwrap();
    assert!(score < 0.0, "negative text should score below zero: {score}");

    let t2 = controller
        .handle_turn("u1", "it keeps getting worse", "en")
        .await
        .unwrap();
    assert_eq!(t2.state, ConversationState::Feedback);

    let t3 = controller.handle_turn("u1", "👍", "en").await.unwrap();
    assert_eq!(t3.state, ConversationState::End);
    assert!(t3.sentiment_score.is_none());

    // The cycle continues: End → Feedback again.
    let t4 = controller
        .handle_turn("u1", "thanks, that helped", "en")
        .await
        .unwrap();
    assert_eq!(t4.state, ConversationState::Feedback);
    assert_eq!(t4.emotion_history.len(), 3);
}

#[tokio::test]
async fn test_emotion_history_tracks_scored_turns_only() {
    let (store, controller) = build();

    controller.handle_turn("u1", "hello", "en").await.unwrap();
    controller.handle_turn("u1", "hello again", "en").await.unwrap();
    controller.handle_turn("u1", "👎", "en").await.unwrap();

    let handle = store.checkout("u1").await.unwrap();
    let session = handle.lock().await;
    assert_eq!(session.history.len(), 3);
    assert_eq!(session.emotion_history.len(), 2);
    assert_eq!(session.feedback.len(), 1);
}

#[tokio::test]
async fn test_expired_session_restarts_the_flow() {
    let store = Arc::new(MemorySessionStore::new(1));
    let oracle: Arc<dyn SentimentOracle> = Arc::new(KeywordOracle);
    let controller = ConversationController::new(store.clone(), oracle);

    controller.handle_turn("u1", "hello", "en").await.unwrap();

    // Age the session past the 1s TTL.
    {
        let handle = store.checkout("u1").await.unwrap();
        handle.lock().await.last_active -= 60;
    }

    // The next turn gets a fresh session back in the opening state.
    let t = controller.handle_turn("u1", "hello again", "en").await.unwrap();
    assert_eq!(t.state, ConversationState::End);
    assert_eq!(t.emotion_history.len(), 1);
}

#[tokio::test]
async fn test_multilingual_replies() {
    let (_store, controller) = build();

    let t = controller.handle_turn("zh_user", "你好", "zh").await.unwrap();
    assert_eq!(t.state, ConversationState::End);
    // A zh turn should produce a zh table entry, not the English one.
    assert!(t.assistant_message.contains("今天感觉怎么样"));
}
