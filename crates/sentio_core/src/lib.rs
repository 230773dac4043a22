pub mod anger;
pub mod config;
pub mod error;
pub mod responses;
pub mod sentiment;
pub mod session;

pub use config::SentioConfig;
pub use error::CoreError;
pub use sentiment::{SentimentCategory, SentimentLabel, SentimentReading, SentimentSnapshot};
pub use session::{ConversationState, EmotionSample, FeedbackToken, Session};

use async_trait::async_trait;

/// Scores the emotional tone of a piece of text.
///
/// The controller and the `/sentiment` endpoint only depend on this
/// contract, not on how the score is produced. The built-in
/// [`sentiment::KeywordOracle`] is a keyword stand-in; a real deployment
/// would put an ML classifier behind the same trait.
#[async_trait]
pub trait SentimentOracle: Send + Sync {
    /// Classify `text` into a label plus a confidence in `[0, 1]`.
    async fn assess(&self, text: &str) -> anyhow::Result<SentimentReading>;

    /// Raw polarity/subjectivity pair, as exposed by `/sentiment`.
    async fn snapshot(&self, text: &str) -> anyhow::Result<SentimentSnapshot>;
}
