//! Keyword-based multilingual sentiment scoring and score banding.
//!
//! The word lists are a deliberate stand-in for an ML classifier; the
//! rest of the system only sees the [`crate::SentimentOracle`] contract,
//! so swapping in a real model changes nothing downstream.

use crate::SentimentOracle;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const POSITIVE: &[&str] = &[
    "happy", "glad", "great", "good", "love", "thanks", "thank", "wonderful", "nice",
    "开心", "高兴", "喜欢", "爱", "棒", "好", "谢谢", "感谢",
    "嬉しい", "楽しい", "好き", "ありがとう",
    "😊", "❤️", "👍",
];

const NEGATIVE: &[&str] = &[
    "sad", "bad", "hate", "awful", "terrible", "angry", "upset", "annoyed", "worst",
    "难过", "伤心", "讨厌", "恨", "糟糕", "差", "烦", "生气",
    "悲しい", "嫌い", "辛い", "怒り",
    "😢", "😡", "💔",
];

/// Discrete label an oracle assigns to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

/// Label plus confidence, the full output of one oracle call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl SentimentReading {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self {
            label,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Collapse label + confidence into a signed score in `[-1, 1]`:
    /// negative → −confidence, neutral → 0.0, positive → +confidence.
    pub fn signed_score(&self) -> f64 {
        match self.label {
            SentimentLabel::Negative => -self.confidence,
            SentimentLabel::Neutral => 0.0,
            SentimentLabel::Positive => self.confidence,
        }
    }
}

/// Polarity/subjectivity pair for the `/sentiment` endpoint.
///
/// Polarity is in `[-1, 1]`, subjectivity in `[0, 1]` (fraction of
/// opinion-bearing content).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Banding of a signed score into four named categories.
///
/// The bands partition `[-1, 1]` with no overlap: both `-0.5` and the
/// whole of `[0, 0.5]` land on the lower-energy side of each boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
}

impl SentimentCategory {
    pub const ALL: [SentimentCategory; 4] = [
        SentimentCategory::VeryNegative,
        SentimentCategory::Negative,
        SentimentCategory::Neutral,
        SentimentCategory::Positive,
    ];

    pub fn from_score(score: f64) -> Self {
        if score <= -0.5 {
            SentimentCategory::VeryNegative
        } else if score < 0.0 {
            SentimentCategory::Negative
        } else if score <= 0.5 {
            SentimentCategory::Neutral
        } else {
            SentimentCategory::Positive
        }
    }
}

/// Analyze text for polarity and subjectivity.
///
/// Keyword hits are counted by substring containment so that unspaced
/// scripts (Chinese, Japanese) work without a tokenizer. Polarity uses
/// add-one smoothing to stay strictly inside `(-1, 1)` and to damp
/// single-hit texts.
pub fn analyze(text: &str) -> SentimentSnapshot {
    let pos = POSITIVE.iter().filter(|w| text.contains(*w)).count() as f64;
    let neg = NEGATIVE.iter().filter(|w| text.contains(*w)).count() as f64;

    let polarity = (pos - neg) / (pos + neg + 1.0);

    let total_tokens = text.split_whitespace().count() as f64;
    let subjectivity = if total_tokens > 0.0 {
        ((pos + neg) / total_tokens).clamp(0.0, 1.0)
    } else {
        0.0
    };

    SentimentSnapshot {
        polarity,
        subjectivity,
    }
}

/// Keyword oracle: the default [`SentimentOracle`] implementation.
///
/// Case-folds the text once, then derives the label from the polarity
/// sign and the confidence from its magnitude.
#[derive(Debug, Clone, Default)]
pub struct KeywordOracle;

impl KeywordOracle {
    pub fn reading_for(text: &str) -> SentimentReading {
        let snapshot = analyze(&text.to_lowercase());
        let label = if snapshot.polarity < 0.0 {
            SentimentLabel::Negative
        } else if snapshot.polarity > 0.0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        };
        SentimentReading::new(label, snapshot.polarity.abs())
    }
}

#[async_trait]
impl SentimentOracle for KeywordOracle {
    async fn assess(&self, text: &str) -> anyhow::Result<SentimentReading> {
        Ok(Self::reading_for(text))
    }

    async fn snapshot(&self, text: &str) -> anyhow::Result<SentimentSnapshot> {
        Ok(analyze(&text.to_lowercase()))
    }
}
