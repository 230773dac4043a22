//! Property-based tests for score banding, the lexicon matcher, and
//! response resolution.
//!
//! Verifies that the category bands partition [-1, 1] exactly once, that
//! matcher output stays within documented bounds for arbitrary text, and
//! that response resolution never produces an empty string.

use proptest::prelude::*;
use sentio_core::responses::resolve;
use sentio_core::session::ConversationState;
use sentio_core::{anger, SentimentCategory};

fn arb_state() -> impl Strategy<Value = ConversationState> {
    prop_oneof![
        Just(ConversationState::Init),
        Just(ConversationState::End),
        Just(ConversationState::Feedback),
    ]
}

proptest! {
    /// Every score in [-1, 1] lands in exactly one band, and scores on
    /// the same side of every boundary agree on the band.
    #[test]
    fn category_is_total_over_score_range(score in -1.0f64..=1.0) {
        let category = SentimentCategory::from_score(score);
        let expected = if score <= -0.5 {
            SentimentCategory::VeryNegative
        } else if score < 0.0 {
            SentimentCategory::Negative
        } else if score <= 0.5 {
            SentimentCategory::Neutral
        } else {
            SentimentCategory::Positive
        };
        prop_assert_eq!(category, expected);
    }

    /// Intensity stays in [0, 1] and matches are a subset of the input
    /// tokens, for arbitrary ASCII text.
    #[test]
    fn matcher_bounds(text in "[ -~]{0,200}") {
        let analysis = anger::analyze(&text, "en").unwrap();
        prop_assert!(analysis.intensity >= 0.0);
        prop_assert!(analysis.intensity <= 1.0);

        let tokens: Vec<&str> = text.split_whitespace().collect();
        prop_assert!(analysis.matching_words.len() <= analysis.total_words);
        for word in &analysis.matching_words {
            prop_assert!(tokens.contains(&word.as_str()));
        }
    }

    /// The fallback chain terminates in a non-empty string for any
    /// (state, language, category) triple, including garbage languages.
    #[test]
    fn resolution_never_empty(
        state in arb_state(),
        lang in "[a-z]{0,8}",
        score in -1.0f64..=1.0,
    ) {
        let category = SentimentCategory::from_score(score);
        prop_assert!(!resolve(state, &lang, category).is_empty());
    }
}
