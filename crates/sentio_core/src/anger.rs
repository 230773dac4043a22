//! Lexicon-based anger detection.
//!
//! Tokenizes on whitespace and counts intersection with a per-language
//! trigger-word set. Intensity is the match ratio; the caller decides
//! what ratio counts as "angry" via a threshold.

use crate::error::CoreError;

const ANGER_EN: &[&str] = &["angry", "mad", "furious", "rage", "irritated", "annoyed"];
const ANGER_ZH: &[&str] = &["生气", "愤怒", "怒火", "暴怒", "恼火"];
const ANGER_JA: &[&str] = &["怒り", "イライラ", "憤怒", "激怒"];

/// Language codes with an anger lexicon, in the order error messages
/// enumerate them.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "zh", "ja"];

fn lexicon(language: &str) -> Option<&'static [&'static str]> {
    match language {
        "en" => Some(ANGER_EN),
        "zh" => Some(ANGER_ZH),
        "ja" => Some(ANGER_JA),
        _ => None,
    }
}

/// Result of matching one text against one language's lexicon.
#[derive(Debug, Clone, PartialEq)]
pub struct AngerAnalysis {
    pub total_words: usize,
    /// Matching tokens with their original casing preserved.
    pub matching_words: Vec<String>,
    /// `matches / total_words`, rounded to 4 decimals; 0 for empty input.
    pub intensity: f64,
}

impl AngerAnalysis {
    /// Whether the intensity clears the caller's threshold. Empty input
    /// is never angry, even at threshold 0.
    pub fn detected(&self, threshold: f64) -> bool {
        self.total_words > 0 && self.intensity >= threshold
    }
}

/// Fail unless `language` has a lexicon.
pub fn validate_language(language: &str) -> Result<(), CoreError> {
    if lexicon(language).is_some() {
        Ok(())
    } else {
        Err(CoreError::UnsupportedLanguage {
            code: language.to_string(),
            supported: SUPPORTED_LANGUAGES.to_vec(),
        })
    }
}

/// Fail unless `threshold` is in `[0, 1]`. NaN is rejected too.
pub fn validate_threshold(threshold: f64) -> Result<(), CoreError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(CoreError::ThresholdOutOfRange(threshold))
    }
}

/// Match `text` against the lexicon for `language`.
///
/// Tokens are case-folded for membership only; `matching_words` keeps
/// the original casing. Empty or whitespace-only text yields intensity 0
/// rather than dividing by zero.
pub fn analyze(text: &str, language: &str) -> Result<AngerAnalysis, CoreError> {
    validate_language(language)?;
    let words = lexicon(language).unwrap_or_default();

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let matching_words: Vec<String> = tokens
        .iter()
        .filter(|t| words.contains(&t.to_lowercase().as_str()))
        .map(|t| t.to_string())
        .collect();

    let total_words = tokens.len();
    let intensity = if total_words > 0 {
        round4(matching_words.len() as f64 / total_words as f64)
    } else {
        0.0
    };

    Ok(AngerAnalysis {
        total_words,
        matching_words,
        intensity,
    })
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let analysis = analyze("I am so angry and mad", "en").unwrap();
        assert_eq!(analysis.total_words, 6);
        assert_eq!(analysis.matching_words, vec!["angry", "mad"]);
        assert_eq!(analysis.intensity, 0.3333);
        assert!(analysis.detected(0.3));
        assert!(!analysis.detected(0.5));
    }

    #[test]
    fn test_casing_preserved_in_matches() {
        let analysis = analyze("FURIOUS and Mad", "en").unwrap();
        assert_eq!(analysis.matching_words, vec!["FURIOUS", "Mad"]);
    }

    #[test]
    fn test_empty_text_has_zero_intensity() {
        for text in ["", "   ", "\t\n"] {
            let analysis = analyze(text, "en").unwrap();
            assert_eq!(analysis.total_words, 0);
            assert_eq!(analysis.intensity, 0.0);
            // Never detected at any threshold, including 0.
            assert!(!analysis.detected(0.0));
            assert!(!analysis.detected(0.1));
        }
    }

    #[test]
    fn test_chinese_lexicon() {
        let analysis = analyze("我 很 生气", "zh").unwrap();
        assert_eq!(analysis.total_words, 3);
        assert_eq!(analysis.matching_words, vec!["生气"]);
    }

    #[test]
    fn test_unsupported_language() {
        let err = analyze("hello", "fr").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("fr"));
        for lang in SUPPORTED_LANGUAGES {
            assert!(msg.contains(lang), "error should enumerate {lang}");
        }
    }

    #[test]
    fn test_threshold_validation() {
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(0.5).is_ok());
        assert!(validate_threshold(1.0).is_ok());
        assert!(validate_threshold(-0.01).is_err());
        assert!(validate_threshold(1.01).is_err());
        assert!(validate_threshold(f64::NAN).is_err());
    }

    #[test]
    fn test_no_matches() {
        let analysis = analyze("what a lovely day", "en").unwrap();
        assert!(analysis.matching_words.is_empty());
        assert_eq!(analysis.intensity, 0.0);
    }
}
