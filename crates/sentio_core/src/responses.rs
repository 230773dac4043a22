//! Canned response lookup for the chat flow.
//!
//! Entries are addressed by (state, language, category). Resolution is a
//! pure function with a fixed fallback chain: unknown language falls
//! back to English, a missing category falls back to neutral, and a
//! still-missing entry yields [`DEFAULT_RESPONSE`]. The zh/ja tables are
//! intentionally sparse; the fallback chain is the localization safety
//! net, so it gets exercised in normal operation.

use crate::sentiment::SentimentCategory;
use crate::sentiment::SentimentCategory as C;
use crate::session::ConversationState;
use crate::session::ConversationState as S;

/// Last-resort reply when every table lookup misses.
pub const DEFAULT_RESPONSE: &str = "I'm here to listen.";

fn entry(state: S, lang: &str, category: C) -> Option<&'static str> {
    match (state, lang, category) {
        // INIT: first contact, acknowledge the opening tone.
        (S::Init, "en", C::VeryNegative) => {
            Some("That sounds really hard. I'm here with you — tell me more.")
        }
        (S::Init, "en", C::Negative) => Some("I hear some frustration. What's been going on?"),
        (S::Init, "en", C::Neutral) => Some("Hi! How are you feeling today?"),
        (S::Init, "en", C::Positive) => Some("That's great to hear! What's been going well?"),
        (S::Init, "zh", C::VeryNegative) => Some("听起来真的很难受。我在这里，跟我说说吧。"),
        (S::Init, "zh", C::Negative) => Some("听起来有些不顺心，发生什么了？"),
        (S::Init, "zh", C::Neutral) => Some("你好！今天感觉怎么样？"),
        (S::Init, "zh", C::Positive) => Some("太好了！说说有什么开心的事？"),
        (S::Init, "ja", C::Neutral) => Some("こんにちは！今日の気分はどうですか？"),
        (S::Init, "ja", C::Positive) => Some("いいですね！何か良いことがありましたか？"),

        // END: ongoing conversation, keep the thread going.
        (S::End, "en", C::VeryNegative) => {
            Some("I'm sorry it's weighing on you this much. I'm listening.")
        }
        (S::End, "en", C::Negative) => Some("That does sound tough. Thanks for sharing it."),
        (S::End, "en", C::Neutral) => Some("I see. Tell me more about that."),
        (S::End, "en", C::Positive) => Some("I'm glad things are looking up!"),
        (S::End, "zh", C::Negative) => Some("确实不容易，谢谢你告诉我。"),
        (S::End, "zh", C::Neutral) => Some("嗯，再跟我多说说吧。"),
        (S::End, "ja", C::Neutral) => Some("なるほど。もう少し聞かせてください。"),

        // FEEDBACK state replies live in the prompt helpers below; the
        // table only covers sentiment-driven turns.
        _ => None,
    }
}

/// Resolve a response for (state, language, category).
///
/// Fallback order: language → English, then category → neutral, then
/// [`DEFAULT_RESPONSE`]. Always returns a non-empty string.
pub fn resolve(state: ConversationState, lang: &str, category: SentimentCategory) -> &'static str {
    let lang = if has_language(state, lang) { lang } else { "en" };
    entry(state, lang, category)
        .or_else(|| entry(state, lang, SentimentCategory::Neutral))
        .unwrap_or(DEFAULT_RESPONSE)
}

fn has_language(state: ConversationState, lang: &str) -> bool {
    SentimentCategory::ALL
        .iter()
        .any(|c| entry(state, lang, *c).is_some())
}

/// Suffix appended when the flow moves into the feedback state.
pub fn feedback_prompt(lang: &str) -> &'static str {
    match lang {
        "zh" => " 这样的回应对你有帮助吗？用 👍 或 👎 告诉我。",
        "ja" => " この返事は役に立ちましたか？👍 か 👎 で教えてください。",
        _ => " Was this helpful? Reply with 👍 or 👎.",
    }
}

/// Acknowledgement after a recorded thumbs-up/down.
pub fn feedback_thanks(lang: &str) -> &'static str {
    match lang {
        "zh" => "谢谢你的反馈！我们继续聊吧。",
        "ja" => "フィードバックありがとうございます！続けましょう。",
        _ => "Thanks for the feedback! Let's keep talking.",
    }
}

/// Re-prompt when a feedback-state message is not a thumbs token.
pub fn feedback_reprompt(lang: &str) -> &'static str {
    match lang {
        "zh" => "请用 👍 或 👎 告诉我刚才的回应是否有帮助。",
        "ja" => "👍 か 👎 で先ほどの返事が役に立ったか教えてください。",
        _ => "Please let me know with 👍 or 👎 whether that helped.",
    }
}
