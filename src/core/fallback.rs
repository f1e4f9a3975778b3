//! Deterministic local stand-ins for the dialogue service.
//!
//! Every function here is total: whatever the dialogue service fails to
//! produce, these produce the same text for the same inputs.

use crate::models::{ConversationLine, PersonalityProfile};
use serde_json::Value;

pub const FALLBACK_QUESTIONS: [&str; 10] = [
    "What usually makes you feel emotionally safe with someone new?",
    "When you like someone, what is your natural communication style?",
    "How do you prefer to resolve misunderstandings in relationships?",
    "What kind of lifestyle rhythm do you want with a partner?",
    "What values matter most when choosing a long-term partner?",
    "How do you show care when someone you love is stressed?",
    "What pace feels right when building emotional intimacy?",
    "What does a healthy boundary look like for you in dating?",
    "What type of dates make you feel most connected?",
    "What would make a relationship feel truly fulfilling to you?",
];

/// First message the user agent receives in a simulated conversation
pub const OPENING_MESSAGE: &str =
    "Hi, I want to understand your personality better. What matters most to you in a relationship?";

const DEFAULT_TURN_RESPONSE: &str = "I want to know you better before deciding.";
const DEFAULT_TURN_SCORE: f64 = 5.0;

const FALLBACK_TURNS: [&str; 4] = [
    "I like where this is going. What does a perfect weekend look like for you?",
    "That sounds lovely. I value honesty and showing up for each other.",
    "I can see us getting along. How do you usually handle disagreements?",
    "I feel comfortable talking with you. Tell me something you are excited about.",
];

/// Score given to fallback turns, just high enough to keep talking
pub const FALLBACK_TURN_SCORE: f64 = 7.0;

/// Interview question for position `index` of the conversational flow
pub fn fallback_question(index: usize) -> &'static str {
    FALLBACK_QUESTIONS[index % FALLBACK_QUESTIONS.len()]
}

/// Normalize a generated question: single spaces, trailing `?`
///
/// Returns `None` when nothing is left after trimming.
pub fn sanitize_question(text: &str) -> Option<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.ends_with('?') {
        Some(cleaned)
    } else {
        Some(format!("{}?", cleaned))
    }
}

/// Reply of the player's own avatar when the dialogue service is unavailable
pub fn fallback_avatar_reply(message: &str, personality: &PersonalityProfile) -> String {
    let vibe = personality.core_vibe.to_lowercase();
    let direct = personality
        .communication_style
        .to_lowercase()
        .contains("direct");
    let lower = message.to_lowercase();

    if lower.contains("date") || lower.contains("plan") {
        return if direct {
            format!(
                "go for a clear, low-pressure plan. your {} vibe works best when both sides feel comfortable and honest.",
                vibe
            )
        } else {
            format!(
                "pick a calm date with room to talk. your {} vibe connects better through emotional ease.",
                vibe
            )
        };
    }

    if lower.contains("red flag") || lower.contains("toxic") || lower.contains("avoid") {
        return "watch for inconsistency between words and actions. your best match should feel emotionally steady, not confusing.".to_string();
    }

    "that makes sense. tell me one real situation and i will help you respond in a way that fits your vibe.".to_string()
}

/// Four-line introduction between the player and a candidate
pub fn scripted_conversation(
    player_name: &str,
    candidate_name: &str,
    candidate_vibe: &str,
    communication_style: &str,
    relationship_focus: &str,
) -> Vec<ConversationLine> {
    let opening = if communication_style.contains("direct") {
        format!(
            "{}: I like clear communication from the start. What matters to you most?",
            player_name
        )
    } else {
        format!(
            "{}: I prefer to understand someone slowly. What kind of connection are you hoping for?",
            player_name
        )
    };

    let response = if relationship_focus.contains("stability") {
        format!("{}: I value consistency and showing up when it matters.", candidate_name)
    } else if relationship_focus.contains("chemistry") {
        format!(
            "{}: I am looking for real spark, but with emotional maturity.",
            candidate_name
        )
    } else {
        format!(
            "{}: I want partnership where both people grow over time.",
            candidate_name
        )
    };

    let vibe_line = format!(
        "{}: Your vibe feels {}. I think we could work if we keep things honest.",
        player_name, candidate_vibe
    );
    let close = format!(
        "{}: Agreed. Let's try a quest and see how we solve things together.",
        candidate_name
    );

    [
        (player_name, opening),
        (candidate_name, response),
        (player_name, vibe_line),
        (candidate_name, close),
    ]
    .into_iter()
    .map(|(speaker, text)| ConversationLine {
        speaker: speaker.to_string(),
        text,
    })
    .collect()
}

/// One generated conversation turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReply {
    pub response: String,
    /// Compatibility from the speaker's viewpoint, 1.0..=10.0
    pub score: f64,
}

/// Turn used when the dialogue service could not produce one
pub fn fallback_turn(round: usize) -> TurnReply {
    TurnReply {
        response: FALLBACK_TURNS[round % FALLBACK_TURNS.len()].to_string(),
        score: FALLBACK_TURN_SCORE,
    }
}

/// Read a loosely typed number: numeric strings count, blank strings and
/// null are zero, booleans are 0 or 1. `None` for anything else or NaN.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        _ => None,
    };
    n.filter(|n| !n.is_nan())
}

/// Parse a `{"response": "...", "score": 7}` turn
///
/// Text that is not JSON is kept as the response with a neutral score.
/// Scores are coerced the lenient way (numeric strings count), zero or
/// unparseable scores become 5, and the result is clamped to 1..=10 without
/// rounding.
pub fn parse_turn(text: &str) -> TurnReply {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(_) => {
            return TurnReply {
                response: text.to_string(),
                score: DEFAULT_TURN_SCORE,
            }
        }
    };

    let response = parsed
        .get("response")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_TURN_RESPONSE)
        .to_string();

    let score = parsed
        .get("score")
        .and_then(coerce_number)
        .filter(|s| *s != 0.0)
        .map_or(DEFAULT_TURN_SCORE, |s| s.clamp(1.0, 10.0));

    TurnReply { response, score }
}
