//! Quest mini-game steps: partner setups for two truths and a lie, hot
//! takes and fill-in-the-blank, in-quest chat and the closing decision.
//!
//! Each step has a deterministic fallback, and a `merge_*` function that
//! keeps whatever usable fields generated JSON provides on top of it.

use serde_json::Value;

use crate::core::fallback::coerce_number;
use crate::models::{
    FillBlankSetup, HotTakeSetup, PartnerContact, PartnerDecision, QuestPartner, TruthSetup,
};

const TRUTH_PACKS_ADVENTUROUS: [[&str; 3]; 2] = [
    [
        "I did a sunrise hike before work last month.",
        "I dislike all outdoor activities.",
        "I once learned to surf in one day.",
    ],
    [
        "I enjoy trying new adrenaline activities.",
        "I have never taken a spontaneous trip.",
        "I can spend all day outdoors.",
    ],
];

const TRUTH_PACKS_CALM: [[&str; 3]; 2] = [
    [
        "I can spend hours reading in a cafe.",
        "I hate meaningful conversations.",
        "I prefer quieter date plans.",
    ],
    [
        "I keep a small journal for reflections.",
        "I only like loud and crowded dates.",
        "I value emotional steadiness.",
    ],
];

/// Words that give away the lie in a fallback pack
const LIE_MARKERS: [&str; 4] = ["dislike", "never", "hate", "only like loud"];

const HOT_TAKES: [&str; 5] = [
    "First dates should be short, not dinner-length.",
    "Texting chemistry matters less than in-person energy.",
    "Couples should schedule difficult conversations.",
    "Shared routines are more romantic than surprises.",
    "Not every red flag is a dealbreaker.",
];

const HOT_TAKE_BASE_RATINGS: [u64; 3] = [3, 4, 2];
const DEFAULT_RATING: f64 = 3.0;

const MAX_STATEMENTS: usize = 3;
const MAX_BLANKS: usize = 5;

const CONTACT_DOMAIN: &str = "lovealchemy-match.com";
const CONTACT_COUNTRY_CODE: &str = "+65";

/// Seed for the setup fallbacks: joined entry length plus name length
pub fn setup_seed(entries: &[String], candidate_name: &str) -> u64 {
    let joined = entries.join("|").chars().count();
    (joined + candidate_name.chars().count()) as u64
}

/// Partner statements for two truths and a lie
///
/// Adventurous partners draw from their own pack, everyone else from the
/// calm one.
pub fn fallback_truth(candidate: &QuestPartner, seed: u64) -> TruthSetup {
    let packs = match candidate.vibe.as_str() {
        "adventurous" => &TRUTH_PACKS_ADVENTUROUS,
        _ => &TRUTH_PACKS_CALM,
    };
    let statements = &packs[(seed % packs.len() as u64) as usize];

    let lie_index = statements
        .iter()
        .position(|s| {
            let lower = s.to_lowercase();
            LIE_MARKERS.iter().any(|m| lower.contains(m))
        })
        .unwrap_or(1);

    TruthSetup {
        partner_statements: statements.iter().map(|s| s.to_string()).collect(),
        partner_lie_index: lie_index as u8,
        partner_guess: (seed % 3) as u8,
        partner_reason: format!(
            "{} guessed from wording style and confidence level.",
            candidate.name
        ),
    }
}

pub fn fallback_hot_take(seed: u64) -> HotTakeSetup {
    let pick = |offset: u64| HOT_TAKES[((seed + offset) % HOT_TAKES.len() as u64) as usize].to_string();

    HotTakeSetup {
        partner_opinions: vec![pick(0), pick(2), pick(4)],
        partner_ratings_for_user: HOT_TAKE_BASE_RATINGS
            .iter()
            .enumerate()
            .map(|(i, base)| ((base + seed + i as u64) % 5 + 1) as f64)
            .collect(),
    }
}

fn fallback_blank_answer(starter: &str, index: usize) -> &'static str {
    if starter.contains("stressed") {
        if index % 2 == 0 {
            "go quiet and need time alone"
        } else {
            "go for a walk to reset"
        }
    } else if starter.contains("don't realise") {
        "more sensitive than I look"
    } else if starter.contains("happiest") {
        "conversation feels honest and easy"
    } else if starter.contains("want most") {
        "a dependable and emotionally mature relationship"
    } else {
        "being right was most important, but now I value understanding"
    }
}

/// Partner answers per starter, and guesses at the player's answers
///
/// Even-numbered guesses echo the first four words of the player's answer.
pub fn fallback_fill_blank(starters: &[String], user_answers: &[String]) -> FillBlankSetup {
    FillBlankSetup {
        partner_answers: starters
            .iter()
            .enumerate()
            .map(|(i, starter)| fallback_blank_answer(starter, i).to_string())
            .collect(),
        partner_guesses_for_user: user_answers
            .iter()
            .enumerate()
            .map(|(i, answer)| {
                if i % 2 == 0 {
                    answer.split(' ').take(4).collect::<Vec<_>>().join(" ")
                } else {
                    "staying productive and focused".to_string()
                }
            })
            .collect(),
    }
}

pub fn fallback_quest_reply(candidate: &QuestPartner) -> String {
    format!(
        "I see what you mean. {} would probably say: let's unpack it and be honest about what surprised us.",
        candidate.name
    )
}

/// The partner mirrors the player's interest
pub fn fallback_decision(candidate: &QuestPartner, user_interested: bool) -> PartnerDecision {
    let reason = if user_interested {
        format!(
            "{} feels the conversation had enough alignment to continue.",
            candidate.name
        )
    } else {
        format!("{} prefers to stop here for now.", candidate.name)
    };

    PartnerDecision {
        partner_interested: user_interested,
        reason,
        partner_contact: build_contact(candidate),
    }
}

/// Stable contact card for a partner
///
/// The email local part is the lowercase name stripped to `[a-z0-9]`. The
/// phone digits are the UTF-16 code unit sum of the id, zero padded to eight
/// and cut to the first eight.
pub fn build_contact(candidate: &QuestPartner) -> PartnerContact {
    let local: String = candidate
        .name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    let code_sum: u64 = candidate.id.encode_utf16().map(u64::from).sum();
    let digits = format!("{:08}", code_sum);
    let digits = &digits[..8];

    PartnerContact {
        email: format!("{}@{}", local, CONTACT_DOMAIN),
        phone: format!("{} {} {}", CONTACT_COUNTRY_CODE, &digits[..4], &digits[4..]),
    }
}

/// Parse the outermost `{...}` block of model output
///
/// Models like to wrap JSON in prose or code fences; everything from the
/// first `{` to the last `}` is tried as one object.
pub fn safe_json_parse(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Non-blank strings of a generated array, `None` when the field is not an array
fn string_list(parsed: &Value, key: &str) -> Option<Vec<String>> {
    parsed.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect()
    })
}

fn index_in_range(parsed: &Value, key: &str) -> Option<u8> {
    parsed
        .get(key)
        .and_then(Value::as_u64)
        .filter(|i| *i <= 2)
        .map(|i| i as u8)
}

fn non_blank(parsed: &Value, key: &str) -> Option<String> {
    parsed
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn merge_truth(parsed: Option<&Value>, fallback: TruthSetup) -> TruthSetup {
    let Some(parsed) = parsed else {
        return fallback;
    };

    let mut statements =
        string_list(parsed, "partnerStatements").unwrap_or(fallback.partner_statements);
    statements.truncate(MAX_STATEMENTS);

    TruthSetup {
        partner_statements: statements,
        partner_lie_index: index_in_range(parsed, "partnerLieIndex")
            .unwrap_or(fallback.partner_lie_index),
        partner_guess: index_in_range(parsed, "partnerGuess").unwrap_or(fallback.partner_guess),
        partner_reason: non_blank(parsed, "partnerReason").unwrap_or(fallback.partner_reason),
    }
}

/// Generated ratings are coerced to numbers, 0 or unreadable become 3, and
/// each is clamped to 1..=5
pub fn merge_hot_take(parsed: Option<&Value>, fallback: HotTakeSetup) -> HotTakeSetup {
    let Some(parsed) = parsed else {
        return fallback;
    };

    let mut opinions = string_list(parsed, "partnerOpinions").unwrap_or(fallback.partner_opinions);
    opinions.truncate(MAX_STATEMENTS);

    let ratings = match parsed.get("partnerRatingsForUser").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .take(MAX_STATEMENTS)
            .map(|n| {
                coerce_number(n)
                    .filter(|n| *n != 0.0)
                    .unwrap_or(DEFAULT_RATING)
                    .clamp(1.0, 5.0)
            })
            .collect(),
        None => fallback.partner_ratings_for_user,
    };

    HotTakeSetup {
        partner_opinions: opinions,
        partner_ratings_for_user: ratings,
    }
}

pub fn merge_fill_blank(parsed: Option<&Value>, fallback: FillBlankSetup) -> FillBlankSetup {
    let Some(parsed) = parsed else {
        return fallback;
    };

    let mut answers = string_list(parsed, "partnerAnswers").unwrap_or(fallback.partner_answers);
    answers.truncate(MAX_BLANKS);
    let mut guesses =
        string_list(parsed, "partnerGuessesForUser").unwrap_or(fallback.partner_guesses_for_user);
    guesses.truncate(MAX_BLANKS);

    FillBlankSetup {
        partner_answers: answers,
        partner_guesses_for_user: guesses,
    }
}

/// Generated interest must be a real boolean to override the fallback
pub fn merge_decision(parsed: Option<&Value>, fallback: PartnerDecision) -> PartnerDecision {
    let Some(parsed) = parsed else {
        return fallback;
    };

    PartnerDecision {
        partner_interested: parsed
            .get("partnerInterested")
            .and_then(Value::as_bool)
            .unwrap_or(fallback.partner_interested),
        reason: non_blank(parsed, "reason").unwrap_or(fallback.reason),
        partner_contact: fallback.partner_contact,
    }
}
