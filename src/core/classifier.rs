use crate::models::{InterviewAnswers, PersonalityProfile};
use serde::Serialize;

/// Interview dimension a canonical question explores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Communication,
    Focus,
    LoveStyle,
    Vibe,
    Pace,
}

/// Canonical interview question
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoveQuestion {
    pub id: &'static str,
    pub dimension: Dimension,
    pub question: &'static str,
    pub suggestions: [&'static str; 3],
}

pub const LOVE_QUESTIONS: [LoveQuestion; 5] = [
    LoveQuestion {
        id: "q1",
        dimension: Dimension::Communication,
        question: "When there is conflict, how do you want your partner to talk with you?",
        suggestions: ["be direct and clear", "be gentle and reassuring", "give me space first"],
    },
    LoveQuestion {
        id: "q2",
        dimension: Dimension::Focus,
        question: "What relationship goal matters most for you now?",
        suggestions: ["long-term stability", "strong chemistry", "growth together"],
    },
    LoveQuestion {
        id: "q3",
        dimension: Dimension::LoveStyle,
        question: "How do you naturally show love?",
        suggestions: ["quality time and listening", "acts of care", "words and affection"],
    },
    LoveQuestion {
        id: "q4",
        dimension: Dimension::Vibe,
        question: "Which date vibe feels most like you?",
        suggestions: ["cozy and calm", "fun and playful", "deep and thoughtful"],
    },
    LoveQuestion {
        id: "q5",
        dimension: Dimension::Pace,
        question: "How fast do you want a connection to progress emotionally?",
        suggestions: ["slow and steady", "balanced pace", "fast when it feels right"],
    },
];

/// Top vibes used when the interview gives no vibe signal at all
pub const DEFAULT_TOP_VIBES: [&str; 2] = ["cozy", "calm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunicationStyle {
    Direct,
    Gentle,
    SpaceFirst,
    Balanced,
}

impl CommunicationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Direct => "direct and clear",
            CommunicationStyle::Gentle => "gentle and emotionally safe",
            CommunicationStyle::SpaceFirst => "space-first then calm discussion",
            CommunicationStyle::Balanced => "balanced and respectful",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipFocus {
    Stability,
    Chemistry,
    Growth,
    Balanced,
}

impl RelationshipFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipFocus::Stability => "long-term stability",
            RelationshipFocus::Chemistry => "chemistry and attraction",
            RelationshipFocus::Growth => "growth and partnership",
            RelationshipFocus::Balanced => "balanced connection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoveStyle {
    Attentive,
    Practical,
    Verbal,
    Warm,
}

impl LoveStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoveStyle::Attentive => "present and attentive",
            LoveStyle::Practical => "practical and caring",
            LoveStyle::Verbal => "expressive and verbal",
            LoveStyle::Warm => "warm and balanced",
        }
    }
}

/// Interview-derived profile without the core vibe phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoveProfile {
    pub communication_style: CommunicationStyle,
    pub relationship_focus: RelationshipFocus,
    pub love_style: LoveStyle,
    pub top_vibes: Vec<&'static str>,
    pub tags: [&'static str; 4],
    pub compatibility_bonus: u32,
}

#[inline]
fn has_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn parse_communication(answer: &str) -> CommunicationStyle {
    let t = answer.to_lowercase();
    if has_any(&t, &["direct", "clear", "honest", "straight"]) {
        CommunicationStyle::Direct
    } else if has_any(&t, &["gentle", "soft", "reassure", "kind", "patient"]) {
        CommunicationStyle::Gentle
    } else if has_any(&t, &["space", "time", "pause"]) {
        CommunicationStyle::SpaceFirst
    } else {
        CommunicationStyle::Balanced
    }
}

fn parse_focus(answer: &str) -> RelationshipFocus {
    let t = answer.to_lowercase();
    if has_any(&t, &["long-term", "stable", "stability", "commitment", "peace"]) {
        RelationshipFocus::Stability
    } else if has_any(&t, &["chemistry", "passion", "spark", "excite"]) {
        RelationshipFocus::Chemistry
    } else if has_any(&t, &["growth", "build", "partner", "future"]) {
        RelationshipFocus::Growth
    } else {
        RelationshipFocus::Balanced
    }
}

fn parse_love_style(answer: &str) -> LoveStyle {
    let t = answer.to_lowercase();
    if has_any(&t, &["quality time", "listen", "conversation", "present"]) {
        LoveStyle::Attentive
    } else if has_any(&t, &["care", "help", "support", "service", "actions"]) {
        LoveStyle::Practical
    } else if has_any(&t, &["words", "affection", "text", "compliment", "express"]) {
        LoveStyle::Verbal
    } else {
        LoveStyle::Warm
    }
}

/// Vibe-question rules, then pace-question rules. Every matching group adds
/// its pair of tags.
const VIBE_RULES: [(&[&str], [&str; 2]); 3] = [
    (&["cozy", "calm", "peace", "home"], ["cozy", "calm"]),
    (&["fun", "playful", "adventure", "active"], ["playful", "adventurous"]),
    (&["deep", "thoughtful", "intellectual", "talk"], ["intellectual", "romantic"]),
];

const PACE_RULES: [(&[&str], [&str; 2]); 3] = [
    (&["slow", "steady"], ["calm", "organized"]),
    (&["fast", "chemistry", "right"], ["playful", "romantic"]),
    (&["balanced"], ["cozy", "organized"]),
];

fn parse_vibes(vibe_answer: &str, pace_answer: &str) -> Vec<&'static str> {
    let v = vibe_answer.to_lowercase();
    let p = pace_answer.to_lowercase();

    // (tag, count) in first-seen order
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    let mut tally = |tags: &[&'static str; 2]| {
        for tag in tags {
            match counts.iter_mut().find(|(t, _)| t == tag) {
                Some((_, n)) => *n += 1,
                None => counts.push((*tag, 1)),
            }
        }
    };

    for (words, tags) in VIBE_RULES.iter() {
        if has_any(&v, words) {
            tally(tags);
        }
    }
    for (words, tags) in PACE_RULES.iter() {
        if has_any(&p, words) {
            tally(tags);
        }
    }

    if counts.is_empty() {
        return DEFAULT_TOP_VIBES.to_vec();
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(2).map(|(tag, _)| tag).collect()
}

/// Build the love profile from interview answers
///
/// Total over its input: missing or empty answers fall through to the
/// balanced defaults.
pub fn love_profile(answers: &InterviewAnswers) -> LoveProfile {
    let [q1, q2, q3, q4, q5] = ["q1", "q2", "q3", "q4", "q5"].map(|id| answers.trimmed(id));

    let communication_style = parse_communication(q1);
    let relationship_focus = parse_focus(q2);
    let love_style = parse_love_style(q3);
    let top_vibes = parse_vibes(q4, q5);

    let pace = q5.to_lowercase();
    let tags = [
        match communication_style {
            CommunicationStyle::Direct => "direct",
            _ => "empathetic",
        },
        match relationship_focus {
            RelationshipFocus::Stability => "secure",
            RelationshipFocus::Chemistry => "passionate",
            _ => "growth",
        },
        match love_style {
            LoveStyle::Practical => "practical-love",
            LoveStyle::Verbal => "verbal-affection",
            _ => "quality-time",
        },
        if pace.contains("slow") {
            "slow-burn"
        } else if pace.contains("fast") {
            "fast-burn"
        } else {
            "balanced-pace"
        },
    ];

    let completeness = [q1, q2, q3, q4, q5]
        .iter()
        .filter(|a| a.chars().count() > 5)
        .count() as u32;

    LoveProfile {
        communication_style,
        relationship_focus,
        love_style,
        top_vibes,
        tags,
        compatibility_bonus: 5 + completeness * 2,
    }
}

/// Phrase describing the player's dominant vibe
pub fn core_vibe(top_vibe: &str) -> &'static str {
    match top_vibe {
        "playful" => "bold and expressive",
        "calm" => "deep and intuitive",
        "organized" => "clear and intentional",
        _ => "grounded and steady",
    }
}

/// Classify interview answers into the player's personality profile
pub fn classify(answers: &InterviewAnswers) -> PersonalityProfile {
    let love = love_profile(answers);
    let top = love.top_vibes.first().copied().unwrap_or("cozy");

    PersonalityProfile {
        core_vibe: core_vibe(top).to_string(),
        communication_style: love.communication_style.as_str().to_string(),
        relationship_focus: love.relationship_focus.as_str().to_string(),
        love_style: love.love_style.as_str().to_string(),
        top_vibes: love.top_vibes.iter().map(|v| v.to_string()).collect(),
        tags: love.tags.iter().map(|t| t.to_string()).collect(),
        compatibility_bonus: love.compatibility_bonus,
    }
}

/// Whether every canonical question has a meaningful answer
pub fn all_questions_answered(answers: &InterviewAnswers) -> bool {
    LOVE_QUESTIONS.iter().all(|q| answers.is_provided(q.id))
}

/// Number of canonical questions answered so far
pub fn answered_count(answers: &InterviewAnswers) -> usize {
    LOVE_QUESTIONS
        .iter()
        .filter(|q| answers.is_provided(q.id))
        .count()
}
