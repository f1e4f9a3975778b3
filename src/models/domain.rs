use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Seed driving every deterministic generator
pub type Seed = u64;

/// Player gender, as declared during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which partners the player wants to meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookingFor {
    Male,
    Female,
    Any,
}

impl LookingFor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookingFor::Male => "male",
            LookingFor::Female => "female",
            LookingFor::Any => "any",
        }
    }
}

/// Player setup collected before the interview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub location: String,
    pub gender: Gender,
    #[serde(rename = "lookingForGender")]
    pub looking_for_gender: LookingFor,
    #[serde(rename = "minPartnerAge")]
    pub min_partner_age: u8,
    #[serde(rename = "maxPartnerAge")]
    pub max_partner_age: u8,
}

impl PlayerSetup {
    /// Stable key the player's seed is derived from
    pub fn seed_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.name, self.birth_date, self.location, self.gender
        )
    }
}

/// One question/answer pair of the conversational interview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizExchange {
    pub question: String,
    pub answer: String,
}

/// Free-text interview answers keyed by question id (`q1`..`q5` at minimum)
///
/// Missing keys read as the empty string, so every consumer can treat the
/// mapping as total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewAnswers(BTreeMap<String, String>);

impl InterviewAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key a conversational interview positionally (`q1`, `q2`, ...)
    pub fn from_conversation(exchanges: &[QuizExchange]) -> Self {
        exchanges
            .iter()
            .enumerate()
            .map(|(i, exchange)| (format!("q{}", i + 1), exchange.answer.clone()))
            .collect()
    }

    pub fn insert(&mut self, id: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(id.into(), answer.into());
    }

    pub fn with(mut self, id: impl Into<String>, answer: impl Into<String>) -> Self {
        self.insert(id, answer);
        self
    }

    /// Raw answer, empty when the question was never answered
    pub fn get(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn trimmed(&self, id: &str) -> &str {
        self.get(id).trim()
    }

    /// An answer counts only once it has at least two non-blank characters
    pub fn is_provided(&self, id: &str) -> bool {
        self.trimmed(id).chars().count() >= 2
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InterviewAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Canonical personality of a player for the rest of the session
///
/// Styles are stored as their display phrases so that a profile regenerated
/// outside the classifier can replace this one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    #[serde(rename = "coreVibe")]
    pub core_vibe: String,
    #[serde(rename = "communicationStyle")]
    pub communication_style: String,
    #[serde(rename = "relationshipFocus")]
    pub relationship_focus: String,
    #[serde(rename = "loveStyle")]
    pub love_style: String,
    #[serde(rename = "topVibes")]
    pub top_vibes: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "compatibilityBonus", default)]
    pub compatibility_bonus: u32,
}

/// Avatar colours, each a `#rrggbb` string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarPalette {
    pub skin: String,
    pub outfit: String,
    pub hair: String,
    pub aura: String,
    pub accent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairStyle {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub palette: AvatarPalette,
    pub motifs: Vec<String>,
    pub seed: Seed,
    #[serde(rename = "hairStyle", default, skip_serializing_if = "Option::is_none")]
    pub hair_style: Option<HairStyle>,
}

/// Generated prospective match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub id: String,
    pub name: String,
    pub vibe: String,
    pub compatibility: u32,
    pub avatar: AvatarConfig,
}

/// Simulated persona taking part in agent conversations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub occupation: String,
    #[serde(rename = "heightM")]
    pub height_m: f64,
    #[serde(rename = "personalitySummary")]
    pub personality_summary: String,
    #[serde(rename = "preferenceSummary")]
    pub preference_summary: String,
    pub avatar: AvatarConfig,
}

/// One line of an agent conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTurn {
    pub speaker: String,
    pub text: String,
    /// Speaker's compatibility view, 1.0..=10.0, fractions kept
    pub score: f64,
}

/// Why an agent conversation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionEnd {
    LowScore,
    MaxTurns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInteraction {
    pub partner: AgentProfile,
    pub rounds: Vec<AgentTurn>,
    #[serde(rename = "endedBy")]
    pub ended_by: InteractionEnd,
    #[serde(rename = "finalUserScore")]
    pub final_user_score: f64,
    #[serde(rename = "finalPartnerScore")]
    pub final_partner_score: f64,
    #[serde(rename = "averageScore")]
    pub average_score: u32,
}

/// Scripted line shown on the partners board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLine {
    pub speaker: String,
    pub text: String,
}

/// Candidate re-scored against the player's answers for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSimulation {
    pub candidate: MatchCandidate,
    pub score: u32,
    pub rounds: Vec<ConversationLine>,
    #[serde(rename = "recommendedQuestId")]
    pub recommended_quest_id: String,
    #[serde(rename = "recommendedQuest")]
    pub recommended_quest: String,
    #[serde(rename = "whyItFits")]
    pub why_it_fits: String,
}

/// Wandering avatar of the landing-page lobby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LobbyAvatar {
    pub id: usize,
    pub avatar: AvatarConfig,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    #[serde(rename = "matchBias")]
    pub match_bias: f64,
}

/// Result of building a player's profile from setup and interview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarProfile {
    pub avatar: AvatarConfig,
    pub personality: PersonalityProfile,
    pub candidates: Vec<MatchCandidate>,
    #[serde(rename = "userAgent")]
    pub user_agent: AgentProfile,
}

/// Everything the player accumulates across the game steps
///
/// Stored as one JSON document and always overwritten as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestSession {
    #[serde(rename = "playerSetup", default, skip_serializing_if = "Option::is_none")]
    pub player_setup: Option<PlayerSetup>,
    #[serde(rename = "loveAnswers", default, skip_serializing_if = "Option::is_none")]
    pub love_answers: Option<InterviewAnswers>,
    #[serde(rename = "quizConversation", default, skip_serializing_if = "Option::is_none")]
    pub quiz_conversation: Option<Vec<QuizExchange>>,
    #[serde(rename = "userAgent", default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<AgentProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<PersonalityProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AvatarConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<MatchCandidate>>,
}

/// Partner as seen by a quest mini-game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestPartner {
    pub id: String,
    pub name: String,
    pub vibe: String,
}

/// Partner side of two truths and a lie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthSetup {
    #[serde(rename = "partnerStatements")]
    pub partner_statements: Vec<String>,
    /// Which of the partner's statements is the lie, 0..=2
    #[serde(rename = "partnerLieIndex")]
    pub partner_lie_index: u8,
    /// Partner's guess at the player's lie, 0..=2
    #[serde(rename = "partnerGuess")]
    pub partner_guess: u8,
    #[serde(rename = "partnerReason")]
    pub partner_reason: String,
}

/// Partner opinions plus the partner's 1-5 ratings of the player's opinions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotTakeSetup {
    #[serde(rename = "partnerOpinions")]
    pub partner_opinions: Vec<String>,
    #[serde(rename = "partnerRatingsForUser")]
    pub partner_ratings_for_user: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlankSetup {
    #[serde(rename = "partnerAnswers")]
    pub partner_answers: Vec<String>,
    #[serde(rename = "partnerGuessesForUser")]
    pub partner_guesses_for_user: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerContact {
    pub email: String,
    pub phone: String,
}

/// Whether the partner wants to keep talking after a quest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerDecision {
    #[serde(rename = "partnerInterested")]
    pub partner_interested: bool,
    pub reason: String,
    #[serde(rename = "partnerContact")]
    pub partner_contact: PartnerContact,
}
