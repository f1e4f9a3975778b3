use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    AgentProfile, AvatarConfig, InterviewAnswers, MatchCandidate, PersonalityProfile,
    PlayerSetup, QuestPartner, QuizExchange,
};

/// Request to build the avatar, personality and candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AvatarProfileRequest {
    #[serde(alias = "player_setup", rename = "playerSetup")]
    pub player_setup: Option<PlayerSetup>,
    #[serde(alias = "love_answers", rename = "loveAnswers")]
    pub love_answers: Option<InterviewAnswers>,
    /// Mix the answers into the seed for a fresh look
    #[serde(default)]
    pub reroll: bool,
}

/// Request to re-score candidates into the partners board
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    #[validate(length(min = 1, max = 80))]
    #[serde(alias = "player_name", rename = "playerName")]
    pub player_name: String,
    #[serde(alias = "love_answers", rename = "loveAnswers")]
    pub love_answers: Option<InterviewAnswers>,
    pub personality: Option<PersonalityProfile>,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub candidates: Vec<MatchCandidate>,
}

/// Request for the next interview question
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizQuestionRequest {
    #[serde(alias = "player_setup", rename = "playerSetup")]
    pub player_setup: Option<PlayerSetup>,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub exchanges: Vec<QuizExchange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Avatar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Message to the player's own avatar
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AvatarChatRequest {
    #[validate(length(max = 2000))]
    pub message: Option<String>,
    pub personality: Option<PersonalityProfile>,
    #[serde(alias = "love_answers", rename = "loveAnswers")]
    pub love_answers: Option<InterviewAnswers>,
    #[serde(alias = "quiz_conversation", rename = "quizConversation", default)]
    pub quiz_conversation: Vec<QuizExchange>,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Request to simulate the user agent against every partner
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimulateRequest {
    #[serde(alias = "player_setup", rename = "playerSetup")]
    pub player_setup: Option<PlayerSetup>,
    pub personality: Option<PersonalityProfile>,
    pub avatar: Option<AvatarConfig>,
    #[serde(alias = "love_answers", rename = "loveAnswers")]
    pub love_answers: Option<InterviewAnswers>,
    /// Reuse a previously initialized user agent
    #[serde(alias = "user_agent", rename = "userAgent")]
    pub user_agent: Option<AgentProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestRole {
    User,
    Partner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestMessage {
    pub role: QuestRole,
    pub text: String,
}

/// Modes accepted by the quest interaction endpoint
pub const QUEST_MODES: [&str; 5] = [
    "truth_setup",
    "hot_take_setup",
    "fill_blank_setup",
    "chat",
    "decision",
];

/// One step of a quest mini-game, selected by `mode`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuestInteractionRequest {
    TruthSetup {
        candidate: QuestPartner,
        #[serde(rename = "userStatements", default)]
        user_statements: Vec<String>,
        #[serde(rename = "userLieIndex", default)]
        user_lie_index: u8,
    },
    HotTakeSetup {
        candidate: QuestPartner,
        #[serde(rename = "userOpinions", default)]
        user_opinions: Vec<String>,
    },
    FillBlankSetup {
        candidate: QuestPartner,
        #[serde(rename = "userAnswers", default)]
        user_answers: Vec<String>,
        #[serde(default)]
        starters: Vec<String>,
    },
    Chat {
        candidate: QuestPartner,
        #[serde(rename = "questTitle", default)]
        quest_title: String,
        #[serde(default)]
        prompt: String,
        #[serde(default)]
        context: String,
        #[serde(default)]
        history: Vec<QuestMessage>,
        #[serde(default)]
        message: String,
    },
    Decision {
        candidate: QuestPartner,
        #[serde(rename = "questTitle", default)]
        quest_title: String,
        #[serde(default)]
        context: String,
        #[serde(default)]
        history: Vec<QuestMessage>,
        #[serde(rename = "userInterested", default)]
        user_interested: bool,
    },
}

impl QuestInteractionRequest {
    pub fn candidate(&self) -> &QuestPartner {
        match self {
            Self::TruthSetup { candidate, .. }
            | Self::HotTakeSetup { candidate, .. }
            | Self::FillBlankSetup { candidate, .. }
            | Self::Chat { candidate, .. }
            | Self::Decision { candidate, .. } => candidate,
        }
    }
}
