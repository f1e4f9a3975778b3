use serde::{Deserialize, Serialize};
use crate::models::domain::{AgentInteraction, AgentProfile, CandidateSimulation, LobbyAvatar};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dialogue: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Partners board, highest score first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    pub partners: Vec<CandidateSimulation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestionResponse {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarChatResponse {
    pub reply: String,
}

/// The fixed partner agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRosterResponse {
    pub partners: Vec<AgentProfile>,
}

/// Outcome of simulating the user agent against the partner roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateResponse {
    #[serde(rename = "userAgent")]
    pub user_agent: AgentProfile,
    pub partners: Vec<AgentProfile>,
    pub interactions: Vec<AgentInteraction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyResponse {
    pub avatars: Vec<LobbyAvatar>,
}

/// Session write/clear acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionWriteResponse {
    pub success: bool,
    pub id: String,
    pub key: String,
}
