// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgentInteraction, AgentProfile, AgentTurn, AvatarConfig, AvatarPalette, AvatarProfile,
    CandidateSimulation, ConversationLine, FillBlankSetup, Gender, HairStyle, HotTakeSetup,
    InteractionEnd, InterviewAnswers, LobbyAvatar, LookingFor, MatchCandidate, PartnerContact,
    PartnerDecision, PersonalityProfile, PlayerSetup, QuestPartner, QuestSession, QuizExchange,
    Seed, TruthSetup,
};
pub use requests::{
    AvatarChatRequest, AvatarProfileRequest, ChatMessage, ChatRole, QuestInteractionRequest,
    QuestMessage, QuestRole, QuizQuestionRequest, RankCandidatesRequest, SimulateRequest,
    QUEST_MODES,
};
pub use responses::{
    AgentRosterResponse, AvatarChatResponse, ErrorResponse, HealthResponse, LobbyResponse,
    QuestChatResponse, QuizQuestionResponse, RankCandidatesResponse, SessionWriteResponse,
    SimulateResponse,
};
