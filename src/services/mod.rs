// Service exports
pub mod conversation;
pub mod dialogue;
pub mod prompts;
pub mod session;

pub use conversation::{run_agent_interaction, MAX_CONVERSATION_EXCHANGES};
pub use dialogue::{DialogueError, DialogueGenerator, DialogueRequest, OfflineDialogue, ResponsesClient, Temperatures};
pub use session::{SessionError, SessionKey, SessionStore};
