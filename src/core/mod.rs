// Core algorithm exports
pub mod agents;
pub mod avatar;
pub mod candidates;
pub mod classifier;
pub mod compatibility;
pub mod fallback;
pub mod lobby;
pub mod profile;
pub mod quest_interaction;
pub mod quests;
pub mod seed;

pub use agents::{initialize_agent, initialize_user_agent, partner_roster, vibe_from_personality};
pub use avatar::{generate_avatar, AvatarFeatures};
pub use candidates::generate_candidates;
pub use classifier::{classify, love_profile, LoveProfile, LOVE_QUESTIONS};
pub use compatibility::{adjusted_compatibility, rank_candidates};
pub use lobby::{pair_match_chance, spawn_lobby, LOBBY_SIZE};
pub use profile::build_avatar_profile;
pub use quest_interaction::{build_contact, safe_json_parse};
pub use quests::{quest_for_vibe, QuestDescriptor, QUESTS};
pub use seed::{derive_seed, Mulberry32};
