//! Lume Quest - personality, avatar and compatibility engine for the Lume Quest dating game
//!
//! Turns a player's setup and free-text interview answers into a personality
//! profile, a procedurally coloured avatar and a seeded pool of match
//! candidates. Every generator is deterministic for the same inputs.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{adjusted_compatibility, build_avatar_profile, classify, derive_seed, generate_avatar, generate_candidates};
pub use crate::models::{AvatarConfig, AvatarProfile, InterviewAnswers, MatchCandidate, PersonalityProfile, PlayerSetup};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_library_exports() {
        let personality = classify(&InterviewAnswers::new());
        let avatar = generate_avatar(&personality.top_vibes[0], derive_seed("Ava"), Gender::Female);
        assert_eq!(avatar.seed, derive_seed("Ava"));
        assert_eq!(adjusted_compatibility(60, "cozy", &InterviewAnswers::new()), 72);
    }
}
