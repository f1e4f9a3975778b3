use crate::core::{
    agents::initialize_user_agent, avatar::generate_avatar, candidates::generate_candidates,
    classifier::classify, seed::derive_seed,
};
use crate::models::{AvatarProfile, InterviewAnswers, PlayerSetup, Seed};
use tracing::debug;

/// Vibe used when the classifier produced no top vibes
const FALLBACK_VIBE: &str = "balanced";

/// Seed for a player, optionally varied by their answers
///
/// A reroll mixes the answers (in key order) into the key so a player who
/// changes their answers gets a fresh avatar and candidate pool.
pub fn player_seed(setup: &PlayerSetup, answers: &InterviewAnswers, reroll: bool) -> Seed {
    let mut key = setup.seed_key();
    if reroll {
        for (_, answer) in answers.iter() {
            key.push('|');
            key.push_str(answer);
        }
    }
    derive_seed(&key)
}

/// Build everything the avatar step needs from setup and interview answers
pub fn build_avatar_profile(
    setup: &PlayerSetup,
    answers: &InterviewAnswers,
    reroll: bool,
) -> AvatarProfile {
    let seed = player_seed(setup, answers, reroll);
    let personality = classify(answers);
    let primary_vibe = personality
        .top_vibes
        .first()
        .map(String::as_str)
        .unwrap_or(FALLBACK_VIBE);

    debug!(
        player = %setup.name,
        seed,
        primary_vibe,
        reroll,
        "Building avatar profile"
    );

    let avatar = generate_avatar(primary_vibe, seed, setup.gender);
    let candidates = generate_candidates(primary_vibe, seed);
    let user_agent = initialize_user_agent(setup, &personality, &avatar);

    AvatarProfile {
        avatar,
        personality,
        candidates,
        user_agent,
    }
}
