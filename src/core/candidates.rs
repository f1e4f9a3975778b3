use crate::core::avatar::generate_avatar;
use crate::models::{Gender, MatchCandidate, Seed};

pub const CANDIDATE_NAMES: [&str; 10] = [
    "Astra", "Nova", "Milo", "Kai", "Luna", "Rin", "Jade", "Leo", "Nia", "Sora",
];

pub const CANDIDATE_VIBES: [&str; 8] = [
    "playful",
    "cozy",
    "adventurous",
    "intellectual",
    "romantic",
    "organized",
    "calm",
    "elegant",
];

/// Candidates produced per pool
pub const POOL_SIZE: u64 = 8;

const BASE_COMPATIBILITY: u32 = 58;
const COMPATIBILITY_SPREAD: u64 = 28;
const SAME_VIBE_BOOST: u32 = 18;
const POOL_CAP: u32 = 95;

#[inline]
fn pick<'a>(table: &[&'a str], n: Seed) -> &'a str {
    table[(n % table.len() as Seed) as usize]
}

/// Generate the candidate pool for a player
///
/// Each candidate's vibe, name and base score are indexed off the seed.
/// Candidates sharing the player's primary vibe (exact, case-sensitive
/// match) get a boost, capped at 95. The pool is stable-sorted by
/// compatibility, highest first.
pub fn generate_candidates(primary_vibe: &str, seed: Seed) -> Vec<MatchCandidate> {
    let mut candidates: Vec<MatchCandidate> = (0..POOL_SIZE)
        .map(|i| {
            let vibe = pick(&CANDIDATE_VIBES, seed.wrapping_add(i * 5));
            let name = pick(&CANDIDATE_NAMES, seed.wrapping_add(i * 3));
            let boost = if vibe == primary_vibe { SAME_VIBE_BOOST } else { 0 };
            let spread = (seed.wrapping_add(i * 11) % COMPATIBILITY_SPREAD) as u32;
            let gender = if i % 2 == 0 { Gender::Female } else { Gender::Male };

            MatchCandidate {
                id: format!("cand-{}-{}", i, seed),
                name: name.to_string(),
                vibe: vibe.to_string(),
                compatibility: (BASE_COMPATIBILITY + spread + boost).min(POOL_CAP),
                avatar: generate_avatar(vibe, seed.wrapping_add(i * 97), gender),
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));
    candidates
}
