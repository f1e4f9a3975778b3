use crate::core::{avatar::generate_avatar, seed::derive_seed};
use crate::models::{AgentProfile, AvatarConfig, Gender, PersonalityProfile, PlayerSetup};

/// Static description an agent is initialized from
#[derive(Debug, Clone)]
pub struct AgentSeedData<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub age: u8,
    pub bio: &'a str,
    pub occupation: &'a str,
    pub height_m: f64,
    pub personality_summary: &'a str,
    pub preference_summary: &'a str,
    pub gender: Gender,
    pub vibe: &'a str,
}

/// Fixed partner personas the user agent is simulated against
pub const PARTNER_DATA: [AgentSeedData<'static>; 13] = [
    AgentSeedData {
        id: "partner-angie",
        name: "Angie",
        age: 28,
        bio: "Out-going, loves extreme sports, loves pets, extrovert, does not want kids.",
        occupation: "Ski instructor",
        height_m: 1.65,
        personality_summary: "Energetic, adventurous, social, thrives in high-energy environments.",
        preference_summary: "Prefers men with a similar adventurous and extroverted personality profile.",
        gender: Gender::Female,
        vibe: "adventurous",
    },
    AgentSeedData {
        id: "partner-yiling",
        name: "Yiling",
        age: 32,
        bio: "Introvert, meaningful interactions, prefers cafe dates, cares for two younger siblings.",
        occupation: "Sales assistant in a clothing store",
        height_m: 1.7,
        personality_summary: "Quiet, reflective, dependable, relationship-oriented and practical.",
        preference_summary: "Wants a down-to-earth, dependable partner and plans to start a family in 3 years.",
        gender: Gender::Female,
        vibe: "calm",
    },
    AgentSeedData {
        id: "partner-tom",
        name: "Tom",
        age: 20,
        bio: "Currently serving national service as a soldier, open to both male and female relationships.",
        occupation: "National service soldier",
        height_m: 1.75,
        personality_summary: "Disciplined, open-minded, adaptable, still exploring relationship preferences.",
        preference_summary: "Open to dating both men and women.",
        gender: Gender::Male,
        vibe: "organized",
    },
    AgentSeedData {
        id: "partner-maya",
        name: "Maya",
        age: 26,
        bio: "Creative and social, spends weekends at art markets and beach walks.",
        occupation: "UX designer",
        height_m: 1.62,
        personality_summary: "Warm, expressive, curious, enjoys playful banter.",
        preference_summary: "Looking for someone open-minded, kind, and emotionally present.",
        gender: Gender::Female,
        vibe: "playful",
    },
    AgentSeedData {
        id: "partner-evelyn",
        name: "Evelyn",
        age: 31,
        bio: "Quiet but witty, loves bookstores, journaling, and deep conversations.",
        occupation: "Editor",
        height_m: 1.66,
        personality_summary: "Thoughtful, calm, observant, and loyal once committed.",
        preference_summary: "Prefers steady communication and intentional long-term dating.",
        gender: Gender::Female,
        vibe: "intellectual",
    },
    AgentSeedData {
        id: "partner-sophia",
        name: "Sophia",
        age: 29,
        bio: "Fitness regular who balances discipline with spontaneous weekend trips.",
        occupation: "Physiotherapist",
        height_m: 1.68,
        personality_summary: "Grounded, supportive, energetic, and practical.",
        preference_summary: "Wants a reliable partner who values health and growth.",
        gender: Gender::Female,
        vibe: "organized",
    },
    AgentSeedData {
        id: "partner-nadia",
        name: "Nadia",
        age: 24,
        bio: "Loves karaoke, board games, and hosting fun gatherings with friends.",
        occupation: "Marketing coordinator",
        height_m: 1.6,
        personality_summary: "Playful, outgoing, emotionally open, and optimistic.",
        preference_summary: "Seeks someone who communicates clearly and enjoys social life.",
        gender: Gender::Female,
        vibe: "playful",
    },
    AgentSeedData {
        id: "partner-claire",
        name: "Claire",
        age: 34,
        bio: "Enjoys slow mornings, hiking trails, and cooking comfort food.",
        occupation: "Project manager",
        height_m: 1.64,
        personality_summary: "Composed, intentional, nurturing, and dependable.",
        preference_summary: "Looking for mature commitment and balanced partnership.",
        gender: Gender::Female,
        vibe: "cozy",
    },
    AgentSeedData {
        id: "partner-jason",
        name: "Jason",
        age: 27,
        bio: "Big on football nights, coffee runs, and trying new food places.",
        occupation: "Business analyst",
        height_m: 1.8,
        personality_summary: "Confident, humorous, direct communicator, team-oriented.",
        preference_summary: "Prefers someone who is affectionate, honest, and adventurous.",
        gender: Gender::Male,
        vibe: "adventurous",
    },
    AgentSeedData {
        id: "partner-liam",
        name: "Liam",
        age: 30,
        bio: "A home chef who enjoys piano evenings and low-key dates.",
        occupation: "Software engineer",
        height_m: 1.78,
        personality_summary: "Gentle, reflective, stable, and emotionally aware.",
        preference_summary: "Looking for meaningful conversation and long-term compatibility.",
        gender: Gender::Male,
        vibe: "cozy",
    },
    AgentSeedData {
        id: "partner-noah",
        name: "Noah",
        age: 25,
        bio: "Travel enthusiast who documents city walks and hidden cafes.",
        occupation: "Photographer",
        height_m: 1.82,
        personality_summary: "Curious, spontaneous, expressive, and upbeat.",
        preference_summary: "Wants a partner who is creative and open to new experiences.",
        gender: Gender::Male,
        vibe: "romantic",
    },
    AgentSeedData {
        id: "partner-aaron",
        name: "Aaron",
        age: 33,
        bio: "Early riser, marathon runner, and fan of structured routines.",
        occupation: "Operations lead",
        height_m: 1.76,
        personality_summary: "Disciplined, grounded, reliable, and future-focused.",
        preference_summary: "Prefers a partner who values planning, respect, and consistency.",
        gender: Gender::Male,
        vibe: "organized",
    },
    AgentSeedData {
        id: "partner-daniel",
        name: "Daniel",
        age: 28,
        bio: "Museum dates, podcasts, and thoughtful chats over late-night tea.",
        occupation: "Architect",
        height_m: 1.79,
        personality_summary: "Analytical, patient, considerate, and quietly romantic.",
        preference_summary: "Looking for emotional depth and shared long-term goals.",
        gender: Gender::Male,
        vibe: "intellectual",
    },
];

/// Turn seed data into an agent
///
/// Without an explicit avatar, one is generated from the agent's vibe with a
/// seed derived from `{id}-{name}-{occupation}-{vibe}`.
pub fn initialize_agent(data: &AgentSeedData<'_>, avatar: Option<AvatarConfig>) -> AgentProfile {
    let avatar = avatar.unwrap_or_else(|| {
        let seed = derive_seed(&format!(
            "{}-{}-{}-{}",
            data.id, data.name, data.occupation, data.vibe
        ));
        generate_avatar(data.vibe, seed, data.gender)
    });

    AgentProfile {
        id: data.id.to_string(),
        name: data.name.to_string(),
        age: data.age,
        bio: data.bio.to_string(),
        occupation: data.occupation.to_string(),
        height_m: data.height_m,
        personality_summary: data.personality_summary.to_string(),
        preference_summary: data.preference_summary.to_string(),
        avatar,
    }
}

pub fn partner_roster() -> Vec<AgentProfile> {
    PARTNER_DATA
        .iter()
        .map(|data| initialize_agent(data, None))
        .collect()
}

/// Coarse vibe of a personality, used to pick an avatar for the user agent
pub fn vibe_from_personality(personality: &PersonalityProfile) -> &'static str {
    let text = format!(
        "{} {}",
        personality.core_vibe,
        personality.top_vibes.join(" ")
    )
    .to_lowercase();

    if text.contains("playful") || text.contains("expressive") {
        "playful"
    } else if text.contains("organized") || text.contains("intentional") {
        "organized"
    } else if text.contains("adventurous") {
        "adventurous"
    } else if text.contains("intellectual") {
        "intellectual"
    } else if text.contains("romantic") {
        "romantic"
    } else {
        "cozy"
    }
}

/// Agent standing in for the player during simulations
pub fn initialize_user_agent(
    setup: &PlayerSetup,
    personality: &PersonalityProfile,
    avatar: &AvatarConfig,
) -> AgentProfile {
    let id = format!(
        "user-{}",
        derive_seed(&format!("{}-{}", setup.name, setup.birth_date))
    );
    let bio = format!(
        "From {}, prefers {}.",
        setup.location,
        setup.looking_for_gender.as_str()
    );
    let personality_summary = format!(
        "{}. Communication: {}. Relationship focus: {}.",
        personality.core_vibe, personality.communication_style, personality.relationship_focus
    );
    let preference_summary = format!(
        "Love style: {}. Top vibes: {}.",
        personality.love_style,
        personality.top_vibes.join(", ")
    );

    initialize_agent(
        &AgentSeedData {
            id: &id,
            name: &setup.name,
            age: 25,
            bio: &bio,
            occupation: "Player",
            height_m: 1.7,
            personality_summary: &personality_summary,
            preference_summary: &preference_summary,
            gender: setup.gender,
            vibe: vibe_from_personality(personality),
        },
        Some(avatar.clone()),
    )
}
