use serde::Serialize;

/// Quest card shown on the partners board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub vibes: [&'static str; 3],
}

pub static QUESTS: [QuestDescriptor; 3] = [
    QuestDescriptor {
        id: "quest-heartline",
        title: "Heartline Heist",
        description: "Co-op puzzle mission where both agents must reveal values to unlock the vault.",
        vibes: ["intellectual", "organized", "calm"],
    },
    QuestDescriptor {
        id: "quest-cityglow",
        title: "City Glow Run",
        description: "Fast urban quest with mini challenges, humor prompts, and spontaneous choices.",
        vibes: ["playful", "adventurous", "romantic"],
    },
    QuestDescriptor {
        id: "quest-homehaven",
        title: "Home Haven Build",
        description: "Comfort-based simulation to co-design an ideal weekend and conflict strategy.",
        vibes: ["cozy", "calm", "organized"],
    },
];

/// Best quest for a candidate vibe
///
/// A quest fits when one of its vibes appears in the lowercased candidate
/// vibe. The first fitting quest wins, and the first quest is the fallback.
pub fn quest_for_vibe(vibe: &str) -> &'static QuestDescriptor {
    let lower = vibe.to_lowercase();
    QUESTS
        .iter()
        .find(|q| q.vibes.iter().any(|v| lower.contains(v)))
        .unwrap_or(&QUESTS[0])
}

pub fn quest_by_id(id: &str) -> Option<&'static QuestDescriptor> {
    QUESTS.iter().find(|q| q.id == id)
}

pub fn quest_by_title(title: &str) -> Option<&'static QuestDescriptor> {
    QUESTS.iter().find(|q| q.title.eq_ignore_ascii_case(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_for_vibe() {
        assert_eq!(quest_for_vibe("playful").id, "quest-cityglow");
        assert_eq!(quest_for_vibe("Cozy").id, "quest-homehaven");
        // calm fits both Heartline and Home Haven; the first listed wins
        assert_eq!(quest_for_vibe("calm").id, "quest-heartline");
        assert_eq!(quest_for_vibe("elegant").id, "quest-heartline");
    }

    #[test]
    fn test_quest_lookup() {
        assert_eq!(quest_by_id("quest-homehaven").map(|q| q.title), Some("Home Haven Build"));
        assert!(quest_by_id("quest-unknown").is_none());
        assert_eq!(quest_by_title("city glow run").map(|q| q.id), Some("quest-cityglow"));
    }
}
