use crate::core::{classifier::love_profile, fallback::scripted_conversation, quests::quest_for_vibe};
use crate::models::{CandidateSimulation, InterviewAnswers, MatchCandidate, PersonalityProfile};

/// Bonus when a candidate's vibe mentions one of the player's top vibes
const VIBE_MATCH_BONUS: u32 = 7;
/// Display scores never exceed this
const DISPLAY_CAP: u32 = 99;

/// Re-score a candidate against the player's answers for display
///
/// `min(99, base + 7 if the lowercased candidate vibe contains a top vibe
/// + compatibility bonus)`. This pass is independent of the pool's own
/// same-vibe boost and uses its own cap.
pub fn adjusted_compatibility(base: u32, candidate_vibe: &str, answers: &InterviewAnswers) -> u32 {
    let love = love_profile(answers);
    let lower = candidate_vibe.to_lowercase();
    let vibe_match = if love.top_vibes.iter().any(|v| lower.contains(v)) {
        VIBE_MATCH_BONUS
    } else {
        0
    };
    base.saturating_add(vibe_match)
        .saturating_add(love.compatibility_bonus)
        .min(DISPLAY_CAP)
}

/// Build the partners board: every candidate re-scored, paired with a quest
/// and a scripted introduction, highest score first
///
/// Ties keep the order of `candidates`.
pub fn rank_candidates(
    candidates: &[MatchCandidate],
    answers: &InterviewAnswers,
    player_name: &str,
    personality: &PersonalityProfile,
) -> Vec<CandidateSimulation> {
    let mut board: Vec<CandidateSimulation> = candidates
        .iter()
        .map(|candidate| {
            let score = adjusted_compatibility(candidate.compatibility, &candidate.vibe, answers);
            let quest = quest_for_vibe(&candidate.vibe);
            let rounds = scripted_conversation(
                player_name,
                &candidate.name,
                &candidate.vibe,
                &personality.communication_style,
                &personality.relationship_focus,
            );

            CandidateSimulation {
                candidate: candidate.clone(),
                score,
                rounds,
                recommended_quest_id: quest.id.to_string(),
                recommended_quest: quest.title.to_string(),
                why_it_fits: format!(
                    "{} Best match for {} vibe with your {} style.",
                    quest.description, candidate.vibe, personality.communication_style
                ),
            }
        })
        .collect();

    board.sort_by(|a, b| b.score.cmp(&a.score));
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{candidates::generate_candidates, classifier::classify};

    fn full_answers() -> InterviewAnswers {
        InterviewAnswers::new()
            .with("q1", "I like direct honest talk")
            .with("q2", "I want long-term stability")
            .with("q3", "quality time and listening")
            .with("q4", "cozy and calm")
            .with("q5", "slow and steady")
    }

    #[test]
    fn test_default_answers() {
        let empty = InterviewAnswers::new();
        // default top vibes are cozy and calm, bonus 5
        assert_eq!(adjusted_compatibility(60, "cozy", &empty), 72);
        assert_eq!(adjusted_compatibility(60, "elegant", &empty), 65);
    }

    #[test]
    fn test_vibe_match_is_case_insensitive_substring() {
        let empty = InterviewAnswers::new();
        assert_eq!(adjusted_compatibility(60, "Super-CALM", &empty), 72);
    }

    #[test]
    fn test_clamped_to_99() {
        assert_eq!(adjusted_compatibility(95, "cozy", &full_answers()), 99);
        assert_eq!(adjusted_compatibility(u32::MAX, "cozy", &full_answers()), 99);
    }

    #[test]
    fn test_rank_candidates_sorted() {
        let answers = full_answers();
        let personality = classify(&answers);
        let pool = generate_candidates("calm", 2535);

        let board = rank_candidates(&pool, &answers, "Ava", &personality);

        assert_eq!(board.len(), pool.len());
        for pair in board.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for entry in &board {
            assert!(entry.score <= 99);
            assert_eq!(entry.rounds.len(), 4);
            assert!(entry.why_it_fits.contains(&entry.candidate.vibe));
        }
    }
}
