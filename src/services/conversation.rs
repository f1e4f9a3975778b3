use crate::core::fallback::{fallback_turn, parse_turn, TurnReply, OPENING_MESSAGE};
use crate::models::{AgentInteraction, AgentProfile, AgentTurn, InteractionEnd};
use crate::services::dialogue::{DialogueGenerator, DialogueRequest};
use crate::services::prompts::turn_prompt;

/// Upper bound on turns in one simulated conversation
pub const MAX_CONVERSATION_EXCHANGES: usize = 10;
/// Both agents start out willing to keep talking
const INITIAL_SCORE: f64 = 7.0;
/// A speaker scoring below this walks away
const LOW_SCORE_THRESHOLD: f64 = 7.0;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    User,
    Partner,
}

fn average_score(user: f64, partner: f64) -> u32 {
    ((user + partner) / 2.0 * 10.0).round() as u32
}

async fn generate_turn(
    generator: &dyn DialogueGenerator,
    speaker: &AgentProfile,
    counterpart: &AgentProfile,
    incoming: &str,
    history: &[AgentTurn],
    temperature: f32,
) -> TurnReply {
    let prompt = turn_prompt(speaker, counterpart, incoming, history);
    match generator
        .complete(DialogueRequest::new(prompt, temperature))
        .await
    {
        Ok(text) => parse_turn(&text),
        Err(e) => {
            tracing::warn!(
                speaker = %speaker.id,
                round = history.len(),
                "Turn generation failed, using fallback: {}",
                e
            );
            fallback_turn(history.len())
        }
    }
}

/// Simulate a conversation between the user agent and one partner
///
/// Turns alternate starting with the user agent, which answers a fixed
/// opening message. After every turn the speaker's score is updated; a score
/// below 7.0 (fractions count, 6.5 walks away) ends the conversation
/// immediately, otherwise it runs for [`MAX_CONVERSATION_EXCHANGES`] turns.
pub async fn run_agent_interaction(
    generator: &dyn DialogueGenerator,
    user: &AgentProfile,
    partner: &AgentProfile,
    temperature: f32,
) -> AgentInteraction {
    let mut rounds: Vec<AgentTurn> = Vec::with_capacity(MAX_CONVERSATION_EXCHANGES);
    let mut user_score = INITIAL_SCORE;
    let mut partner_score = INITIAL_SCORE;
    let mut side = Side::User;
    let mut incoming = OPENING_MESSAGE.to_string();
    let mut ended_by = InteractionEnd::MaxTurns;

    while rounds.len() < MAX_CONVERSATION_EXCHANGES {
        let (speaker, counterpart) = match side {
            Side::User => (user, partner),
            Side::Partner => (partner, user),
        };

        let turn = generate_turn(generator, speaker, counterpart, &incoming, &rounds, temperature).await;
        rounds.push(AgentTurn {
            speaker: speaker.name.clone(),
            text: turn.response.clone(),
            score: turn.score,
        });

        match side {
            Side::User => user_score = turn.score,
            Side::Partner => partner_score = turn.score,
        }
        incoming = turn.response;

        if turn.score < LOW_SCORE_THRESHOLD {
            ended_by = InteractionEnd::LowScore;
            break;
        }

        side = match side {
            Side::User => Side::Partner,
            Side::Partner => Side::User,
        };
    }

    tracing::debug!(
        partner = %partner.id,
        turns = rounds.len(),
        ?ended_by,
        "Agent interaction finished"
    );

    AgentInteraction {
        partner: partner.clone(),
        rounds,
        ended_by,
        final_user_score: user_score,
        final_partner_score: partner_score,
        average_score: average_score(user_score, partner_score),
    }
}
