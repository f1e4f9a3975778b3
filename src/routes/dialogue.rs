use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::fallback::{fallback_avatar_reply, fallback_question, sanitize_question};
use crate::core::{initialize_user_agent, partner_roster};
use crate::models::{
    AgentRosterResponse, AvatarChatRequest, AvatarChatResponse, QuizQuestionRequest,
    QuizQuestionResponse, SimulateRequest, SimulateResponse,
};
use crate::routes::{missing_fields, validation_failed, AppState};
use crate::services::prompts::{avatar_chat_prompt, interview_prompt};
use crate::services::{run_agent_interaction, DialogueRequest};

/// Configure generated-dialogue routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/quiz/question", web::post().to(next_question))
        .route("/avatar/chat", web::post().to(avatar_chat))
        .route("/agents", web::get().to(list_agents))
        .route("/agents/simulate", web::post().to(simulate_agents));
}

/// Next interview question
///
/// POST /api/v1/quiz/question
///
/// Always answers 200: the generated question when available, otherwise a
/// fixed question picked by how many exchanges already happened.
async fn next_question(
    state: web::Data<AppState>,
    req: web::Json<QuizQuestionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let prompt = interview_prompt(req.player_setup.as_ref(), &req.exchanges);
    let generated = match state
        .dialogue
        .complete(DialogueRequest::new(prompt, state.temperatures.reply))
        .await
    {
        Ok(text) => sanitize_question(&text),
        Err(e) => {
            tracing::warn!("Question generation failed, using fallback: {}", e);
            None
        }
    };

    let question = generated.unwrap_or_else(|| fallback_question(req.exchanges.len()).to_string());

    tracing::info!("Serving interview question #{}", req.exchanges.len() + 1);

    HttpResponse::Ok().json(QuizQuestionResponse { question })
}

/// Chat with the player's own avatar
///
/// POST /api/v1/avatar/chat
async fn avatar_chat(
    state: web::Data<AppState>,
    req: web::Json<AvatarChatRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let message = req.message.as_deref().map(str::trim).unwrap_or_default();
    let (Some(personality), Some(answers)) = (&req.personality, &req.love_answers) else {
        return missing_fields("message, personality and loveAnswers are required.");
    };
    if message.is_empty() {
        return missing_fields("message, personality and loveAnswers are required.");
    }

    let prompt = avatar_chat_prompt(
        message,
        personality,
        answers,
        &req.quiz_conversation,
        &req.history,
    );

    let reply = match state
        .dialogue
        .complete(DialogueRequest::new(prompt, state.temperatures.reply))
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Avatar reply generation failed, using fallback: {}", e);
            fallback_avatar_reply(message, personality)
        }
    };

    HttpResponse::Ok().json(AvatarChatResponse { reply })
}

/// Partner roster
///
/// GET /api/v1/agents
async fn list_agents() -> impl Responder {
    HttpResponse::Ok().json(AgentRosterResponse {
        partners: partner_roster(),
    })
}

/// Simulate the user agent against every partner
///
/// POST /api/v1/agents/simulate
///
/// Partners are simulated one after another so each conversation sees the
/// dialogue service alone.
async fn simulate_agents(
    state: web::Data<AppState>,
    req: web::Json<SimulateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let SimulateRequest {
        player_setup: Some(setup),
        personality: Some(personality),
        avatar: Some(avatar),
        love_answers: Some(_),
        user_agent,
    } = req.into_inner()
    else {
        return missing_fields("playerSetup, personality, avatar and loveAnswers are required.");
    };

    let user_agent =
        user_agent.unwrap_or_else(|| initialize_user_agent(&setup, &personality, &avatar));
    let partners = partner_roster();

    tracing::info!(
        "Simulating {} against {} partners",
        user_agent.id,
        partners.len()
    );

    let mut interactions = Vec::with_capacity(partners.len());
    for partner in &partners {
        interactions.push(run_agent_interaction(
            state.dialogue.as_ref(),
            &user_agent,
            partner,
            state.temperatures.turn,
        )
        .await);
    }

    HttpResponse::Ok().json(SimulateResponse {
        user_agent,
        partners,
        interactions,
    })
}
