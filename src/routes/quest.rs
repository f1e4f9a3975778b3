use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde_json::Value;

use crate::core::quest_interaction::{
    fallback_decision, fallback_fill_blank, fallback_hot_take, fallback_quest_reply,
    fallback_truth, merge_decision, merge_fill_blank, merge_hot_take, merge_truth,
    safe_json_parse, setup_seed,
};
use crate::models::{QuestChatResponse, QuestInteractionRequest, QUEST_MODES};
use crate::routes::{error_response, AppState};
use crate::services::prompts::{
    decision_prompt, fill_blank_prompt, hot_take_prompt, quest_chat_prompt, truth_setup_prompt,
};
use crate::services::DialogueRequest;

/// Configure quest mini-game routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/quest/interaction", web::post().to(quest_interaction));
}

/// Generated text, or `None` when the dialogue service is unavailable
async fn generate(state: &AppState, prompt: String) -> Option<String> {
    match state
        .dialogue
        .complete(DialogueRequest::new(prompt, state.temperatures.reply))
        .await
    {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("Quest generation failed, using fallback: {}", e);
            None
        }
    }
}

/// Generated text parsed as a JSON object
async fn generate_json(state: &AppState, prompt: String) -> Option<Value> {
    generate(state, prompt).await.as_deref().and_then(safe_json_parse)
}

/// One step of a quest mini-game
///
/// POST /api/v1/quest/interaction
///
/// Request body carries a `mode`: `truth_setup`, `hot_take_setup`,
/// `fill_blank_setup`, `chat` or `decision`. Every mode answers 200 with
/// the deterministic fallback filling anything the dialogue service does
/// not provide.
async fn quest_interaction(state: web::Data<AppState>, body: web::Json<Value>) -> impl Responder {
    let body = body.into_inner();
    let mode = body
        .get("mode")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if !QUEST_MODES.contains(&mode.as_str()) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Unsupported mode",
            format!("Unsupported mode: '{}'", mode),
        );
    }

    let request: QuestInteractionRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid payload", e.to_string());
        }
    };

    tracing::info!(
        "Quest interaction '{}' with {}",
        mode,
        request.candidate().name
    );

    match request {
        QuestInteractionRequest::TruthSetup {
            candidate,
            user_statements,
            user_lie_index,
        } => {
            let fallback = fallback_truth(&candidate, setup_seed(&user_statements, &candidate.name));
            let prompt = truth_setup_prompt(&candidate, &user_statements, user_lie_index);
            let parsed = generate_json(&state, prompt).await;
            HttpResponse::Ok().json(merge_truth(parsed.as_ref(), fallback))
        }
        QuestInteractionRequest::HotTakeSetup {
            candidate,
            user_opinions,
        } => {
            let fallback = fallback_hot_take(setup_seed(&user_opinions, &candidate.name));
            let prompt = hot_take_prompt(&candidate, &user_opinions);
            let parsed = generate_json(&state, prompt).await;
            HttpResponse::Ok().json(merge_hot_take(parsed.as_ref(), fallback))
        }
        QuestInteractionRequest::FillBlankSetup {
            candidate,
            user_answers,
            starters,
        } => {
            let fallback = fallback_fill_blank(&starters, &user_answers);
            let prompt = fill_blank_prompt(&candidate, &starters, &user_answers);
            let parsed = generate_json(&state, prompt).await;
            HttpResponse::Ok().json(merge_fill_blank(parsed.as_ref(), fallback))
        }
        QuestInteractionRequest::Chat {
            candidate,
            quest_title,
            prompt,
            context,
            history,
            message,
        } => {
            let prompt = quest_chat_prompt(&candidate, &quest_title, &prompt, &context, &history, &message);
            let reply = generate(&state, prompt)
                .await
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| fallback_quest_reply(&candidate));
            HttpResponse::Ok().json(QuestChatResponse { reply })
        }
        QuestInteractionRequest::Decision {
            candidate,
            quest_title,
            context,
            history,
            user_interested,
        } => {
            let fallback = fallback_decision(&candidate, user_interested);
            let prompt = decision_prompt(&candidate, &quest_title, &context, &history, user_interested);
            let parsed = generate_json(&state, prompt).await;
            HttpResponse::Ok().json(merge_decision(parsed.as_ref(), fallback))
        }
    }
}
