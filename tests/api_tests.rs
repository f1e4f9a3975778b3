// HTTP API tests for Lume Quest

use actix_web::{http::StatusCode, test, web, App};
use lume_quest::routes::{configure_routes, AppState};
use lume_quest::services::{OfflineDialogue, SessionStore, Temperatures};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state() -> AppState {
    AppState {
        dialogue: Arc::new(OfflineDialogue),
        sessions: Arc::new(SessionStore::in_memory(100, 60)),
        temperatures: Temperatures::default(),
    }
}

fn player_setup() -> Value {
    json!({
        "name": "Ava",
        "birthDate": "1998-04-12",
        "location": "Singapore",
        "gender": "female",
        "lookingForGender": "male",
        "minPartnerAge": 24,
        "maxPartnerAge": 34
    })
}

fn love_answers() -> Value {
    json!({
        "q1": "I like direct honest talk",
        "q2": "I want long-term stability",
        "q3": "quality time and listening",
        "q4": "cozy and calm",
        "q5": "slow and steady"
    })
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_reports_offline_dialogue() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dialogue"], "offline");
}

#[actix_web::test]
async fn test_avatar_profile() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/profile/avatar")
        .set_json(json!({ "playerSetup": player_setup(), "loveAnswers": love_answers() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["personality"]["communicationStyle"], "direct and clear");
    assert_eq!(body["personality"]["topVibes"], json!(["calm", "cozy"]));
    assert_eq!(body["candidates"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["userAgent"]["occupation"], "Player");
    assert_eq!(body["avatar"]["hairStyle"], "long");
}

#[actix_web::test]
async fn test_avatar_profile_requires_setup() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/profile/avatar")
        .set_json(json!({ "loveAnswers": love_answers() }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], 400);
}

#[actix_web::test]
async fn test_compatibility_board() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/profile/avatar")
        .set_json(json!({ "playerSetup": player_setup(), "loveAnswers": love_answers() }))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/profile/compatibility")
        .set_json(json!({
            "playerName": "Ava",
            "loveAnswers": love_answers(),
            "personality": profile["personality"],
            "candidates": profile["candidates"]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let partners = body["partners"].as_array().cloned().unwrap_or_default();
    assert_eq!(partners.len(), 8);
    let scores: Vec<u64> = partners.iter().filter_map(|p| p["score"].as_u64()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|s| *s <= 99));
}

#[actix_web::test]
async fn test_compatibility_validates_player_name() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/profile/compatibility")
        .set_json(json!({ "playerName": "", "loveAnswers": {}, "candidates": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_quiz_question_falls_back() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/quiz/question")
        .set_json(json!({
            "exchanges": [{ "question": "Q?", "answer": "A" }, { "question": "Q2?", "answer": "B" }]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["question"],
        "How do you prefer to resolve misunderstandings in relationships?"
    );
}

#[actix_web::test]
async fn test_avatar_chat_falls_back() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/profile/avatar")
        .set_json(json!({ "playerSetup": player_setup(), "loveAnswers": love_answers() }))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/avatar/chat")
        .set_json(json!({
            "message": "  what should I plan for a first date?  ",
            "personality": profile["personality"],
            "loveAnswers": love_answers()
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let reply = body["reply"].as_str().unwrap_or_default();
    assert!(reply.starts_with("go for a clear, low-pressure plan"));
}

#[actix_web::test]
async fn test_avatar_chat_requires_message() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/avatar/chat")
        .set_json(json!({ "message": "   ", "loveAnswers": love_answers() }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_simulate_agents_offline() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/profile/avatar")
        .set_json(json!({ "playerSetup": player_setup(), "loveAnswers": love_answers() }))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/agents/simulate")
        .set_json(json!({
            "playerSetup": player_setup(),
            "personality": profile["personality"],
            "avatar": profile["avatar"],
            "loveAnswers": love_answers()
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["partners"].as_array().map(Vec::len), Some(13));
    let interactions = body["interactions"].as_array().cloned().unwrap_or_default();
    assert_eq!(interactions.len(), 13);
    assert!(interactions.iter().all(|i| i["endedBy"] == "max-turns"));
    assert_eq!(body["userAgent"]["id"], profile["userAgent"]["id"]);
}

#[actix_web::test]
async fn test_lobby() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/lobby").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["avatars"].as_array().map(Vec::len), Some(30));
    assert_eq!(body["avatars"][0]["avatar"]["seed"], 100);
}

#[actix_web::test]
async fn test_session_lifecycle() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/session/ava-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/v1/session/ava-1")
        .set_json(json!({ "playerSetup": player_setup(), "loveAnswers": love_answers() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["key"], "quest-dating-session-v1:ava-1");

    // overwrite drops fields that are not sent again
    let req = test::TestRequest::put()
        .uri("/api/v1/session/ava-1")
        .set_json(json!({ "loveAnswers": love_answers() }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/v1/session/ava-1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.get("playerSetup").is_none());
    assert_eq!(body["loveAnswers"]["q4"], "cozy and calm");

    let req = test::TestRequest::delete().uri("/api/v1/session/ava-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/api/v1/session/ava-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_session() {
    let app = init_app!();
    let req = test::TestRequest::post().uri("/api/v1/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_str().unwrap_or_default().to_string();
    assert_eq!(id.len(), 36);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/session/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_list_agents() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/agents").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let partners = body["partners"].as_array().cloned().unwrap_or_default();
    assert_eq!(partners.len(), 13);
    assert_eq!(partners[0]["name"], "Angie");
}

fn quest_candidate() -> Value {
    json!({ "id": "cand-1", "name": "Kai", "vibe": "adventurous" })
}

#[actix_web::test]
async fn test_quest_truth_setup_falls_back() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/quest/interaction")
        .set_json(json!({
            "mode": "truth_setup",
            "candidate": quest_candidate(),
            "userStatements": ["a", "b", "c"],
            "userLieIndex": 1
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // seed = len("a|b|c") + len("Kai") = 8
    assert_eq!(body["partnerStatements"][1], "I dislike all outdoor activities.");
    assert_eq!(body["partnerLieIndex"], 1);
    assert_eq!(body["partnerGuess"], 2);
}

#[actix_web::test]
async fn test_quest_chat_falls_back() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/quest/interaction")
        .set_json(json!({
            "mode": "chat",
            "candidate": quest_candidate(),
            "questTitle": "Truth Lab",
            "message": "that was surprising",
            "history": [{ "role": "partner", "text": "Your turn!" }]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["reply"],
        "I see what you mean. Kai would probably say: let's unpack it and be honest about what surprised us."
    );
}

#[actix_web::test]
async fn test_quest_decision_includes_contact() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/quest/interaction")
        .set_json(json!({
            "mode": "decision",
            "candidate": quest_candidate(),
            "userInterested": true
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["partnerInterested"], true);
    assert_eq!(body["partnerContact"]["email"], "kai@lovealchemy-match.com");
    assert_eq!(body["partnerContact"]["phone"], "+65 0000 0500");
}

#[actix_web::test]
async fn test_quest_unsupported_mode() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/quest/interaction")
        .set_json(json!({ "mode": "speed_round", "candidate": quest_candidate() }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unsupported mode");
}

#[actix_web::test]
async fn test_quest_missing_candidate() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/quest/interaction")
        .set_json(json!({ "mode": "hot_take_setup", "userOpinions": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid payload");
}
