use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{build_avatar_profile, rank_candidates, spawn_lobby, LOBBY_SIZE};
use crate::models::{AvatarProfileRequest, LobbyResponse, RankCandidatesRequest, RankCandidatesResponse};
use crate::routes::{missing_fields, validation_failed};

/// Configure profile, partners board and lobby routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile/avatar", web::post().to(build_profile))
        .route("/profile/compatibility", web::post().to(rank_partners))
        .route("/lobby", web::get().to(lobby));
}

/// Build avatar, personality, candidates and user agent
///
/// POST /api/v1/profile/avatar
///
/// Request body:
/// ```json
/// {
///   "playerSetup": { "name": "Ava", "birthDate": "1998-04-12", ... },
///   "loveAnswers": { "q1": "...", "q5": "..." },
///   "reroll": false
/// }
/// ```
async fn build_profile(req: web::Json<AvatarProfileRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let (Some(setup), Some(answers)) = (&req.player_setup, &req.love_answers) else {
        return missing_fields("playerSetup and loveAnswers are required.");
    };

    tracing::info!(
        "Building avatar profile for {} ({} answers, reroll: {})",
        setup.name,
        answers.len(),
        req.reroll
    );

    let profile = build_avatar_profile(setup, answers, req.reroll);

    tracing::debug!(
        "Primary vibe {:?}, {} candidates",
        profile.personality.top_vibes.first(),
        profile.candidates.len()
    );

    HttpResponse::Ok().json(profile)
}

/// Re-score candidates into the partners board
///
/// POST /api/v1/profile/compatibility
async fn rank_partners(req: web::Json<RankCandidatesRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let (Some(answers), Some(personality)) = (&req.love_answers, &req.personality) else {
        return missing_fields("loveAnswers and personality are required.");
    };

    let partners = rank_candidates(&req.candidates, answers, &req.player_name, personality);

    tracing::info!(
        "Ranked {} candidates for {}",
        partners.len(),
        req.player_name
    );

    HttpResponse::Ok().json(RankCandidatesResponse { partners })
}

/// Landing-page crowd
///
/// GET /api/v1/lobby
async fn lobby() -> impl Responder {
    HttpResponse::Ok().json(LobbyResponse {
        avatars: spawn_lobby(LOBBY_SIZE),
    })
}
