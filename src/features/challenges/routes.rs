use crate::features::challenges::handlers::{admin_challenge_handler, challenge_handler};
use crate::features::challenges::services::ChallengeService;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

/// Athlete-facing challenge routes
pub fn routes(service: Arc<ChallengeService>) -> Router {
    Router::new()
        .route("/api/challenges", get(challenge_handler::list_challenges))
        .route("/api/challenges/me", get(challenge_handler::my_challenges))
        .route(
            "/api/challenges/{id}",
            get(challenge_handler::get_challenge),
        )
        .route(
            "/api/challenges/{id}/join",
            post(challenge_handler::join_challenge),
        )
        .route(
            "/api/challenges/{id}/submit",
            post(challenge_handler::submit_challenge),
        )
        .with_state(service)
}

/// Challenge authoring routes, nested under the admin prefix
pub fn admin_routes(service: Arc<ChallengeService>) -> Router {
    Router::new()
        .route(
            "/challenges",
            post(admin_challenge_handler::create_challenge),
        )
        .route(
            "/challenges",
            get(admin_challenge_handler::list_all_challenges),
        )
        .route(
            "/challenges/{id}",
            delete(admin_challenge_handler::delete_challenge),
        )
        .with_state(service)
}
