use crate::features::profiles::handlers::profile_handler;
use crate::features::profiles::services::ProfileService;
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

pub fn routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route("/api/profile", get(profile_handler::get_profile))
        .route("/api/profile", put(profile_handler::upsert_profile))
        .route(
            "/api/profile/stats",
            get(profile_handler::get_profile_stats),
        )
        .with_state(service)
}
