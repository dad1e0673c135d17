use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::features::assessments::services::AssessmentService;
use crate::features::media::dtos::MAX_FILE_SIZE;
use crate::features::media::handlers::{media_handler, MediaState};
use crate::features::media::services::MediaService;

/// Create routes for the media feature
pub fn routes(
    media_service: Arc<MediaService>,
    assessment_service: Arc<AssessmentService>,
) -> Router {
    let state = MediaState {
        media_service,
        assessment_service,
    };

    Router::new()
        .route(
            "/api/upload",
            // Allow body size up to MAX_FILE_SIZE + buffer for multipart overhead
            post(media_handler::upload_media).layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024)),
        )
        .route("/api/media", get(media_handler::list_media))
        .route("/api/media/{id}", get(media_handler::get_media))
        .route("/api/media/{id}", delete(media_handler::delete_media))
        .route(
            "/api/media/{id}/assessments",
            get(media_handler::list_media_assessments),
        )
        .with_state(state)
}
