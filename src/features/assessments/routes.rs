use crate::features::assessments::handlers::assessment_handler;
use crate::features::assessments::services::AssessmentService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn routes(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/analyze", post(assessment_handler::analyze))
        .route(
            "/api/assessments",
            get(assessment_handler::list_assessments),
        )
        .route(
            "/api/assessments/{id}",
            get(assessment_handler::get_assessment),
        )
        .with_state(service)
}
