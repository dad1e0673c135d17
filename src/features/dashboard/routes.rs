use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create routes for the dashboard feature
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/stats", get(handlers::get_stats))
        .route("/api/dashboard/activity", get(handlers::get_activity))
        .route("/api/dashboard/insights", get(handlers::get_insights))
        .with_state(service)
}
