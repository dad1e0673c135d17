use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::dashboard::dtos::{ActivityItemDto, DashboardStatsDto, InsightsDto};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Get the caller's dashboard counters and performance score
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardStatsDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "dashboard",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_stats(
    user: AuthenticatedUser,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardStatsDto>>> {
    let stats = service.stats(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get the caller's recent activity feed
#[utoipa::path(
    get,
    path = "/api/dashboard/activity",
    responses(
        (status = 200, description = "Recent uploads and assessments", body = ApiResponse<Vec<ActivityItemDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "dashboard",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_activity(
    user: AuthenticatedUser,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<ActivityItemDto>>>> {
    let activity = service.activity(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(activity), None, None)))
}

/// Get the caller's AI insights summary
#[utoipa::path(
    get,
    path = "/api/dashboard/insights",
    responses(
        (status = 200, description = "Recent assessment insights", body = ApiResponse<InsightsDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "dashboard",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_insights(
    user: AuthenticatedUser,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<InsightsDto>>> {
    let insights = service.insights(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(insights), None, None)))
}
