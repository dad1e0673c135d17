use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::assessments::dtos::{
    AnalyzeRequestDto, AnalyzeResponseDto, AssessmentResponseDto,
};
use crate::features::assessments::services::AssessmentService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Run the mock AI analysis on an uploaded video
///
/// Blocks for the simulated inference time (about two seconds) and responds
/// with the created assessment.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequestDto,
    responses(
        (status = 200, description = "Analysis completed", body = AnalyzeResponseDto),
        (status = 400, description = "Missing media ID or media is not a video"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Media not found")
    ),
    tag = "assessments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn analyze(
    user: AuthenticatedUser,
    State(service): State<Arc<AssessmentService>>,
    AppJson(dto): AppJson<AnalyzeRequestDto>,
) -> Result<Json<AnalyzeResponseDto>> {
    let assessment = service.analyze(&user, dto).await?;
    Ok(Json(AnalyzeResponseDto {
        success: true,
        assessment,
    }))
}

/// List the caller's assessments, newest first
#[utoipa::path(
    get,
    path = "/api/assessments",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of the user's assessments", body = ApiResponse<Vec<AssessmentResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "assessments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_assessments(
    user: AuthenticatedUser,
    State(service): State<Arc<AssessmentService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AssessmentResponseDto>>>> {
    let (assessments, total) = service
        .list_by_user(&user.sub, params.offset(), params.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(assessments),
        None,
        Some(Meta { total }),
    )))
}

/// Get an assessment by ID
#[utoipa::path(
    get,
    path = "/api/assessments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assessment ID")
    ),
    responses(
        (status = 200, description = "Assessment found", body = ApiResponse<AssessmentResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Assessment not found")
    ),
    tag = "assessments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_assessment(
    user: AuthenticatedUser,
    State(service): State<Arc<AssessmentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssessmentResponseDto>>> {
    let assessment = service.get_by_id(id, &user.sub).await?;
    Ok(Json(ApiResponse::success(Some(assessment), None, None)))
}
