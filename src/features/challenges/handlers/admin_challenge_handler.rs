use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::challenges::dtos::{ChallengeResponseDto, CreateChallengeDto};
use crate::features::challenges::services::ChallengeService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Author a new challenge
#[utoipa::path(
    post,
    path = "/api/admin/challenges",
    request_body = CreateChallengeDto,
    responses(
        (status = 201, description = "Challenge created", body = ApiResponse<ChallengeResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_challenge(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ChallengeService>>,
    AppJson(dto): AppJson<CreateChallengeDto>,
) -> Result<(StatusCode, Json<ApiResponse<ChallengeResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let challenge = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(challenge),
            Some("Challenge created successfully".to_string()),
            None,
        )),
    ))
}

/// List every challenge including expired ones (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/challenges",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of all challenges", body = ApiResponse<Vec<ChallengeResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_all_challenges(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ChallengeService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ChallengeResponseDto>>>> {
    let (challenges, total) = service.list_all(params.offset(), params.limit()).await?;

    Ok(Json(ApiResponse::success(
        Some(challenges),
        None,
        Some(Meta { total }),
    )))
}

/// Delete a challenge and its memberships
#[utoipa::path(
    delete,
    path = "/api/admin/challenges/{id}",
    params(
        ("id" = Uuid, Path, description = "Challenge ID")
    ),
    responses(
        (status = 200, description = "Challenge deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Challenge not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_challenge(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ChallengeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Challenge deleted successfully".to_string()),
        None,
    )))
}
