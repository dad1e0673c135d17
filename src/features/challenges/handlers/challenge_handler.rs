use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::challenges::dtos::{
    ChallengeDetailDto, ChallengeMembershipDto, ChallengeResponseDto, MyChallengeDto,
    SubmitChallengeDto,
};
use crate::features::challenges::services::ChallengeService;
use crate::shared::types::ApiResponse;

/// List joinable challenges
///
/// Every unexpired challenge, each flagged with whether the caller has
/// already joined it.
#[utoipa::path(
    get,
    path = "/api/challenges",
    responses(
        (status = 200, description = "List of active challenges", body = ApiResponse<Vec<ChallengeResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "challenges",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_challenges(
    user: AuthenticatedUser,
    State(service): State<Arc<ChallengeService>>,
) -> Result<Json<ApiResponse<Vec<ChallengeResponseDto>>>> {
    let challenges = service.list_active(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(challenges), None, None)))
}

/// Get a challenge with the caller's membership
#[utoipa::path(
    get,
    path = "/api/challenges/{id}",
    params(
        ("id" = Uuid, Path, description = "Challenge ID")
    ),
    responses(
        (status = 200, description = "Challenge found", body = ApiResponse<ChallengeDetailDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Challenge not found")
    ),
    tag = "challenges",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_challenge(
    user: AuthenticatedUser,
    State(service): State<Arc<ChallengeService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ChallengeDetailDto>>> {
    let detail = service.get_detail(id, &user.sub).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Join a challenge
#[utoipa::path(
    post,
    path = "/api/challenges/{id}/join",
    params(
        ("id" = Uuid, Path, description = "Challenge ID")
    ),
    responses(
        (status = 201, description = "Challenge joined", body = ApiResponse<ChallengeMembershipDto>),
        (status = 400, description = "Challenge has expired"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Challenge not found"),
        (status = 409, description = "Already joined")
    ),
    tag = "challenges",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn join_challenge(
    user: AuthenticatedUser,
    State(service): State<Arc<ChallengeService>>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ChallengeMembershipDto>>)> {
    let membership = service.join(id, &user.sub).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(membership),
            Some("Challenge joined successfully".to_string()),
            None,
        )),
    ))
}

/// Attach submission evidence to a joined challenge
#[utoipa::path(
    post,
    path = "/api/challenges/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Challenge ID")
    ),
    request_body = SubmitChallengeDto,
    responses(
        (status = 200, description = "Submission attached", body = ApiResponse<ChallengeMembershipDto>),
        (status = 400, description = "Membership is not active"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Challenge not joined or media not found")
    ),
    tag = "challenges",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn submit_challenge(
    user: AuthenticatedUser,
    State(service): State<Arc<ChallengeService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SubmitChallengeDto>,
) -> Result<Json<ApiResponse<ChallengeMembershipDto>>> {
    let membership = service.submit(id, &user.sub, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(membership),
        Some("Submission attached successfully".to_string()),
        None,
    )))
}

/// List the caller's joined challenges
#[utoipa::path(
    get,
    path = "/api/challenges/me",
    responses(
        (status = 200, description = "The caller's memberships with challenges", body = ApiResponse<Vec<MyChallengeDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "challenges",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn my_challenges(
    user: AuthenticatedUser,
    State(service): State<Arc<ChallengeService>>,
) -> Result<Json<ApiResponse<Vec<MyChallengeDto>>>> {
    let challenges = service.my_challenges(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(challenges), None, None)))
}
