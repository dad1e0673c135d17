use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::assessments::dtos::AssessmentResponseDto;
use crate::features::assessments::services::AssessmentService;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::media::dtos::{
    parse_tags, validate_file, MediaResponseDto, MediaUploadedDto, UploadMediaDto,
};
use crate::features::media::services::MediaService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// State for media handlers
#[derive(Clone)]
pub struct MediaState {
    pub media_service: Arc<MediaService>,
    pub assessment_service: Arc<AssessmentService>,
}

/// Upload a video or image
///
/// Accepts multipart/form-data with:
/// - `file`: The media file to upload (required)
/// - `description`: Optional description text
/// - `tags`: Optional JSON array string of tags, at most 5
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "media",
    request_body(
        content = UploadMediaDto,
        content_type = "multipart/form-data",
        description = "Media upload form with optional description and tags fields",
    ),
    responses(
        (status = 201, description = "Media uploaded successfully", body = ApiResponse<MediaUploadedDto>),
        (status = 400, description = "Invalid file or validation error"),
        (status = 401, description = "Authentication required"),
        (status = 413, description = "File too large")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_media(
    user: AuthenticatedUser,
    State(state): State<MediaState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<MediaUploadedDto>>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut description: Option<String> = None;
    let mut tags: Vec<String> = Vec::new();

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            "description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read description field: {}", e))
                })?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            "tags" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read tags field: {}", e))
                })?;
                if !text.is_empty() {
                    tags = parse_tags(&text).map_err(AppError::BadRequest)?;
                }
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // Validate required fields
    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    validate_file(&content_type, file_data.len()).map_err(AppError::BadRequest)?;

    let media = state
        .media_service
        .upload(
            file_data,
            &file_name,
            &content_type,
            description,
            tags,
            &user.sub,
        )
        .await?;

    let response = MediaUploadedDto {
        id: media.id,
        file_name: media.file_name,
        file_url: media.file_url,
        file_type: media.file_type,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}

/// List the caller's media, newest first
#[utoipa::path(
    get,
    path = "/api/media",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of the user's media", body = ApiResponse<Vec<MediaResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "media",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_media(
    user: AuthenticatedUser,
    State(state): State<MediaState>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MediaResponseDto>>>, AppError> {
    let (media, total) = state
        .media_service
        .list_by_user(&user.sub, params.offset(), params.limit())
        .await?;

    let dtos: Vec<MediaResponseDto> = media.into_iter().map(|m| m.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get a media file by ID
#[utoipa::path(
    get,
    path = "/api/media/{id}",
    params(
        ("id" = Uuid, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media found", body = ApiResponse<MediaResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Media not found")
    ),
    tag = "media",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_media(
    user: AuthenticatedUser,
    State(state): State<MediaState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MediaResponseDto>>, AppError> {
    let media = state.media_service.get_by_id(id, &user.sub).await?;
    Ok(Json(ApiResponse::success(Some(media.into()), None, None)))
}

/// Delete a media file
///
/// Removes the stored object and the metadata row. Assessments made on the
/// media are deleted with it.
#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    params(
        ("id" = Uuid, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Media not found")
    ),
    tag = "media",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_media(
    user: AuthenticatedUser,
    State(state): State<MediaState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.media_service.delete(id, &user.sub).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Media file deleted successfully".to_string()),
        None,
    )))
}

/// List assessments made on a media file
#[utoipa::path(
    get,
    path = "/api/media/{id}/assessments",
    params(
        ("id" = Uuid, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Assessments on the media", body = ApiResponse<Vec<AssessmentResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Media not found")
    ),
    tag = "media",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_media_assessments(
    user: AuthenticatedUser,
    State(state): State<MediaState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<AssessmentResponseDto>>>, AppError> {
    // Ownership check doubles as the 404 for unknown media
    state.media_service.get_by_id(id, &user.sub).await?;

    let assessments = state
        .assessment_service
        .list_by_media(id, &user.sub)
        .await?;

    Ok(Json(ApiResponse::success(Some(assessments), None, None)))
}
