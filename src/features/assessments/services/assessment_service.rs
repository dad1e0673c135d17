use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::assessments::dtos::{AnalyzeRequestDto, AssessmentResponseDto};
use crate::features::assessments::generator;
use crate::features::assessments::models::Assessment;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::media::models::MediaType;
use crate::features::media::services::MediaService;

/// Simulated inference time for the mock analysis
const ANALYSIS_DELAY: Duration = Duration::from_secs(2);

/// Service for assessment operations
pub struct AssessmentService {
    pool: PgPool,
    media_service: Arc<MediaService>,
}

impl AssessmentService {
    pub fn new(pool: PgPool, media_service: Arc<MediaService>) -> Self {
        Self {
            pool,
            media_service,
        }
    }

    /// Run the mock analysis on a video and persist the assessment.
    ///
    /// The media must exist, belong to the caller and be a video. The
    /// analysis-type label is recorded on the row but does not change the
    /// generated output.
    pub async fn analyze(
        &self,
        user: &AuthenticatedUser,
        dto: AnalyzeRequestDto,
    ) -> Result<AssessmentResponseDto> {
        let media_id = dto
            .media_id
            .ok_or_else(|| AppError::BadRequest("Media ID is required".to_string()))?;

        let media = self.media_service.get_by_id(media_id, &user.sub).await?;

        if media.file_type != MediaType::Video {
            return Err(AppError::BadRequest(
                "Only video files can be analyzed".to_string(),
            ));
        }

        let assessment_type = dto
            .analysis_type
            .unwrap_or_else(|| "comprehensive".to_string());

        tokio::time::sleep(ANALYSIS_DELAY).await;

        let outcome = generator::generate();
        let results = serde_json::to_value(&outcome.results)
            .map_err(|e| AppError::Internal(format!("Failed to serialize analysis: {}", e)))?;

        let assessment = sqlx::query_as::<_, Assessment>(
            r#"
            INSERT INTO assessments (user_id, media_id, assessment_type, results, score, recommendations)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, media_id, assessment_type, results, score,
                      recommendations, created_at
            "#,
        )
        .bind(&user.sub)
        .bind(media.id)
        .bind(&assessment_type)
        .bind(&results)
        .bind(outcome.score)
        .bind(&outcome.recommendations)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save assessment: {:?}", e);
            AppError::Database(e)
        })?;

        info!(
            "Assessment created: id={}, media={}, score={}, user={}",
            assessment.id, assessment.media_id, assessment.score, user.sub
        );

        Ok(assessment.into())
    }

    /// List the user's assessments, newest first
    pub async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<AssessmentResponseDto>, i64)> {
        let assessments = sqlx::query_as::<_, Assessment>(
            r#"
            SELECT id, user_id, media_id, assessment_type, results, score,
                   recommendations, created_at
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list assessments: {:?}", e);
            AppError::Database(e)
        })?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assessments WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count assessments: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok((
            assessments.into_iter().map(|a| a.into()).collect(),
            total,
        ))
    }

    /// Get an assessment owned by the user
    pub async fn get_by_id(&self, id: Uuid, user_id: &str) -> Result<AssessmentResponseDto> {
        let assessment = sqlx::query_as::<_, Assessment>(
            r#"
            SELECT id, user_id, media_id, assessment_type, results, score,
                   recommendations, created_at
            FROM assessments
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get assessment by ID: {:?}", e);
            AppError::Database(e)
        })?;

        assessment
            .map(|a| a.into())
            .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))
    }

    /// List assessments made on one media file, newest first
    pub async fn list_by_media(
        &self,
        media_id: Uuid,
        user_id: &str,
    ) -> Result<Vec<AssessmentResponseDto>> {
        let assessments = sqlx::query_as::<_, Assessment>(
            r#"
            SELECT id, user_id, media_id, assessment_type, results, score,
                   recommendations, created_at
            FROM assessments
            WHERE media_id = $1 AND user_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(media_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list assessments by media: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(assessments.into_iter().map(|a| a.into()).collect())
    }
}
