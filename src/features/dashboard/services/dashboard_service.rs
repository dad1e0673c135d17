use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{
    ActivityItemDto, ActivityType, DashboardStatsDto, InsightsDto,
};
use crate::features::media::models::MediaType;
use crate::shared::scoring::{self, ScoreBand, RECENT_AVERAGE_WINDOW, RECENT_SCORE_WINDOW};

/// How many activity entries the feed shows
const ACTIVITY_FEED_SIZE: usize = 6;

/// How many recent uploads feed the activity merge
const ACTIVITY_UPLOADS: i64 = 5;

/// How many recent assessments feed the activity merge
const ACTIVITY_ASSESSMENTS: i64 = 3;

/// How many recommendations the insights widget surfaces
const INSIGHT_RECOMMENDATIONS: usize = 2;

#[derive(Debug, FromRow)]
struct UploadActivityRow {
    id: Uuid,
    file_name: String,
    file_type: MediaType,
    upload_date: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct AssessmentActivityRow {
    id: Uuid,
    assessment_type: String,
    score: i32,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct InsightRow {
    score: i32,
    recommendations: Vec<String>,
}

/// Service for dashboard aggregates.
///
/// Everything here is read-only arithmetic over the caller's own rows; the
/// scoring rules themselves live in [`crate::shared::scoring`].
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Headline counters plus the rolling performance score.
    ///
    /// The queries are independent, so they run concurrently. The
    /// performance score is the rounded mean of the newest assessment
    /// scores and is absent until at least two assessments exist.
    pub async fn stats(&self, user_id: &str) -> Result<DashboardStatsDto> {
        let uploads =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM media_uploads WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool);

        let challenges =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_challenges WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool);

        let assessments =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assessments WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool);

        let scores = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT score
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(RECENT_SCORE_WINDOW as i64)
        .fetch_all(&self.pool);

        let (total_uploads, challenges_joined, total_assessments, scores) =
            tokio::try_join!(uploads, challenges, assessments, scores).map_err(|e| {
                tracing::error!("Failed to load dashboard stats: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(DashboardStatsDto {
            total_uploads,
            challenges_joined,
            total_assessments,
            performance_score: scoring::recent_average(&scores),
        })
    }

    /// Recent activity feed: the newest uploads and assessments merged
    /// into one timeline, newest first.
    pub async fn activity(&self, user_id: &str) -> Result<Vec<ActivityItemDto>> {
        let uploads = sqlx::query_as::<_, UploadActivityRow>(
            r#"
            SELECT id, file_name, file_type, upload_date
            FROM media_uploads
            WHERE user_id = $1
            ORDER BY upload_date DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(ACTIVITY_UPLOADS)
        .fetch_all(&self.pool);

        let assessments = sqlx::query_as::<_, AssessmentActivityRow>(
            r#"
            SELECT id, assessment_type, score, created_at
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(ACTIVITY_ASSESSMENTS)
        .fetch_all(&self.pool);

        let (uploads, assessments) = tokio::try_join!(uploads, assessments).map_err(|e| {
            tracing::error!("Failed to load recent activity: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(merge_activity(uploads, assessments))
    }

    /// AI insights widget: average and band over the newest assessments,
    /// plus the leading recommendations from the most recent one.
    pub async fn insights(&self, user_id: &str) -> Result<InsightsDto> {
        let rows = sqlx::query_as::<_, InsightRow>(
            r#"
            SELECT score, recommendations
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(RECENT_AVERAGE_WINDOW as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load insight scores: {:?}", e);
            AppError::Database(e)
        })?;

        let scores: Vec<i32> = rows.iter().map(|r| r.score).collect();
        let average_score = scoring::mean_rounded(&scores);

        let latest_recommendations = rows
            .first()
            .map(|latest| {
                latest
                    .recommendations
                    .iter()
                    .take(INSIGHT_RECOMMENDATIONS)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(InsightsDto {
            average_score,
            band: average_score.map(ScoreBand::for_score),
            latest_recommendations,
            assessments_analyzed: rows.len() as i64,
        })
    }
}

/// Merge uploads and assessments into one feed, newest first, capped at
/// [`ACTIVITY_FEED_SIZE`].
fn merge_activity(
    uploads: Vec<UploadActivityRow>,
    assessments: Vec<AssessmentActivityRow>,
) -> Vec<ActivityItemDto> {
    let mut items: Vec<ActivityItemDto> = uploads
        .into_iter()
        .map(|row| ActivityItemDto {
            id: row.id,
            activity_type: ActivityType::Upload,
            title: row.file_name,
            description: format!("Uploaded a {}", row.file_type),
            timestamp: row.upload_date,
        })
        .chain(assessments.into_iter().map(|row| ActivityItemDto {
            id: row.id,
            activity_type: ActivityType::Assessment,
            title: format!("{} analysis completed", row.assessment_type),
            description: format!("Overall score {}", row.score),
            timestamp: row.created_at,
        }))
        .collect();

    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(ACTIVITY_FEED_SIZE);

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn upload(minutes_ago: i64, name: &str) -> UploadActivityRow {
        UploadActivityRow {
            id: Uuid::new_v4(),
            file_name: name.to_string(),
            file_type: MediaType::Video,
            upload_date: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    fn assessment(minutes_ago: i64, score: i32) -> AssessmentActivityRow {
        AssessmentActivityRow {
            id: Uuid::new_v4(),
            assessment_type: "comprehensive".to_string(),
            score,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_merge_interleaves_newest_first() {
        let items = merge_activity(
            vec![upload(30, "a.mp4"), upload(10, "b.mp4")],
            vec![assessment(20, 82)],
        );

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "b.mp4");
        assert_eq!(items[1].activity_type, ActivityType::Assessment);
        assert_eq!(items[1].description, "Overall score 82");
        assert_eq!(items[2].title, "a.mp4");
    }

    #[test]
    fn test_merge_caps_the_feed() {
        let uploads = (0..5).map(|i| upload(i, "clip.mp4")).collect();
        let assessments = (0..3).map(|i| assessment(i + 5, 80)).collect();

        let items = merge_activity(uploads, assessments);
        assert_eq!(items.len(), ACTIVITY_FEED_SIZE);
        // The five uploads are newer than every assessment.
        assert_eq!(items[0].activity_type, ActivityType::Upload);
        assert_eq!(items[5].activity_type, ActivityType::Assessment);
    }

    #[test]
    fn test_merge_with_no_rows_is_empty() {
        assert!(merge_activity(vec![], vec![]).is_empty());
    }
}
