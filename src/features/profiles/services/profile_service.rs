use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::dtos::{ProfileStatsDto, UpsertProfileDto};
use crate::features::profiles::models::Profile;

/// Service for athlete profile operations
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the caller's profile. Not found until the first save.
    pub async fn get(&self, user_id: &str) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, full_name, sport, position, age, location, bio,
                   profile_image_url, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get profile: {:?}", e);
            AppError::Database(e)
        })?;

        profile.ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Create or update the caller's profile.
    ///
    /// The row key is the auth subject and the email comes from the token,
    /// so the request body can never write another user's profile.
    pub async fn upsert(&self, user: &AuthenticatedUser, dto: UpsertProfileDto) -> Result<Profile> {
        let email = user.email.clone().unwrap_or_default();

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, email, full_name, sport, position, age, location, bio, profile_image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                full_name = EXCLUDED.full_name,
                sport = EXCLUDED.sport,
                position = EXCLUDED.position,
                age = EXCLUDED.age,
                location = EXCLUDED.location,
                bio = EXCLUDED.bio,
                profile_image_url = EXCLUDED.profile_image_url,
                updated_at = NOW()
            RETURNING id, email, full_name, sport, position, age, location, bio,
                      profile_image_url, created_at, updated_at
            "#,
        )
        .bind(&user.sub)
        .bind(&email)
        .bind(&dto.full_name)
        .bind(&dto.sport)
        .bind(&dto.position)
        .bind(dto.age)
        .bind(&dto.location)
        .bind(&dto.bio)
        .bind(&dto.profile_image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert profile: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Profile saved: user={}", user.sub);

        Ok(profile)
    }

    /// Aggregate counters for the profile page
    pub async fn stats(&self, user_id: &str) -> Result<ProfileStatsDto> {
        let total_uploads =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM media_uploads WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count uploads: {:?}", e);
                    AppError::Database(e)
                })?;

        let total_assessments =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assessments WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count assessments: {:?}", e);
                    AppError::Database(e)
                })?;

        let completed_challenges = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM user_challenges WHERE user_id = $1 AND status = 'completed'",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count completed challenges: {:?}", e);
            AppError::Database(e)
        })?;

        let member_since = sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT created_at FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get profile creation time: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(ProfileStatsDto {
            total_uploads,
            total_assessments,
            completed_challenges,
            member_since,
        })
    }
}
