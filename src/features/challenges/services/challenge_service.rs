use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::challenges::dtos::{
    ChallengeDetailDto, ChallengeMembershipDto, ChallengeResponseDto, CreateChallengeDto,
    MyChallengeDto, SubmitChallengeDto,
};
use crate::features::challenges::models::{Challenge, UserChallenge, UserChallengeStatus};

const CHALLENGE_COLUMNS: &str =
    "id, title, description, sport, difficulty, requirements, reward_points, expires_at, created_at";

const MEMBERSHIP_COLUMNS: &str =
    "id, user_id, challenge_id, status, submission_media_id, completed_at, points_earned, created_at";

/// Service for challenge and membership operations
pub struct ChallengeService {
    pool: PgPool,
}

impl ChallengeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn get_challenge(&self, id: Uuid) -> Result<Challenge> {
        let challenge = sqlx::query_as::<_, Challenge>(&format!(
            "SELECT {} FROM challenges WHERE id = $1",
            CHALLENGE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get challenge: {:?}", e);
            AppError::Database(e)
        })?;

        challenge.ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))
    }

    async fn get_membership(
        &self,
        challenge_id: Uuid,
        user_id: &str,
    ) -> Result<Option<UserChallenge>> {
        sqlx::query_as::<_, UserChallenge>(&format!(
            "SELECT {} FROM user_challenges WHERE challenge_id = $1 AND user_id = $2",
            MEMBERSHIP_COLUMNS
        ))
        .bind(challenge_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get membership: {:?}", e);
            AppError::Database(e)
        })
    }

    /// List joinable challenges (unexpired or non-expiring), newest first,
    /// flagged with whether the caller has joined each one.
    pub async fn list_active(&self, user_id: &str) -> Result<Vec<ChallengeResponseDto>> {
        let challenges = sqlx::query_as::<_, Challenge>(&format!(
            r#"
            SELECT {}
            FROM challenges
            WHERE expires_at IS NULL OR expires_at > NOW()
            ORDER BY created_at DESC
            "#,
            CHALLENGE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list challenges: {:?}", e);
            AppError::Database(e)
        })?;

        let joined: HashSet<Uuid> = sqlx::query_scalar::<_, Uuid>(
            "SELECT challenge_id FROM user_challenges WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list joined challenge IDs: {:?}", e);
            AppError::Database(e)
        })?
        .into_iter()
        .collect();

        Ok(challenges
            .into_iter()
            .map(|c| {
                let is_joined = joined.contains(&c.id);
                ChallengeResponseDto::from_model(c, is_joined)
            })
            .collect())
    }

    /// Challenge detail plus the caller's membership if any
    pub async fn get_detail(&self, id: Uuid, user_id: &str) -> Result<ChallengeDetailDto> {
        let challenge = self.get_challenge(id).await?;
        let membership = self.get_membership(id, user_id).await?;

        Ok(ChallengeDetailDto {
            challenge: ChallengeResponseDto::from_model(challenge, membership.is_some()),
            membership: membership.map(|m| m.into()),
        })
    }

    /// Join a challenge.
    ///
    /// The unique (user, challenge) constraint turns a second join into a
    /// conflict instead of a duplicate row.
    pub async fn join(&self, challenge_id: Uuid, user_id: &str) -> Result<ChallengeMembershipDto> {
        let challenge = self.get_challenge(challenge_id).await?;

        if challenge.is_expired(Utc::now()) {
            return Err(AppError::BadRequest("Challenge has expired".to_string()));
        }

        let membership = sqlx::query_as::<_, UserChallenge>(&format!(
            r#"
            INSERT INTO user_challenges (user_id, challenge_id, status)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            MEMBERSHIP_COLUMNS
        ))
        .bind(user_id)
        .bind(challenge_id)
        .bind(UserChallengeStatus::Active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Challenge already joined".to_string())
            }
            _ => {
                tracing::error!("Failed to join challenge: {:?}", e);
                AppError::Database(e)
            }
        })?;

        info!(
            "Challenge joined: challenge={}, user={}",
            challenge_id, user_id
        );

        Ok(membership.into())
    }

    /// Attach submission evidence to an active membership.
    ///
    /// Only records the media reference; completion is a separate decision
    /// and is not made here.
    pub async fn submit(
        &self,
        challenge_id: Uuid,
        user_id: &str,
        dto: SubmitChallengeDto,
    ) -> Result<ChallengeMembershipDto> {
        let membership = self
            .get_membership(challenge_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not joined".to_string()))?;

        if membership.status != UserChallengeStatus::Active {
            return Err(AppError::BadRequest(
                "Challenge is not active".to_string(),
            ));
        }

        let media_exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM media_uploads WHERE id = $1 AND user_id = $2",
        )
        .bind(dto.media_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check submission media: {:?}", e);
            AppError::Database(e)
        })?;

        if media_exists == 0 {
            return Err(AppError::NotFound("Media file not found".to_string()));
        }

        let updated = sqlx::query_as::<_, UserChallenge>(&format!(
            r#"
            UPDATE user_challenges
            SET submission_media_id = $1
            WHERE id = $2
            RETURNING {}
            "#,
            MEMBERSHIP_COLUMNS
        ))
        .bind(dto.media_id)
        .bind(membership.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to attach submission: {:?}", e);
            AppError::Database(e)
        })?;

        info!(
            "Challenge submission attached: challenge={}, media={}, user={}",
            challenge_id, dto.media_id, user_id
        );

        Ok(updated.into())
    }

    /// The caller's memberships with their challenges embedded, newest first
    pub async fn my_challenges(&self, user_id: &str) -> Result<Vec<MyChallengeDto>> {
        let memberships = sqlx::query_as::<_, UserChallenge>(&format!(
            r#"
            SELECT {}
            FROM user_challenges
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
            MEMBERSHIP_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list memberships: {:?}", e);
            AppError::Database(e)
        })?;

        if memberships.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = memberships.iter().map(|m| m.challenge_id).collect();
        let challenges = sqlx::query_as::<_, Challenge>(&format!(
            "SELECT {} FROM challenges WHERE id = ANY($1)",
            CHALLENGE_COLUMNS
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load challenges for memberships: {:?}", e);
            AppError::Database(e)
        })?;

        let by_id: HashMap<Uuid, Challenge> =
            challenges.into_iter().map(|c| (c.id, c)).collect();

        // The FK guarantees a challenge for every membership
        Ok(memberships
            .into_iter()
            .filter_map(|m| {
                by_id.get(&m.challenge_id).cloned().map(|c| MyChallengeDto {
                    membership: m.into(),
                    challenge: ChallengeResponseDto::from_model(c, true),
                })
            })
            .collect())
    }

    /// Author a new challenge (admin)
    pub async fn create(&self, dto: CreateChallengeDto) -> Result<ChallengeResponseDto> {
        let challenge = sqlx::query_as::<_, Challenge>(&format!(
            r#"
            INSERT INTO challenges (title, description, sport, difficulty, requirements, reward_points, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            CHALLENGE_COLUMNS
        ))
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.sport)
        .bind(dto.difficulty)
        .bind(&dto.requirements)
        .bind(dto.reward_points)
        .bind(dto.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create challenge: {:?}", e);
            AppError::Database(e)
        })?;

        info!(
            "Challenge created: id={}, title={}",
            challenge.id, challenge.title
        );

        Ok(ChallengeResponseDto::from_model(challenge, false))
    }

    /// List every challenge including expired ones (admin), newest first
    pub async fn list_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ChallengeResponseDto>, i64)> {
        let challenges = sqlx::query_as::<_, Challenge>(&format!(
            r#"
            SELECT {}
            FROM challenges
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
            CHALLENGE_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list all challenges: {:?}", e);
            AppError::Database(e)
        })?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM challenges")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count challenges: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((
            challenges
                .into_iter()
                .map(|c| ChallengeResponseDto::from_model(c, false))
                .collect(),
            total,
        ))
    }

    /// Delete a challenge (admin). Memberships go with it via the cascade.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM challenges WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete challenge: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Challenge not found".to_string()));
        }

        info!("Challenge deleted: id={}", id);

        Ok(())
    }
}
