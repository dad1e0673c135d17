use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Membership status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_challenge_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserChallengeStatus {
    Active,
    Completed,
    Failed,
}

impl std::fmt::Display for UserChallengeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserChallengeStatus::Active => write!(f, "active"),
            UserChallengeStatus::Completed => write!(f, "completed"),
            UserChallengeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Database model for a user's challenge membership.
///
/// One row per (user, challenge); joining creates it as `active` and
/// submitting evidence only attaches media, never moves the status.
#[derive(Debug, Clone, FromRow)]
pub struct UserChallenge {
    pub id: Uuid,
    pub user_id: String,
    pub challenge_id: Uuid,
    pub status: UserChallengeStatus,
    pub submission_media_id: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
    pub points_earned: i32,
    pub created_at: DateTime<Utc>,
}
