use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Challenge difficulty enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "challenge_difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChallengeDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for ChallengeDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChallengeDifficulty::Beginner => write!(f, "beginner"),
            ChallengeDifficulty::Intermediate => write!(f, "intermediate"),
            ChallengeDifficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// Database model for an admin-authored challenge.
///
/// `expires_at = NULL` means the challenge never expires.
#[derive(Debug, Clone, FromRow)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub sport: String,
    pub difficulty: ChallengeDifficulty,
    pub requirements: Vec<String>,
    pub reward_points: i32,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Whether the challenge can no longer be joined
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn challenge(expires_at: Option<DateTime<Utc>>) -> Challenge {
        Challenge {
            id: Uuid::nil(),
            title: "30-day sprint drills".to_string(),
            description: "Sprint starts every day".to_string(),
            sport: "track".to_string(),
            difficulty: ChallengeDifficulty::Intermediate,
            requirements: vec!["Record one session per week".to_string()],
            reward_points: 100,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_expiry_checks_the_deadline() {
        let now = Utc::now();
        assert!(challenge(Some(now - Duration::hours(1))).is_expired(now));
        assert!(!challenge(Some(now + Duration::hours(1))).is_expired(now));
    }

    #[test]
    fn test_null_deadline_never_expires() {
        assert!(!challenge(None).is_expired(Utc::now()));
    }
}
