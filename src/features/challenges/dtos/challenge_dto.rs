use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::challenges::models::{
    Challenge, ChallengeDifficulty, UserChallenge, UserChallengeStatus,
};

/// Challenge response with the caller's joined flag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub sport: String,
    pub difficulty: ChallengeDifficulty,
    pub requirements: Vec<String>,
    pub reward_points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Whether the caller has joined this challenge
    pub joined: bool,
}

impl ChallengeResponseDto {
    pub fn from_model(challenge: Challenge, joined: bool) -> Self {
        Self {
            id: challenge.id,
            title: challenge.title,
            description: challenge.description,
            sport: challenge.sport,
            difficulty: challenge.difficulty,
            requirements: challenge.requirements,
            reward_points: challenge.reward_points,
            expires_at: challenge.expires_at,
            created_at: challenge.created_at,
            joined,
        }
    }
}

/// The caller's membership in a challenge
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeMembershipDto {
    pub id: Uuid,
    pub status: UserChallengeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_media_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub points_earned: i32,
    pub created_at: DateTime<Utc>,
}

impl From<UserChallenge> for ChallengeMembershipDto {
    fn from(membership: UserChallenge) -> Self {
        Self {
            id: membership.id,
            status: membership.status,
            submission_media_id: membership.submission_media_id,
            completed_at: membership.completed_at,
            points_earned: membership.points_earned,
            created_at: membership.created_at,
        }
    }
}

/// Challenge detail: the challenge plus the caller's membership if any
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChallengeDetailDto {
    pub challenge: ChallengeResponseDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<ChallengeMembershipDto>,
}

/// One entry of the caller's joined-challenges list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MyChallengeDto {
    pub membership: ChallengeMembershipDto,
    pub challenge: ChallengeResponseDto,
}

/// Request DTO for authoring a challenge (admin)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallengeDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 50, message = "Sport must be 1-50 characters"))]
    pub sport: String,

    pub difficulty: ChallengeDifficulty,

    /// What counts as completing the challenge
    #[validate(length(max = 10, message = "At most 10 requirements are allowed"))]
    #[serde(default)]
    pub requirements: Vec<String>,

    #[validate(range(min = 0, message = "Reward points must not be negative"))]
    pub reward_points: i32,

    /// Omit for a challenge that never expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Request DTO for attaching submission evidence to a joined challenge
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitChallengeDto {
    /// One of the caller's own media uploads
    pub media_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_rejects_blank_title() {
        let dto = CreateChallengeDto {
            title: "".to_string(),
            description: "Daily drills".to_string(),
            sport: "soccer".to_string(),
            difficulty: ChallengeDifficulty::Beginner,
            requirements: vec![],
            reward_points: 50,
            expires_at: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_negative_reward() {
        let dto = CreateChallengeDto {
            title: "Sprint week".to_string(),
            description: "Five sprint sessions".to_string(),
            sport: "track".to_string(),
            difficulty: ChallengeDifficulty::Advanced,
            requirements: vec!["Record each session".to_string()],
            reward_points: -1,
            expires_at: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_challenge_response_uses_camel_case() {
        let dto = ChallengeResponseDto {
            id: Uuid::nil(),
            title: "Sprint week".to_string(),
            description: "Five sprint sessions".to_string(),
            sport: "track".to_string(),
            difficulty: ChallengeDifficulty::Intermediate,
            requirements: vec![],
            reward_points: 100,
            expires_at: None,
            created_at: Utc::now(),
            joined: true,
        };
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body["rewardPoints"], 100);
        assert_eq!(body["difficulty"], "intermediate");
        assert_eq!(body["joined"], true);
        assert!(body.get("expiresAt").is_none());
    }

    #[test]
    fn test_submit_dto_reads_camel_case_media_id() {
        let dto: SubmitChallengeDto =
            serde_json::from_str(r#"{"mediaId":"00000000-0000-0000-0000-000000000000"}"#).unwrap();
        assert_eq!(dto.media_id, Uuid::nil());
    }
}
