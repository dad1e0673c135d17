use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::profiles::models::Profile;

/// Request DTO for creating or updating the caller's profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileDto {
    #[validate(length(max = 128, message = "Full name must not exceed 128 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[validate(length(max = 50, message = "Sport must not exceed 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,

    #[validate(length(max = 50, message = "Position must not exceed 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    #[validate(length(max = 100, message = "Location must not exceed 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[validate(length(max = 1000, message = "Bio must not exceed 1000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[validate(url(message = "Profile image must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// Profile response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseDto {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponseDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            sport: profile.sport,
            position: profile.position,
            age: profile.age,
            location: profile.location,
            bio: profile.bio,
            profile_image_url: profile.profile_image_url,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Aggregate counters shown on the profile page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsDto {
    pub total_uploads: i64,
    pub total_assessments: i64,
    pub completed_challenges: i64,
    /// Profile creation time; absent before the first profile save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_since: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_dto_rejects_out_of_range_age() {
        let dto = UpsertProfileDto {
            full_name: Some("Alex Carter".to_string()),
            sport: None,
            position: None,
            age: Some(0),
            location: None,
            bio: None,
            profile_image_url: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_upsert_dto_rejects_invalid_image_url() {
        let dto = UpsertProfileDto {
            full_name: None,
            sport: None,
            position: None,
            age: None,
            location: None,
            bio: None,
            profile_image_url: Some("not-a-url".to_string()),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_upsert_dto_accepts_sparse_payload() {
        let dto = UpsertProfileDto {
            full_name: None,
            sport: Some("soccer".to_string()),
            position: None,
            age: Some(19),
            location: None,
            bio: None,
            profile_image_url: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_profile_response_uses_camel_case() {
        let dto = ProfileResponseDto {
            id: "user-1".to_string(),
            email: "athlete@example.com".to_string(),
            full_name: Some("Alex Carter".to_string()),
            sport: None,
            position: None,
            age: None,
            location: None,
            bio: None,
            profile_image_url: Some("https://cdn.example.com/a.png".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let body = serde_json::to_value(&dto).unwrap();
        assert!(body.get("fullName").is_some());
        assert!(body.get("profileImageUrl").is_some());
        assert!(body.get("full_name").is_none());
    }
}
