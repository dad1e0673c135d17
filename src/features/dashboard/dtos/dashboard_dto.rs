use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::scoring::ScoreBand;

/// Headline counters for the signed-in athlete.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_uploads: i64,
    /// Every challenge the user has joined, regardless of status.
    pub challenges_joined: i64,
    pub total_assessments: i64,
    /// Rounded mean of the newest assessment scores, absent until at
    /// least two assessments exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<i32>,
}

/// Kind of event shown in the recent activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Upload,
    Assessment,
}

/// One entry in the recent activity feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItemDto {
    pub id: Uuid,
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Summary of recent AI assessments.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<ScoreBand>,
    /// Leading recommendations from the most recent assessment.
    pub latest_recommendations: Vec<String>,
    pub assessments_analyzed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = DashboardStatsDto {
            total_uploads: 4,
            challenges_joined: 2,
            total_assessments: 3,
            performance_score: Some(82),
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalUploads"], 4);
        assert_eq!(json["challengesJoined"], 2);
        assert_eq!(json["totalAssessments"], 3);
        assert_eq!(json["performanceScore"], 82);
    }

    #[test]
    fn test_stats_omit_missing_performance_score() {
        let stats = DashboardStatsDto {
            total_uploads: 0,
            challenges_joined: 0,
            total_assessments: 0,
            performance_score: None,
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("performanceScore").is_none());
    }

    #[test]
    fn test_activity_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ActivityType::Upload).unwrap(),
            serde_json::json!("upload")
        );
        assert_eq!(
            serde_json::to_value(ActivityType::Assessment).unwrap(),
            serde_json::json!("assessment")
        );
    }
}
