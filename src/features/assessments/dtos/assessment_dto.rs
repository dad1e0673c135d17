use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::assessments::models::{AnalysisResults, Assessment};

/// Request body for triggering an analysis
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequestDto {
    /// The video to analyze
    pub media_id: Option<Uuid>,
    /// Analysis type label recorded on the assessment (default "comprehensive")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<String>,
}

/// Assessment response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponseDto {
    pub id: Uuid,
    pub media_id: Uuid,
    pub assessment_type: String,
    /// The persisted analysis payload
    #[schema(value_type = AnalysisResults)]
    pub results: serde_json::Value,
    pub score: i32,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Assessment> for AssessmentResponseDto {
    fn from(assessment: Assessment) -> Self {
        Self {
            id: assessment.id,
            media_id: assessment.media_id,
            assessment_type: assessment.assessment_type,
            results: assessment.results,
            score: assessment.score,
            recommendations: assessment.recommendations,
            created_at: assessment.created_at,
        }
    }
}

/// Response body of the analyze endpoint.
///
/// Analysis deliberately does not use the standard envelope: the assessment
/// sits next to `success` at the top level.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponseDto {
    pub success: bool,
    pub assessment: AssessmentResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_accepts_camel_case_media_id() {
        let dto: AnalyzeRequestDto = serde_json::from_str(
            r#"{"mediaId":"00000000-0000-0000-0000-000000000000","analysisType":"sprint"}"#,
        )
        .unwrap();
        assert_eq!(dto.media_id, Some(Uuid::nil()));
        assert_eq!(dto.analysis_type.as_deref(), Some("sprint"));
    }

    #[test]
    fn test_analyze_request_tolerates_missing_fields() {
        let dto: AnalyzeRequestDto = serde_json::from_str("{}").unwrap();
        assert!(dto.media_id.is_none());
        assert!(dto.analysis_type.is_none());
    }

    #[test]
    fn test_assessment_response_omits_user_id() {
        let dto = AssessmentResponseDto {
            id: Uuid::nil(),
            media_id: Uuid::nil(),
            assessment_type: "comprehensive".to_string(),
            results: serde_json::json!({}),
            score: 82,
            recommendations: vec!["Keep hips level".to_string()],
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(&dto).unwrap();
        assert!(body.get("mediaId").is_some());
        assert!(body.get("assessmentType").is_some());
        assert!(body.get("userId").is_none());
        assert!(body.get("user_id").is_none());
    }
}
