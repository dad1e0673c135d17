use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an assessment.
///
/// Rows are written once by the analyze flow and never updated; deleting
/// the analyzed media removes them via the FK cascade.
#[derive(Debug, Clone, FromRow)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: String,
    pub media_id: Uuid,
    pub assessment_type: String,
    pub results: serde_json::Value,
    pub score: i32,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}
