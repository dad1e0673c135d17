use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::scoring::ScoreBand;

/// Direction arrow shown next to a performance metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetricTrend {
    Up,
    Stable,
    Down,
}

/// A scored body-position checkpoint inside a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KeyPoint {
    pub name: String,
    pub score: i32,
    pub status: ScoreBand,
}

/// A named performance metric with a display value
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PerformanceMetric {
    pub name: String,
    pub value: String,
    pub trend: MetricTrend,
}

/// Posture or technique analysis: a category score, the checkpoints behind
/// it and written feedback
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnalysis {
    pub score: i32,
    pub key_points: Vec<KeyPoint>,
    pub recommendations: Vec<String>,
}

/// Performance analysis: a category score, display metrics and insights
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PerformanceAnalysis {
    pub score: i32,
    pub metrics: Vec<PerformanceMetric>,
    pub insights: Vec<String>,
}

/// The full analysis payload persisted on an assessment row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResults {
    pub posture: CategoryAnalysis,
    pub technique: CategoryAnalysis,
    pub performance: PerformanceAnalysis,
}
