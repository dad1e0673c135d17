mod analysis;
mod assessment;

pub use analysis::{
    AnalysisResults, CategoryAnalysis, KeyPoint, MetricTrend, PerformanceAnalysis,
    PerformanceMetric,
};
pub use assessment::Assessment;
