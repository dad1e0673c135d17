//! Mock movement-analysis generator.
//!
//! Stands in for a real inference pipeline until one is wired up: category
//! scores are uniform random integers within fixed bounds and the written
//! feedback is canned. Key point statuses and metric trends are fixed per
//! entry, not derived from the rolled scores. Every call is independent of
//! the media content and of previous calls.

use rand::Rng;

use crate::features::assessments::models::{
    AnalysisResults, CategoryAnalysis, KeyPoint, MetricTrend, PerformanceAnalysis,
    PerformanceMetric,
};
use crate::shared::scoring::{self, ScoreBand};

const POSTURE_RECOMMENDATIONS: [&str; 3] = [
    "Focus on keeping your hips level throughout the movement",
    "Engage your core more to maintain better posture",
    "Consider hip mobility exercises to improve alignment",
];

const TECHNIQUE_RECOMMENDATIONS: [&str; 3] = [
    "Work on increasing your range of motion through dynamic stretching",
    "Practice balance exercises to improve stability",
    "Focus on slower, controlled movements to improve coordination",
];

const PERFORMANCE_INSIGHTS: [&str; 4] = [
    "Your speed has improved compared to previous sessions",
    "Power output remains consistent, showing good strength maintenance",
    "Efficiency gains suggest better technique development",
    "Focus on consistency to maximize performance potential",
];

const OVERALL_RECOMMENDATIONS: [&str; 4] = [
    "Focus on hip alignment and core engagement",
    "Increase range of motion through targeted stretching",
    "Practice balance and coordination exercises",
    "Maintain consistent training schedule for better results",
];

/// Generated analysis payload plus the derived aggregate fields
pub struct AnalysisOutcome {
    pub results: AnalysisResults,
    pub score: i32,
    pub recommendations: Vec<String>,
}

fn key_point(rng: &mut impl Rng, name: &str, low: i32, high: i32, status: ScoreBand) -> KeyPoint {
    KeyPoint {
        name: name.to_string(),
        score: rng.gen_range(low..=high),
        status,
    }
}

fn canned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// Generate one mock analysis outcome
pub fn generate() -> AnalysisOutcome {
    let mut rng = rand::thread_rng();

    let posture = CategoryAnalysis {
        score: rng.gen_range(75..=94),
        key_points: vec![
            key_point(&mut rng, "Head Position", 80, 99, ScoreBand::Good),
            key_point(&mut rng, "Shoulder Alignment", 70, 99, ScoreBand::Good),
            key_point(&mut rng, "Hip Position", 65, 89, ScoreBand::NeedsImprovement),
            key_point(&mut rng, "Knee Tracking", 80, 99, ScoreBand::Good),
            key_point(&mut rng, "Foot Placement", 75, 99, ScoreBand::Good),
        ],
        recommendations: canned(&POSTURE_RECOMMENDATIONS),
    };

    let technique = CategoryAnalysis {
        score: rng.gen_range(70..=94),
        key_points: vec![
            key_point(&mut rng, "Movement Timing", 80, 99, ScoreBand::Good),
            key_point(&mut rng, "Range of Motion", 65, 94, ScoreBand::NeedsImprovement),
            key_point(&mut rng, "Balance", 75, 99, ScoreBand::Good),
            key_point(&mut rng, "Coordination", 70, 99, ScoreBand::NeedsImprovement),
        ],
        recommendations: canned(&TECHNIQUE_RECOMMENDATIONS),
    };

    let performance = PerformanceAnalysis {
        score: rng.gen_range(75..=94),
        metrics: vec![
            PerformanceMetric {
                name: "Speed".to_string(),
                value: format!("{:.1} m/s", rng.gen_range(3.0..5.0)),
                trend: MetricTrend::Up,
            },
            PerformanceMetric {
                name: "Power".to_string(),
                value: format!("{} W", rng.gen_range(750..=949)),
                trend: MetricTrend::Stable,
            },
            PerformanceMetric {
                name: "Efficiency".to_string(),
                value: format!("{}%", rng.gen_range(70..=89)),
                trend: MetricTrend::Up,
            },
            PerformanceMetric {
                name: "Consistency".to_string(),
                value: format!("{}%", rng.gen_range(75..=94)),
                trend: MetricTrend::Down,
            },
        ],
        insights: canned(&PERFORMANCE_INSIGHTS),
    };

    let score = scoring::overall_score(posture.score, technique.score, performance.score);

    AnalysisOutcome {
        results: AnalysisResults {
            posture,
            technique,
            performance,
        },
        score,
        recommendations: canned(&OVERALL_RECOMMENDATIONS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(value: i32, low: i32, high: i32) -> bool {
        value >= low && value <= high
    }

    #[test]
    fn test_category_scores_stay_in_bounds() {
        for _ in 0..50 {
            let outcome = generate();
            let results = &outcome.results;

            assert!(in_range(results.posture.score, 75, 94));
            assert!(in_range(results.technique.score, 70, 94));
            assert!(in_range(results.performance.score, 75, 94));
        }
    }

    #[test]
    fn test_key_points_have_fixed_names_and_statuses() {
        let outcome = generate();
        let posture = &outcome.results.posture;

        let names: Vec<&str> = posture.key_points.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Head Position",
                "Shoulder Alignment",
                "Hip Position",
                "Knee Tracking",
                "Foot Placement"
            ]
        );
        assert_eq!(posture.key_points[2].status, ScoreBand::NeedsImprovement);
        assert!(in_range(posture.key_points[2].score, 65, 89));

        let technique = &outcome.results.technique;
        assert_eq!(technique.key_points.len(), 4);
        assert_eq!(technique.key_points[1].name, "Range of Motion");
        assert_eq!(technique.key_points[1].status, ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_metric_values_are_formatted() {
        for _ in 0..50 {
            let outcome = generate();
            let metrics = &outcome.results.performance.metrics;

            assert!(metrics[0].value.ends_with(" m/s"));
            assert_eq!(metrics[0].trend, MetricTrend::Up);

            assert!(metrics[1].value.ends_with(" W"));
            let watts: i32 = metrics[1].value.trim_end_matches(" W").parse().unwrap();
            assert!(in_range(watts, 750, 949));

            assert!(metrics[2].value.ends_with('%'));
            assert!(metrics[3].value.ends_with('%'));
            assert_eq!(metrics[3].trend, MetricTrend::Down);
        }
    }

    #[test]
    fn test_overall_score_is_floor_mean_of_categories() {
        for _ in 0..50 {
            let outcome = generate();
            let results = &outcome.results;
            let expected = scoring::overall_score(
                results.posture.score,
                results.technique.score,
                results.performance.score,
            );
            assert_eq!(outcome.score, expected);
        }
    }

    #[test]
    fn test_recommendations_are_canned() {
        let outcome = generate();
        assert_eq!(outcome.recommendations.len(), 4);
        assert_eq!(
            outcome.recommendations[0],
            "Focus on hip alignment and core engagement"
        );
        assert_eq!(outcome.results.posture.recommendations.len(), 3);
        assert_eq!(outcome.results.performance.insights.len(), 4);
    }

    #[test]
    fn test_results_serialize_with_camel_case_key_points() {
        let outcome = generate();
        let body = serde_json::to_value(&outcome.results).unwrap();

        assert!(body["posture"].get("keyPoints").is_some());
        assert!(body["posture"].get("key_points").is_none());
        assert_eq!(body["posture"]["keyPoints"][0]["status"], "good");
        assert!(body["performance"].get("metrics").is_some());
    }
}
