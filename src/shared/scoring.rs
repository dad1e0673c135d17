//! Score aggregation and banding.
//!
//! All scoring arithmetic lives here: the overall assessment score, the
//! severity band a score falls into, and the rolling averages shown on the
//! dashboard. Handlers and services never re-derive these rules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How many recent assessment scores the dashboard considers
pub const RECENT_SCORE_WINDOW: usize = 10;

/// How many of those scores feed the displayed average
pub const RECENT_AVERAGE_WINDOW: usize = 5;

const GOOD_THRESHOLD: i32 = 85;
const NEEDS_IMPROVEMENT_THRESHOLD: i32 = 70;

/// Severity band for a 0-100 score.
///
/// Also used as the fixed status label on analysis key points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    NeedsImprovement,
    Critical,
}

impl ScoreBand {
    /// Band thresholds: >= 85 good, >= 70 needs improvement, below critical.
    pub fn for_score(score: i32) -> Self {
        if score >= GOOD_THRESHOLD {
            ScoreBand::Good
        } else if score >= NEEDS_IMPROVEMENT_THRESHOLD {
            ScoreBand::NeedsImprovement
        } else {
            ScoreBand::Critical
        }
    }
}

/// Overall assessment score: unweighted mean of the three category scores,
/// rounded down.
pub fn overall_score(posture: i32, technique: i32, performance: i32) -> i32 {
    (posture + technique + performance) / 3
}

/// Mean of the given scores rounded to the nearest integer, `None` when empty.
pub fn mean_rounded(scores: &[i32]) -> Option<i32> {
    if scores.is_empty() {
        return None;
    }
    let sum: i32 = scores.iter().sum();
    Some((f64::from(sum) / scores.len() as f64).round() as i32)
}

/// Dashboard performance score over recent assessment scores (newest first).
///
/// Unavailable with fewer than two scores; otherwise the rounded mean of the
/// newest [`RECENT_AVERAGE_WINDOW`] entries.
pub fn recent_average(scores: &[i32]) -> Option<i32> {
    if scores.len() < 2 {
        return None;
    }
    mean_rounded(&scores[..scores.len().min(RECENT_AVERAGE_WINDOW)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_score_rounds_down() {
        assert_eq!(overall_score(80, 80, 80), 80);
        assert_eq!(overall_score(75, 70, 75), 73); // 220 / 3 = 73.33
        assert_eq!(overall_score(94, 94, 93), 93); // 281 / 3 = 93.67
        assert_eq!(overall_score(0, 0, 1), 0);
        assert_eq!(overall_score(100, 100, 100), 100);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(85), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(84), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::for_score(70), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::for_score(69), ScoreBand::Critical);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Critical);
    }

    #[test]
    fn test_band_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ScoreBand::NeedsImprovement).unwrap(),
            serde_json::json!("needs_improvement")
        );
        assert_eq!(
            serde_json::to_value(ScoreBand::Good).unwrap(),
            serde_json::json!("good")
        );
    }

    #[test]
    fn test_mean_rounded() {
        assert_eq!(mean_rounded(&[]), None);
        assert_eq!(mean_rounded(&[77]), Some(77));
        assert_eq!(mean_rounded(&[80, 81]), Some(81)); // 80.5 rounds up
        assert_eq!(mean_rounded(&[70, 71, 72]), Some(71));
    }

    #[test]
    fn test_recent_average_requires_two_scores() {
        assert_eq!(recent_average(&[]), None);
        assert_eq!(recent_average(&[90]), None);
        assert_eq!(recent_average(&[90, 80]), Some(85));
    }

    #[test]
    fn test_recent_average_uses_newest_five() {
        // Newest first: only the first five contribute.
        let scores = [90, 90, 90, 90, 90, 10, 10, 10, 10, 10];
        assert_eq!(recent_average(&scores), Some(90));

        let scores = [80, 85, 90, 70, 75, 100];
        assert_eq!(recent_average(&scores), Some(80));
    }
}
