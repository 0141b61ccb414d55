//! Selection of the minimum and maximum interval cohorts

use super::model::{AwardIntervalsResult, ProducerInterval};

/// Collect every interval equal to the global minimum and to the global maximum
///
/// Input order is preserved in both lists. When all intervals share one
/// value, both lists contain every interval.
pub fn select_extrema(intervals: &[ProducerInterval]) -> AwardIntervalsResult {
    let Some(first) = intervals.first() else {
        return AwardIntervalsResult::default();
    };

    let (min_value, max_value) = intervals
        .iter()
        .fold((first.interval, first.interval), |(lo, hi), p| {
            (lo.min(p.interval), hi.max(p.interval))
        });

    AwardIntervalsResult {
        min: with_interval(intervals, min_value),
        max: with_interval(intervals, max_value),
    }
}

fn with_interval(intervals: &[ProducerInterval], value: i64) -> Vec<ProducerInterval> {
    intervals
        .iter()
        .filter(|p| p.interval == value)
        .cloned()
        .collect()
}
