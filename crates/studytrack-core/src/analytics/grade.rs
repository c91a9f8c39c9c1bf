//! Weighted course grade.

use super::round_to;
use crate::task::Task;

/// `Σ(points/100 · weight) / Σ weight · 100`, rounded to two decimals.
///
/// Only tasks with `points_earned > 0` contribute to the numerator, but every
/// task's weight counts in the denominator, so an ungraded task pulls the
/// grade down instead of being left out of the average. Kept that way for
/// compatibility with existing grade reports.
///
/// A course whose weights sum to exactly zero has a grade of 0.
pub(crate) fn course_grade(tasks: &[Task]) -> f64 {
    let total_weight: f64 = tasks.iter().map(|t| t.weighted_percent).sum();
    if total_weight == 0.0 {
        return 0.0;
    }

    let weighted_sum: f64 = tasks
        .iter()
        .filter_map(|t| match t.points_earned {
            Some(points) if points > 0.0 => Some(points / 100.0 * t.weighted_percent),
            _ => None,
        })
        .sum();

    round_to(weighted_sum / total_weight * 100.0, 2)
}
