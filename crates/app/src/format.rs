use planner_domain::{ExerciseSet, WorkoutSummary};

use crate::WeightUnit;

#[must_use]
pub fn set_line(set: &ExerciseSet, unit: WeightUnit) -> String {
    format!("{} {} x {} reps", set.weight, unit.label(), set.reps)
}

#[must_use]
pub fn progress_line(summary: &WorkoutSummary) -> String {
    format!(
        "{}/{} sets ({:.0}%)",
        summary.completed_sets,
        summary.total_sets,
        summary.completion_ratio * 100.0
    )
}
