use crate::{
    Exercise, ExerciseDraft, ExerciseID, ExerciseSet, NotFound, ReadError, Reps, SetID,
    UpdateError, Weight, exercise::ratio,
};

pub trait WorkoutService {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
    fn get_summary(&self) -> Result<WorkoutSummary, ReadError>;

    fn add_set(&mut self, exercise_id: ExerciseID) -> Result<ExerciseSet, UpdateError>;
    fn remove_set(
        &mut self,
        exercise_id: ExerciseID,
        index: usize,
    ) -> Result<ExerciseSet, UpdateError>;
    fn update_weight(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
        weight: Weight,
    ) -> Result<ExerciseSet, UpdateError>;
    fn update_reps(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
        reps: Reps,
    ) -> Result<ExerciseSet, UpdateError>;
    fn toggle_completed(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<ExerciseSet, UpdateError>;
    fn reset_completed(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<ExerciseSet, UpdateError>;
    fn rename_exercise(&mut self, id: ExerciseID, name: &str) -> Result<Exercise, UpdateError>;
    fn redescribe_exercise(
        &mut self,
        id: ExerciseID,
        description: &str,
    ) -> Result<Exercise, UpdateError>;

    fn open_draft(&self, id: ExerciseID) -> Result<ExerciseDraft, ReadError>;
    fn commit_draft(&mut self, draft: ExerciseDraft) -> Result<Exercise, UpdateError>;
}

pub trait WorkoutRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
    fn replace_exercise(&mut self, exercise: Exercise) -> Result<Exercise, UpdateError>;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Workout {
    pub exercises: Vec<Exercise>,
}

impl Workout {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Replace the exercise with the same identity, keeping its position.
    pub fn replace_exercise(&mut self, exercise: Exercise) -> Result<(), NotFound> {
        let Some(entry) = self.exercises.iter_mut().find(|e| e.id == exercise.id) else {
            return Err(NotFound::Exercise(exercise.id));
        };
        *entry = exercise;
        Ok(())
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.summary().total_sets
    }

    #[must_use]
    pub fn completed_sets(&self) -> usize {
        self.summary().completed_sets
    }

    #[must_use]
    pub fn completion_ratio(&self) -> f32 {
        self.summary().completion_ratio
    }

    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary::from(self.exercises.as_slice())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WorkoutSummary {
    pub total_sets: usize,
    pub completed_sets: usize,
    pub completion_ratio: f32,
}

impl From<&[Exercise]> for WorkoutSummary {
    fn from(exercises: &[Exercise]) -> Self {
        let total_sets = exercises.iter().map(Exercise::num_sets).sum();
        let completed_sets = exercises.iter().map(Exercise::num_completed_sets).sum();
        Self {
            total_sets,
            completed_sets,
            completion_ratio: ratio(completed_sets, total_sets),
        }
    }
}

/// The workout a new session starts with.
#[must_use]
pub fn sample_workout() -> Workout {
    Workout::new(vec![
        Exercise::new("Dumbbell Curls", "", curl_sets()),
        Exercise::new("Hammer Curls", "", curl_sets()),
    ])
}

fn curl_sets() -> Vec<ExerciseSet> {
    [(10_u16, 10_u16), (20, 10)]
        .into_iter()
        .map(|(weight, reps)| ExerciseSet::new(Weight::from(weight), Reps::from(reps)))
        .collect()
}
