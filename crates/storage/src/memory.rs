use log::debug;
use planner_domain::{
    Exercise, ExerciseID, NotFound, ReadError, UpdateError, Workout, WorkoutRepository,
};

/// Keeps the workout of the current session.
#[derive(Debug, Default)]
pub struct Memory {
    workout: Workout,
}

impl Memory {
    #[must_use]
    pub fn new(workout: Workout) -> Self {
        Self { workout }
    }

    #[must_use]
    pub fn workout(&self) -> &Workout {
        &self.workout
    }
}

impl WorkoutRepository for Memory {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        Ok(self.workout.exercises.clone())
    }

    fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
        Ok(self
            .workout
            .exercise(id)
            .cloned()
            .ok_or(NotFound::Exercise(id))?)
    }

    fn replace_exercise(&mut self, exercise: Exercise) -> Result<Exercise, UpdateError> {
        self.workout.replace_exercise(exercise.clone())?;
        debug!("replaced exercise {}", exercise.id);
        Ok(exercise)
    }
}
