use log::{debug, error};

use crate::{
    Exercise, ExerciseDraft, ExerciseID, ExerciseSet, NotFound, ReadError, Reps, SetID,
    UpdateError, Weight, WorkoutRepository, WorkoutService, WorkoutSummary,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn into_repository(self) -> R {
        self.repository
    }
}

macro_rules! log_on_error {
    ($result: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> Service<R> {
    fn modify_exercise<T>(
        &mut self,
        id: ExerciseID,
        modify: impl FnOnce(&mut Exercise) -> Result<T, UpdateError>,
    ) -> Result<(T, Exercise), UpdateError> {
        let mut exercise = self.repository.read_exercise(id)?;
        let value = modify(&mut exercise)?;
        let exercise = self.repository.replace_exercise(exercise)?;
        Ok((value, exercise))
    }

    fn modify_set(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
        modify: impl FnOnce(&mut ExerciseSet),
    ) -> Result<ExerciseSet, UpdateError> {
        self.modify_exercise(exercise_id, |exercise| {
            let set = exercise.set_mut(set_id).ok_or(NotFound::Set(set_id))?;
            modify(set);
            Ok(set.clone())
        })
        .map(|(set, _)| set)
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
        log_on_error!(
            self.repository.read_exercise(id),
            ReadError,
            "get",
            "exercise"
        )
    }

    fn get_summary(&self) -> Result<WorkoutSummary, ReadError> {
        log_on_error!(
            self.repository
                .read_exercises()
                .map(|exercises| WorkoutSummary::from(exercises.as_slice())),
            ReadError,
            "get",
            "summary"
        )
    }

    fn add_set(&mut self, exercise_id: ExerciseID) -> Result<ExerciseSet, UpdateError> {
        log_on_error!(
            self.modify_exercise(exercise_id, |exercise| Ok(exercise.add_set().clone()))
                .map(|(set, _)| set),
            UpdateError,
            "add",
            "set"
        )
    }

    fn remove_set(
        &mut self,
        exercise_id: ExerciseID,
        index: usize,
    ) -> Result<ExerciseSet, UpdateError> {
        log_on_error!(
            self.modify_exercise(exercise_id, |exercise| Ok(exercise.remove_set(index)?))
                .map(|(set, _)| set),
            UpdateError,
            "remove",
            "set"
        )
    }

    fn update_weight(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
        weight: Weight,
    ) -> Result<ExerciseSet, UpdateError> {
        log_on_error!(
            self.modify_set(exercise_id, set_id, |set| set.update_weight(weight)),
            UpdateError,
            "update weight of",
            "set"
        )
    }

    fn update_reps(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
        reps: Reps,
    ) -> Result<ExerciseSet, UpdateError> {
        log_on_error!(
            self.modify_set(exercise_id, set_id, |set| set.update_reps(reps)),
            UpdateError,
            "update reps of",
            "set"
        )
    }

    fn toggle_completed(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<ExerciseSet, UpdateError> {
        log_on_error!(
            self.modify_set(exercise_id, set_id, ExerciseSet::toggle_completed),
            UpdateError,
            "toggle",
            "set"
        )
    }

    fn reset_completed(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<ExerciseSet, UpdateError> {
        log_on_error!(
            self.modify_set(exercise_id, set_id, ExerciseSet::reset_completed),
            UpdateError,
            "reset",
            "set"
        )
    }

    fn rename_exercise(&mut self, id: ExerciseID, name: &str) -> Result<Exercise, UpdateError> {
        log_on_error!(
            self.modify_exercise(id, |exercise| {
                exercise.rename(name);
                Ok(())
            })
            .map(|((), exercise)| exercise),
            UpdateError,
            "rename",
            "exercise"
        )
    }

    fn redescribe_exercise(
        &mut self,
        id: ExerciseID,
        description: &str,
    ) -> Result<Exercise, UpdateError> {
        log_on_error!(
            self.modify_exercise(id, |exercise| {
                exercise.redescribe(description);
                Ok(())
            })
            .map(|((), exercise)| exercise),
            UpdateError,
            "redescribe",
            "exercise"
        )
    }

    fn open_draft(&self, id: ExerciseID) -> Result<ExerciseDraft, ReadError> {
        log_on_error!(
            self.repository
                .read_exercise(id)
                .map(|exercise| ExerciseDraft::open(&exercise)),
            ReadError,
            "open draft of",
            "exercise"
        )
    }

    fn commit_draft(&mut self, draft: ExerciseDraft) -> Result<Exercise, UpdateError> {
        log_on_error!(
            self.repository
                .read_exercise(draft.exercise_id())
                .map_err(UpdateError::from)
                .and_then(|stored| {
                    if stored.num_sets() > 0 && draft.num_sets() == 0 {
                        return Err(UpdateError::MinimumSetViolation);
                    }
                    self.repository.replace_exercise(draft.into_exercise())
                }),
            UpdateError,
            "commit draft of",
            "exercise"
        )
    }
}
