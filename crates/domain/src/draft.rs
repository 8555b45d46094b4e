use derive_more::Deref;

use crate::{Exercise, ExerciseID, ExerciseSet, NotFound, RemoveSetError, Reps, Weight};

/// Working copy of an exercise for an edit screen.
///
/// Changes stay local to the draft until it is committed through
/// [`WorkoutService::commit_draft`](crate::WorkoutService::commit_draft). Dropping the draft
/// discards them.
#[derive(Deref, Debug, Clone, PartialEq)]
pub struct ExerciseDraft(Exercise);

impl ExerciseDraft {
    #[must_use]
    pub fn open(exercise: &Exercise) -> Self {
        Self(exercise.clone())
    }

    #[must_use]
    pub fn exercise_id(&self) -> ExerciseID {
        self.0.id
    }

    #[must_use]
    pub fn is_modified(&self, original: &Exercise) -> bool {
        self.0 != *original
    }

    pub fn rename(&mut self, name: &str) {
        self.0.rename(name);
    }

    pub fn redescribe(&mut self, description: &str) {
        self.0.redescribe(description);
    }

    pub fn add_set(&mut self) -> &ExerciseSet {
        self.0.add_set()
    }

    pub fn remove_set(&mut self, index: usize) -> Result<ExerciseSet, RemoveSetError> {
        self.0.remove_set(index)
    }

    pub fn update_weight(&mut self, index: usize, weight: Weight) -> Result<(), NotFound> {
        self.set_at(index)?.update_weight(weight);
        Ok(())
    }

    pub fn update_reps(&mut self, index: usize, reps: Reps) -> Result<(), NotFound> {
        self.set_at(index)?.update_reps(reps);
        Ok(())
    }

    #[must_use]
    pub fn into_exercise(self) -> Exercise {
        self.0
    }

    fn set_at(&mut self, index: usize) -> Result<&mut ExerciseSet, NotFound> {
        self.0.sets.get_mut(index).ok_or(NotFound::SetIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::sample_workout;

    use super::*;

    #[test]
    fn test_draft_leaves_original_untouched() {
        let original = sample_workout().exercises[0].clone();
        let mut draft = ExerciseDraft::open(&original);
        assert!(!draft.is_modified(&original));

        draft.rename("Incline Curls");
        draft.redescribe("Seated on an incline bench");
        draft.add_set();
        draft.update_weight(0, Weight::new(12.5).unwrap()).unwrap();
        draft.update_reps(2, Reps::new(6.0).unwrap()).unwrap();

        assert!(draft.is_modified(&original));
        assert_eq!(original.name, "Dumbbell Curls");
        assert_eq!(original.num_sets(), 2);

        let edited = draft.into_exercise();
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.name, "Incline Curls");
        assert_eq!(edited.description, "Seated on an incline bench");
        assert_eq!(edited.num_sets(), 3);
        assert_eq!(edited.sets[0].weight, Weight::new(12.5).unwrap());
        assert_eq!(edited.sets[2].weight, Weight::new(20.0).unwrap());
        assert_eq!(edited.sets[2].reps, Reps::new(6.0).unwrap());
    }

    #[test]
    fn test_draft_keeps_minimum_set() {
        let original = sample_workout().exercises[1].clone();
        let mut draft = ExerciseDraft::open(&original);

        assert_eq!(draft.remove_set(1), Ok(original.sets[1].clone()));
        assert_eq!(
            draft.remove_set(0),
            Err(RemoveSetError::MinimumSetViolation)
        );
        assert_eq!(draft.sets, vec![original.sets[0].clone()]);
        assert_eq!(draft.exercise_id(), original.id);
    }

    #[test]
    fn test_draft_update_unknown_index() {
        let original = sample_workout().exercises[0].clone();
        let mut draft = ExerciseDraft::open(&original);

        assert_eq!(
            draft.update_weight(5, Weight::default()),
            Err(NotFound::SetIndex(5))
        );
        assert_eq!(
            draft.update_reps(2, Reps::default()),
            Err(NotFound::SetIndex(2))
        );
        assert!(!draft.is_modified(&original));
    }
}
