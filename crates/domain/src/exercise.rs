use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{ExerciseSet, Reps, SetID, Weight};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    #[must_use]
    pub fn new(name: &str, description: &str, sets: Vec<ExerciseSet>) -> Self {
        Self {
            id: ExerciseID::new(),
            name: name.to_string(),
            description: description.to_string(),
            image: None,
            sets,
        }
    }

    /// Append a set that repeats the weight and reps of the last set.
    pub fn add_set(&mut self) -> &ExerciseSet {
        let (weight, reps) = self
            .sets
            .last()
            .map_or((Weight::default(), Reps::default()), |s| (s.weight, s.reps));
        self.sets.push(ExerciseSet::new(weight, reps));
        &self.sets[self.sets.len() - 1]
    }

    pub fn remove_set(&mut self, index: usize) -> Result<ExerciseSet, RemoveSetError> {
        if index >= self.sets.len() {
            return Err(RemoveSetError::IndexOutOfRange(index));
        }

        if self.sets.len() == 1 {
            return Err(RemoveSetError::MinimumSetViolation);
        }

        Ok(self.sets.remove(index))
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn redescribe(&mut self, description: &str) {
        self.description = description.to_string();
    }

    #[must_use]
    pub fn set(&self, id: SetID) -> Option<&ExerciseSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    pub fn set_mut(&mut self, id: SetID) -> Option<&mut ExerciseSet> {
        self.sets.iter_mut().find(|s| s.id == id)
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn num_completed_sets(&self) -> usize {
        self.sets.iter().filter(|s| s.completed).count()
    }

    #[must_use]
    pub fn completion_ratio(&self) -> f32 {
        ratio(self.num_completed_sets(), self.num_sets())
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RemoveSetError {
    #[error("an exercise must keep at least one set")]
    MinimumSetViolation,
    #[error("no set at index {0}")]
    IndexOutOfRange(usize),
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32
    } else {
        0.0
    }
}
