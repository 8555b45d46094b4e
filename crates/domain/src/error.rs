use crate::{ExerciseID, RemoveSetError, SetID};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error("an exercise must keep at least one set")]
    MinimumSetViolation,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ReadError> for UpdateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound(not_found) => UpdateError::NotFound(not_found),
            ReadError::Storage(storage) => UpdateError::Storage(storage),
        }
    }
}

impl From<RemoveSetError> for UpdateError {
    fn from(value: RemoveSetError) -> Self {
        match value {
            RemoveSetError::MinimumSetViolation => UpdateError::MinimumSetViolation,
            RemoveSetError::IndexOutOfRange(index) => {
                UpdateError::NotFound(NotFound::SetIndex(index))
            }
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    #[error("exercise {0} not found")]
    Exercise(ExerciseID),
    #[error("set {0} not found")]
    Set(SetID),
    #[error("no set at index {0}")]
    SetIndex(usize),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
