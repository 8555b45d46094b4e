#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod draft;
mod error;
mod exercise;
mod service;
mod set;
mod workout;

pub use draft::ExerciseDraft;
pub use error::{NotFound, ReadError, StorageError, UpdateError};
pub use exercise::{Exercise, ExerciseID, RemoveSetError};
pub use service::Service;
pub use set::{ExerciseSet, Reps, RepsError, SetID, Weight, WeightError};
pub use workout::{Workout, WorkoutRepository, WorkoutService, WorkoutSummary, sample_workout};
