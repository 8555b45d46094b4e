use std::fmt;

use derive_more::{Deref, Display};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub id: SetID,
    pub weight: Weight,
    pub reps: Reps,
    pub completed: bool,
}

impl ExerciseSet {
    #[must_use]
    pub fn new(weight: Weight, reps: Reps) -> Self {
        Self {
            id: SetID::new(),
            weight,
            reps,
            completed: false,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    pub fn reset_completed(&mut self) {
        self.completed = false;
    }

    pub fn update_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn update_reps(&mut self, reps: Reps) {
        self.reps = reps;
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetID(Uuid);

impl SetID {
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

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl From<u16> for Weight {
    fn from(value: u16) -> Self {
        Self(f32::from(value))
    }
}

impl From<Weight> for f32 {
    fn from(value: Weight) -> Self {
        value.0
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a non-negative number")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reps(f32);

impl Reps {
    pub fn new(value: f32) -> Result<Self, RepsError> {
        if !value.is_finite() || value < 0.0 {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl From<u16> for Reps {
    fn from(value: u16) -> Self {
        Self(f32::from(value))
    }
}

impl From<Reps> for f32 {
    fn from(value: Reps) -> Self {
        value.0
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be a non-negative number")]
    OutOfRange,
    #[error("Reps must be a decimal")]
    ParseError,
}

/// Whole numbers are written without decimals, everything else with one fractional digit.
fn write_number(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    if value.fract() == 0.0 {
        write!(f, "{value:.0}")
    } else {
        write!(f, "{value:.1}")
    }
}
