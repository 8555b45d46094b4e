#![warn(clippy::pedantic)]

pub mod format;
pub mod log;
mod service;
mod settings;

pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService, WeightUnit};
