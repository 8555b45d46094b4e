use log::LevelFilter;

#[allow(clippy::missing_errors_doc)]
pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
    fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(clippy::missing_errors_doc)]
pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Pounds,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl WeightUnit {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lbs",
        }
    }
}
