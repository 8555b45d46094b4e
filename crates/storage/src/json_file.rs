use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use planner_app::{Settings, SettingsRepository, log};
use serde::{Serialize, de::DeserializeOwned};

const FILE_SETTINGS: &str = "settings.json";
const FILE_LOG: &str = "log.json";

/// Stores settings and log entries as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct JsonFile {
    dir: PathBuf,
}

impl JsonFile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, String> {
        match fs::read(self.dir.join(file)) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|err| format!("failed to parse {file}: {err}")),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("failed to read {file}: {err}")),
        }
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), String> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|err| err.to_string())?;
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(self.dir.join(file), bytes))
            .map_err(|err| format!("failed to write {file}: {err}"))
    }
}

impl SettingsRepository for JsonFile {
    fn read_settings(&self) -> Result<Settings, String> {
        self.read(FILE_SETTINGS)
            .map(Option::unwrap_or_default)
    }

    fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.write(FILE_SETTINGS, &settings)
    }
}

impl log::Repository for JsonFile {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.read(FILE_LOG)
            .map(Option::unwrap_or_default)
            .map_err(log::Error::Unknown)
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        self.write(FILE_LOG, &entries).map_err(log::Error::Unknown)
    }
}
