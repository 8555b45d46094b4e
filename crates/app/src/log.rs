use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn add_log_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Newest entry first, at most [`MAX_ENTRIES`] entries.
pub fn push_entry(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(MAX_ENTRIES);
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(
    storage: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };

        eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);

        if let Ok(log) = LOG.lock() {
            if let Some(ref repository) = *log {
                if let Ok(repository) = repository.lock() {
                    let _ = repository.write_entry(entry);
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: String::from("Oct 19 10:00:00"),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[derive(Default)]
    struct Entries(Mutex<VecDeque<Entry>>);

    impl Repository for Entries {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            self.0
                .lock()
                .map(|entries| entries.clone())
                .map_err(|err| Error::Unknown(err.to_string()))
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            let mut entries = self.0.lock().map_err(|err| Error::Unknown(err.to_string()))?;
            push_entry(&mut entries, entry);
            Ok(())
        }
    }

    #[test]
    fn test_init() {
        let entries = Arc::new(Mutex::new(Entries::default()));

        init(entries.clone(), LevelFilter::Info).unwrap();
        ::log::info!("completed set 1 of Dumbbell Curls");
        ::log::debug!("replaced exercise");

        let entries = entries.lock().unwrap().read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Info);
        assert_eq!(entries[0].message, "completed set 1 of Dumbbell Curls");

        assert!(init(Arc::new(Mutex::new(Entries::default())), LevelFilter::Info).is_err());
    }

    #[test]
    fn test_push_entry() {
        let mut entries = VecDeque::new();

        for i in 0..=MAX_ENTRIES {
            push_entry(&mut entries, entry(&i.to_string()));
        }

        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front(), Some(&entry(&MAX_ENTRIES.to_string())));
        assert_eq!(entries.back(), Some(&entry("1")));
    }

    #[test]
    fn test_entry_serialization() {
        let entry = Entry {
            level: Level::Warn,
            ..entry("failed to remove set")
        };

        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            json,
            r#"{"time":"Oct 19 10:00:00","level":"Warn","message":"failed to remove set"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&json).unwrap(), entry);
    }
}
