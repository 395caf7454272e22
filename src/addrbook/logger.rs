//! Process-wide file logger behind the `log` facade.
//!
//! Lines look like `2024-09-05 10:15:02,114:AddressBook:INFO:Contact added: Asha Rao`
//! and are appended to the configured file. Only the binary installs it; library
//! code talks to [`crate::events::EventLog`] instead.

use crate::error::{AddressBookError, Result};
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

static FILE_LOGGER: OnceCell<FileLogger> = OnceCell::new();

struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{}:{}:{}:{}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.target(),
            record.level(),
            record.args()
        );
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| AddressBookError::Config(format!("Unknown log level: {}", level)))
}

/// Installs the file logger. Only the first call in a process takes effect.
pub fn setup<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let logger = FILE_LOGGER.get_or_try_init(|| -> Result<FileLogger> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(FileLogger {
            file: Mutex::new(file),
            level,
        })
    })?;

    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
    Ok(())
}

pub fn flush() {
    log::logger().flush();
}
