//! Logger setup for the host platform.
//!
//! The logger is installed once per process; the level can be changed at any time
//! afterwards through [set_log_level], which every [SessionStorageBuilder::build]
//! does with its configured level.
//!
//! [SessionStorageBuilder::build]: crate::storage::SessionStorageBuilder::build

use std::sync::Once;

use log::{LevelFilter, Record};

use crate::storage::LogLevel;

static INIT_LOG: Once = Once::new();

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Installs the platform logger. Only the first call installs anything, later
/// calls just apply `level`.
///
/// The platform logger itself lets every record through, filtering is left to
/// `log`'s max level so it can be raised again after start up.
pub fn init_log(level: LogLevel) {
    INIT_LOG.call_once(platform::init_log);
    set_log_level(level);
}

/// Changes the log filter level of the running process.
#[uniffi::export]
pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into())
}

/// One line per record. Errors carry their source location since they are the
/// ones that end up in bug reports.
fn render(record: &Record) -> String {
    if record.level() == log::Level::Error {
        format!(
            "[{}] {} {}:{} - {}",
            record.level(),
            record.target(),
            record.file().unwrap_or("unknown"),
            record
                .line()
                .map(|line| line.to_string())
                .as_deref()
                .unwrap_or("unknown"),
            record.args()
        )
    } else {
        format!("[{}] {} - {}", record.level(), record.target(), record.args())
    }
}

#[cfg(all(target_os = "android", not(test)))]
mod platform {
    use super::*;

    pub fn init_log() {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(LevelFilter::Trace)
                .with_tag("SessionStorage")
                .format(|f, record| f.write_str(&render(record))),
        );
    }
}

#[cfg(all(target_vendor = "apple", not(test)))]
mod platform {
    use super::*;

    pub fn init_log() {
        if let Err(e) = oslog::OsLogger::new("com.session-storage.core")
            .level_filter(LevelFilter::Trace)
            .init()
        {
            eprintln!("{e}");
        }
    }
}

#[cfg(any(test, not(any(target_os = "android", target_vendor = "apple"))))]
mod platform {
    use std::io::Write;

    use env_logger::{Builder, Env};

    use super::*;

    pub fn init_log() {
        let _ = Builder::from_env(Env::default())
            .is_test(cfg!(test))
            .format(|formatter, record| writeln!(formatter, "{}", render(record)))
            .filter(None, LevelFilter::Trace)
            .try_init();
    }
}
