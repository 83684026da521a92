#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use color_eyre::eyre;
pub use urlquery_testhelpers_macros::test;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize, Style};
use std::io::Write;
use std::sync::Once;

/// Environment variable holding the maximum log level
pub const LOG_ENV: &str = "URLQUERY_LOG";

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_style = match record.level() {
            Level::Error => Style::new().fg_rgb::<243, 139, 168>(),
            Level::Warn => Style::new().fg_rgb::<249, 226, 175>(),
            Level::Info => Style::new().fg_rgb::<166, 227, 161>(),
            Level::Debug => Style::new().fg_rgb::<137, 180, 250>(),
            Level::Trace => Style::new().fg_rgb::<148, 226, 213>(),
        };

        eprintln!(
            "{} - {}: {}",
            record.level().style(level_style),
            record
                .target()
                .style(Style::new().fg_rgb::<137, 180, 250>()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parses a level filter the way `URLQUERY_LOG` spells it. Unknown values give `None`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Trace)
}

/// Installs color-eyre (except on miri), and sets up a simple logger.
///
/// Safe to call from every test: only the first call in a process does anything.
pub fn setup() {
    static SETUP: Once = Once::new();

    SETUP.call_once(|| {
        if log::set_logger(&SimpleLogger).is_ok() {
            log::set_max_level(level_from_env());
        }

        #[cfg(not(miri))]
        {
            if let Err(err) = color_eyre::install() {
                log::debug!("Keeping the existing error report hook: {err}");
            }
        }
    });
}
