//! Logger setup.
//!
//! The report mode logs to stderr. The dashboard owns the terminal, so it logs
//! to a file instead: either the one given on the command line or a fresh
//! `helixscope-<random>.log` in the temporary directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::LevelFilter;

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Maps the number of `-v` flags to a level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Random log file name in the temporary directory.
pub fn default_log_path() -> PathBuf {
    let suffix: u32 = rand::random();
    std::env::temp_dir().join(format!("helixscope-{:08x}.log", suffix))
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    fern::log_file(path).with_context(|| format!("Cannot open log file {}", path.display()))
}

/// Installs the global logger.
pub fn init_logger(target: &LogTarget, verbosity: u8) -> Result<()> {
    let dispatch = Dispatch::new().level(level_for_verbosity(verbosity));

    let dispatch = match target {
        LogTarget::Stderr => {
            let colors = ColoredLevelConfig::default()
                .info(Color::Green)
                .debug(Color::Cyan);
            dispatch
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} {:>5}] {}",
                        chrono::Local::now().format("%H:%M:%S"),
                        colors.color(record.level()),
                        message
                    ))
                })
                .chain(std::io::stderr())
        }
        LogTarget::File(path) => dispatch
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {:>5}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.level(),
                    message
                ))
            })
            .chain(open_log_file(path)?),
    };

    dispatch.apply().context("Logger already initialized")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_default_log_path() {
        let path = default_log_path();
        assert_eq!(path.parent(), Some(std::env::temp_dir().as_path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("helixscope-") && name.ends_with(".log"));
    }
}
