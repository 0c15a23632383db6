use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};

use crate::error::{Result, TourError};

/// Logger settings, usually taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub timestamp: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            timestamp: false,
        }
    }
}

/// Installs a stderr logger. `RUST_LOG`, when set, overrides `config.level`.
pub fn init_logger(config: LogConfig) -> Result<()> {
    let timestamp = config.timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(config.level)
        .parse_env("RUST_LOG")
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });

    builder.try_init().map_err(|e| TourError::logger(e.to_string()))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(level_tag(Level::Warn), "WARN");
        assert_eq!(level_tag(Level::Trace), "TRACE");
    }

    #[test]
    fn test_default_config() {
        let c = LogConfig::default();
        assert_eq!(c.level, LevelFilter::Info);
        assert!(!c.timestamp);
    }
}
