use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use underworld_engine::MailerSettings;

use super::logging::LogDestination;

pub(crate) const SETTINGS_FILENAME: &str = ".underworld.ron";

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// On-disk shape; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    recipient: Option<String>,
    send_delay_ms: Option<u64>,
    reject_all: Option<bool>,
    log_destination: Option<LogDestination>,
    verbose: Option<bool>,
}

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) mailer: MailerSettings,
    pub(crate) log_destination: LogDestination,
    pub(crate) log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mailer: MailerSettings::default(),
            log_destination: LogDestination::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    fn from_file(file: SettingsFile) -> Self {
        let defaults = Settings::default();
        let mailer = MailerSettings {
            recipient: file.recipient.unwrap_or(defaults.mailer.recipient),
            send_delay: file
                .send_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.mailer.send_delay),
            reject_all: file.reject_all.unwrap_or(defaults.mailer.reject_all),
        };
        Self {
            mailer,
            log_destination: file.log_destination.unwrap_or(defaults.log_destination),
            log_level: if file.verbose.unwrap_or(false) {
                LevelFilter::Debug
            } else {
                defaults.log_level
            },
        }
    }
}

/// Loads settings from `dir`. A missing file yields the defaults.
pub(crate) fn load_settings(dir: &Path) -> Result<Settings, SettingsError> {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(source) => return Err(SettingsError::Read { path, source }),
    };

    let file: SettingsFile =
        ron::from_str(&content).map_err(|source| SettingsError::Parse { path, source })?;
    Ok(Settings::from_file(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(dir.path()).unwrap();
        assert_eq!(settings.mailer.send_delay, Duration::from_secs(2));
        assert!(!settings.mailer.reject_all);
        assert_eq!(settings.log_destination, LogDestination::File);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILENAME),
            "(send_delay_ms: Some(250), reject_all: Some(true), log_destination: Some(Terminal))",
        )
        .unwrap();

        let settings = load_settings(dir.path()).unwrap();

        assert_eq!(settings.mailer.send_delay, Duration::from_millis(250));
        assert!(settings.mailer.reject_all);
        assert_eq!(settings.mailer.recipient, "owner@example.com");
        assert_eq!(settings.log_destination, LogDestination::Terminal);
        assert_eq!(settings.log_level, LevelFilter::Info);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "(send_delay_ms: \"soon\")").unwrap();

        let err = load_settings(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
