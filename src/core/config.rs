//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tangier-live/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The file only seeds the starting preferences; changes made in the
//! settings screen are never written back.
//!
//! Loading and resolving run before the logger exists, since the log level
//! and file come from here. Anything worth reporting is collected as a
//! `ConfigNote` and logged by the caller once logging is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::language::Language;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TangierConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub language: Option<Language>,
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "tangier-live.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

const ENV_LANGUAGE: &str = "TANGIER_LANGUAGE";
const ENV_DARK_MODE: &str = "TANGIER_DARK_MODE";

// ============================================================================
// Notes (deferred log records)
// ============================================================================

/// A log record produced while loading or resolving config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

impl ConfigNote {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn log(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

/// A parsed config file plus what happened while finding it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: TangierConfig,
    pub notes: Vec<ConfigNote>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub dark_mode: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Values that were ignored during resolution
    pub notes: Vec<ConfigNote>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            dark_mode: false,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            notes: Vec::new(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tangier-live/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tangier-live").join("config.toml"))
}

/// Load config from `~/.tangier-live/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TangierConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: TangierConfig::default(),
            notes: vec![ConfigNote::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            )],
        }),
    }
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let mut notes = Vec::new();
    if !path.exists() {
        notes.push(ConfigNote::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        ));
        if let Err(note) = generate_default_config(path) {
            notes.push(note);
        }
        return Ok(LoadedConfig {
            config: TangierConfig::default(),
            notes,
        });
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TangierConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.push(ConfigNote::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notes.push(ConfigNote::new(Level::Debug, format!("Config: {:?}", config)));
    Ok(LoadedConfig { config, notes })
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Tangier Live Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# language = "en"                    # "en", "fr" or "ar" (or TANGIER_LANGUAGE)
# dark_mode = false                  # Or TANGIER_DARK_MODE=1

# [logging]
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
# file = "tangier-live.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> Result<(), ConfigNote> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ConfigNote::new(Level::Warn, format!("Failed to create config directory: {}", e))
        })?;
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
        .map_err(|e| ConfigNote::new(Level::Warn, format!("Failed to write default config: {}", e)))
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_language` is `None` when the flag wasn't given. `--dark` can only
/// switch dark mode on, so `false` means "not specified".
pub fn resolve(config: &TangierConfig, cli_language: Option<Language>, cli_dark: bool) -> ResolvedConfig {
    resolve_with_env(config, |key| std::env::var(key).ok(), cli_language, cli_dark)
}

fn resolve_with_env(
    config: &TangierConfig,
    env: impl Fn(&str) -> Option<String>,
    cli_language: Option<Language>,
    cli_dark: bool,
) -> ResolvedConfig {
    let mut notes = Vec::new();

    // Language: CLI → env → config → default
    let language = cli_language
        .or_else(|| env(ENV_LANGUAGE).and_then(|code| parse_env_language(&code, &mut notes)))
        .or(config.general.language)
        .unwrap_or_default();

    // Dark mode: CLI → env → config → default
    let dark_mode = if cli_dark {
        true
    } else {
        env(ENV_DARK_MODE)
            .and_then(|v| parse_flag(&v, &mut notes))
            .or(config.general.dark_mode)
            .unwrap_or(false)
    };

    let log_level = config
        .logging
        .level
        .as_deref()
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                notes.push(ConfigNote::new(
                    Level::Warn,
                    format!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL),
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        language,
        dark_mode,
        log_level,
        log_file,
        notes,
    }
}

fn parse_env_language(code: &str, notes: &mut Vec<ConfigNote>) -> Option<Language> {
    let language = Language::from_code(code.trim());
    if language.is_none() {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!("Ignoring {}={:?}: unsupported language", ENV_LANGUAGE, code),
        ));
    }
    language
}

fn parse_flag(value: &str, notes: &mut Vec<ConfigNote>) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Ignoring {}={:?}: expected true or false", ENV_DARK_MODE, other),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&TangierConfig::default(), no_env, None, false);
        assert_eq!(resolved.language, Language::En);
        assert!(!resolved.dark_mode);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TangierConfig {
            general: GeneralConfig {
                language: Some(Language::Fr),
                dark_mode: Some(true),
            },
            logging: LoggingConfig {
                level: Some("info".to_string()),
                file: Some("/tmp/tangier.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, no_env, None, false);
        assert_eq!(resolved.language, Language::Fr);
        assert!(resolved.dark_mode);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/tangier.log"));
    }

    #[test]
    fn test_env_overrides_file_and_cli_overrides_env() {
        let config = TangierConfig {
            general: GeneralConfig {
                language: Some(Language::Fr),
                dark_mode: Some(false),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_LANGUAGE, "ar"), (ENV_DARK_MODE, "1")]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, lookup, None, false);
        assert_eq!(resolved.language, Language::Ar);
        assert!(resolved.dark_mode);

        let resolved = resolve_with_env(&config, lookup, Some(Language::En), false);
        assert_eq!(resolved.language, Language::En);
    }

    #[test]
    fn test_bad_env_values_fall_through() {
        let config = TangierConfig {
            general: GeneralConfig {
                language: Some(Language::Fr),
                dark_mode: Some(true),
            },
            ..Default::default()
        };
        let lookup = |key: &str| match key {
            ENV_LANGUAGE => Some("klingon".to_string()),
            ENV_DARK_MODE => Some("maybe".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, lookup, None, false);
        assert_eq!(resolved.language, Language::Fr);
        assert!(resolved.dark_mode);

        let messages: Vec<&str> = resolved.notes.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("TANGIER_LANGUAGE") && messages[0].contains("klingon"));
        assert!(messages[1].contains("TANGIER_DARK_MODE") && messages[1].contains("maybe"));
        assert!(resolved.notes.iter().all(|n| n.level == Level::Warn));
    }

    #[test]
    fn test_cli_dark_wins() {
        let lookup = |key: &str| (key == ENV_DARK_MODE).then(|| "false".to_string());
        let resolved = resolve_with_env(&TangierConfig::default(), lookup, None, true);
        assert!(resolved.dark_mode);
    }

    #[test]
    fn test_unknown_log_level_uses_default() {
        let config = TangierConfig {
            logging: LoggingConfig {
                level: Some("chatty".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, no_env, None, false);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.notes,
            vec![ConfigNote::new(
                Level::Warn,
                "Unknown log level \"chatty\", using DEBUG",
            )]
        );
    }

    #[test]
    fn test_clean_resolution_has_no_notes() {
        let lookup = |key: &str| (key == ENV_LANGUAGE).then(|| "fr".to_string());
        let resolved = resolve_with_env(&TangierConfig::default(), lookup, None, false);
        assert!(resolved.notes.is_empty());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
language = "ar"
"#;
        let config: TangierConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.language, Some(Language::Ar));
        assert!(config.general.dark_mode.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_generated_default_is_all_comments() {
        let config: TangierConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.language.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_file_is_generated() {
        let dir = std::env::temp_dir().join(format!("tangier-live-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.general.language.is_none());
        assert!(path.exists());
        assert_eq!(loaded.notes.len(), 1);
        assert_eq!(loaded.notes[0].level, Level::Info);
        assert!(loaded.notes[0].message.starts_with("No config file found"));

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.notes[0].message.starts_with("Loaded config from"));

        fs::write(&path, "[general]\ndark_mode = \"sometimes\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}
