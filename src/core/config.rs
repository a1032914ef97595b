//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.contact-form/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::field::Field;
use crate::core::state::DEFAULT_TITLE;
use crate::core::validate::DEFAULT_FIRST_NAME_MIN_LEN;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub live_validation: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    pub first_name_min_len: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaceholderConfig {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLACEHOLDERS: [&str; 4] = ["Edd", "Burke", "bluebill1049@hotmail.com", ""];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub title: String,
    pub live_validation: bool,
    pub first_name_min_len: usize,
    /// Indexed by `Field::index()`.
    pub placeholders: [String; 4],
}

impl ResolvedConfig {
    pub fn placeholder(&self, field: Field) -> &str {
        &self.placeholders[field.index()]
    }
}

/// Built-in values only. Never consults the environment.
impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&FormConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub first_name_min_len: Option<usize>,
    pub no_live_validation: bool,
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

/// Returns the path to `~/.contact-form/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".contact-form").join("config.toml"))
}

/// Load config from `path`, or from `~/.contact-form/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `FormConfig::default()`. An explicit path that doesn't exist is an
/// I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<FormConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(FormConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(FormConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FormConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Contact Form Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Contact Form"             # Or set CONTACT_FORM_TITLE env var
# live_validation = true             # Show errors for edited fields before submit

# [validation]
# first_name_min_len = 5             # Or set CONTACT_FORM_FIRST_NAME_MIN_LEN

# [placeholders]
# first_name = "Edd"
# last_name = "Burke"
# email = "bluebill1049@hotmail.com"
# message = ""
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

pub const TITLE_ENV: &str = "CONTACT_FORM_TITLE";
pub const FIRST_NAME_MIN_LEN_ENV: &str = "CONTACT_FORM_FIRST_NAME_MIN_LEN";

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FormConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process.
pub fn resolve_with(
    config: &FormConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Title: env → config → default
    let title = env(TITLE_ENV)
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Min length: CLI → env → config → default, never below 1
    let env_min_len = env(FIRST_NAME_MIN_LEN_ENV).and_then(|v| match v.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", FIRST_NAME_MIN_LEN_ENV, v, e);
            None
        }
    });
    let first_name_min_len = cli
        .first_name_min_len
        .or(env_min_len)
        .or(config.validation.first_name_min_len)
        .unwrap_or(DEFAULT_FIRST_NAME_MIN_LEN)
        .max(1);

    let live_validation =
        !cli.no_live_validation && config.general.live_validation.unwrap_or(true);

    let p = &config.placeholders;
    let configured = [&p.first_name, &p.last_name, &p.email, &p.message];
    let placeholders = std::array::from_fn(|i| {
        configured[i]
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDERS[i].to_string())
    });

    ResolvedConfig {
        title,
        live_validation,
        first_name_min_len,
        placeholders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn fake_env(key: &str) -> Option<String> {
        match key {
            TITLE_ENV => Some("From Env".to_string()),
            FIRST_NAME_MIN_LEN_ENV => Some(" 7 ".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_default_config_parses() {
        let config = FormConfig::default();
        assert!(config.general.title.is_none());
        assert!(config.validation.first_name_min_len.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&FormConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.first_name_min_len, DEFAULT_FIRST_NAME_MIN_LEN);
        assert!(resolved.live_validation);
        assert_eq!(resolved.placeholder(Field::FirstName), "Edd");
        assert_eq!(resolved.placeholder(Field::LastName), "Burke");
        assert_eq!(resolved.placeholder(Field::Email), "bluebill1049@hotmail.com");
        assert_eq!(resolved.placeholder(Field::Message), "");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FormConfig {
            general: GeneralConfig {
                title: None,
                live_validation: Some(false),
            },
            validation: ValidationConfig {
                first_name_min_len: Some(3),
            },
            placeholders: PlaceholderConfig {
                first_name: Some("Ada".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env);
        assert!(!resolved.live_validation);
        assert_eq!(resolved.first_name_min_len, 3);
        assert_eq!(resolved.placeholder(Field::FirstName), "Ada");
        assert_eq!(resolved.placeholder(Field::LastName), "Burke");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = FormConfig {
            validation: ValidationConfig {
                first_name_min_len: Some(3),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            first_name_min_len: Some(8),
            no_live_validation: true,
        };
        let resolved = resolve_with(&config, &cli, fake_env);
        assert_eq!(resolved.first_name_min_len, 8);
        assert!(!resolved.live_validation);
    }

    #[test]
    fn test_min_len_is_clamped_to_one() {
        let cli = CliOverrides {
            first_name_min_len: Some(0),
            ..Default::default()
        };
        let resolved = resolve_with(&FormConfig::default(), &cli, no_env);
        assert_eq!(resolved.first_name_min_len, 1);
    }

    #[test]
    fn test_env_overrides_config_but_not_cli() {
        let config = FormConfig {
            general: GeneralConfig {
                title: Some("From File".to_string()),
                live_validation: None,
            },
            validation: ValidationConfig {
                first_name_min_len: Some(3),
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), fake_env);
        assert_eq!(resolved.title, "From Env");
        assert_eq!(resolved.first_name_min_len, 7);
    }

    #[test]
    fn test_bad_env_min_len_is_ignored() {
        let env = |key: &str| (key == FIRST_NAME_MIN_LEN_ENV).then(|| "five".to_string());
        let resolved = resolve_with(&FormConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.first_name_min_len, DEFAULT_FIRST_NAME_MIN_LEN);
    }

    #[test]
    fn test_default_ignores_environment() {
        let resolved = ResolvedConfig::default();
        assert_eq!(resolved.title, DEFAULT_TITLE);
        assert_eq!(resolved.first_name_min_len, DEFAULT_FIRST_NAME_MIN_LEN);
        assert_eq!(
            resolved,
            resolve_with(&FormConfig::default(), &CliOverrides::default(), no_env)
        );
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
title = "Get in touch"
live_validation = false

[validation]
first_name_min_len = 2

[placeholders]
email = "you@example.com"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.title.as_deref(), Some("Get in touch"));
        assert_eq!(config.general.live_validation, Some(false));
        assert_eq!(config.validation.first_name_min_len, Some(2));
        assert_eq!(config.placeholders.email.as_deref(), Some("you@example.com"));
        assert!(config.placeholders.first_name.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let config = parse_config("[validation]\nfirst_name_min_len = 4\n").unwrap();
        assert_eq!(config.validation.first_name_min_len, Some(4));
        assert!(config.general.title.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[validation]\nfirst_name_min_len = \"five\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/contact-form.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
