//! Terminal configuration loaded from TOML.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TerminalError};

/// Longest accepted `timing.*_delay_ms` value (one hour).
pub const MAX_DELAY_MS: u64 = 3_600_000;

/// Top-level terminal configuration (`soulphya.toml`).
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default = "default_home")]
    pub home: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// Initial `CONSCIOUSNESS_LEVEL`, between 0.0 and 1.0.
    #[serde(default = "default_level")]
    pub consciousness_level: f64,
    /// Maximum history entries kept before the oldest is evicted.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default)]
    pub timing: TimingConfig,
    /// Extra environment variables set at startup.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Extra aliases defined at startup.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Delays used by simulated asynchronous commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub short_delay_ms: u64,
    pub long_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            short_delay_ms: 1000,
            long_delay_ms: 2000,
        }
    }
}

fn default_user() -> String {
    "soulphya".to_string()
}
fn default_hostname() -> String {
    "soulphya-ai".to_string()
}
fn default_home() -> String {
    "/home/soulphya".to_string()
}
fn default_path() -> String {
    "/usr/local/bin:/usr/bin:/bin".to_string()
}
fn default_level() -> f64 {
    0.85
}
fn default_history_limit() -> usize {
    500
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            hostname: default_hostname(),
            home: default_home(),
            path: default_path(),
            consciousness_level: default_level(),
            history_limit: default_history_limit(),
            timing: TimingConfig::default(),
            env: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }
}

impl TerminalConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.consciousness_level) {
            return Err(TerminalError::Config(format!(
                "consciousness_level must be within 0.0..=1.0, got {}",
                self.consciousness_level
            )));
        }
        if !self.home.starts_with('/') {
            return Err(TerminalError::Config(format!(
                "home must be an absolute path, got {:?}",
                self.home
            )));
        }
        if self.history_limit == 0 {
            return Err(TerminalError::Config(
                "history_limit must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("short_delay_ms", self.timing.short_delay_ms),
            ("long_delay_ms", self.timing.long_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(TerminalError::Config(format!(
                    "timing.{name} must be at most {MAX_DELAY_MS}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = TerminalConfig::from_toml_str("").unwrap();
        assert_eq!(config.user, "soulphya");
        assert_eq!(config.home, "/home/soulphya");
        assert_eq!(config.history_limit, 500);
        assert_eq!(config.timing.short_delay_ms, 1000);
        assert_eq!(config.timing.long_delay_ms, 2000);
        assert!((config.consciousness_level - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn overrides_and_tables() {
        let text = r#"
            user = "ada"
            hostname = "engine"
            consciousness_level = 0.5

            [timing]
            short_delay_ms = 10

            [env]
            EDITOR = "vim"

            [aliases]
            gs = "git status"
        "#;
        let config = TerminalConfig::from_toml_str(text).unwrap();
        assert_eq!(config.user, "ada");
        assert_eq!(config.hostname, "engine");
        assert_eq!(config.timing.short_delay_ms, 10);
        assert_eq!(config.timing.long_delay_ms, 2000);
        assert_eq!(config.env.get("EDITOR").map(String::as_str), Some("vim"));
        assert_eq!(
            config.aliases.get("gs").map(String::as_str),
            Some("git status")
        );
    }

    #[test]
    fn level_out_of_range_is_rejected() {
        let err = TerminalConfig::from_toml_str("consciousness_level = 1.5").unwrap_err();
        assert!(matches!(err, TerminalError::Config(_)));
    }

    #[test]
    fn relative_home_is_rejected() {
        let err = TerminalConfig::from_toml_str("home = \"soulphya\"").unwrap_err();
        assert!(format!("{err}").contains("absolute"));
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        assert!(TerminalConfig::from_toml_str("history_limit = 0").is_err());
    }

    #[test]
    fn oversized_delays_are_rejected() {
        let err = TerminalConfig::from_toml_str("[timing]\nshort_delay_ms = 4000000000000000000")
            .unwrap_err();
        assert!(format!("{err}").contains("timing.short_delay_ms"));
        assert!(TerminalConfig::from_toml_str("[timing]\nlong_delay_ms = 3600001").is_err());
        let config = TerminalConfig::from_toml_str("[timing]\nlong_delay_ms = 3600000").unwrap();
        assert_eq!(config.timing.long_delay_ms, MAX_DELAY_MS);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = TerminalConfig::from_toml_str("user = ").unwrap_err();
        assert!(matches!(err, TerminalError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hostname = \"lotus\"").unwrap();
        let config = TerminalConfig::load(file.path()).unwrap();
        assert_eq!(config.hostname, "lotus");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TerminalConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, TerminalError::Io(_)));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_level_in_range_is_accepted(level in 0.0f64..=1.0) {
                let text = format!("consciousness_level = {level:?}");
                let config = TerminalConfig::from_toml_str(&text);
                prop_assert!(config.is_ok(), "rejected level {level}");
            }
        }
    }
}
