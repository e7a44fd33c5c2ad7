use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Options for turning infix text into postfix.
///
/// ```toml
/// decimals = true
/// strict = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Accept `12.5` as a single number. When off, '.' is never part of a
    /// number and gets skipped.
    pub decimals: bool,
    /// Reject unrecognized characters and unmatched parentheses instead of
    /// skipping them.
    pub strict: bool,
}

impl CalcConfig {
    /// Integer-only, lenient scanning as the original keypad calculator did it.
    pub fn legacy() -> CalcConfig {
        CalcConfig {
            decimals: false,
            strict: false,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<CalcConfig, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<CalcConfig, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            decimals: true,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CalcConfig;
    use crate::error::ConfigError;

    #[test]
    fn empty_is_default() {
        assert_eq!(CalcConfig::from_toml_str("").unwrap(), CalcConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = CalcConfig::from_toml_str("strict = true").unwrap();
        assert!(cfg.strict);
        assert!(cfg.decimals);

        let cfg = CalcConfig::from_toml_str("decimals = false\nstrict = false").unwrap();
        assert_eq!(cfg, CalcConfig::legacy());
    }

    #[test]
    fn rejects_garbage() {
        match CalcConfig::from_toml_str("precision = 3") {
            Err(ConfigError::Toml(_)) => (),
            other => panic!("expected toml error, got {:?}", other),
        }
        assert!(CalcConfig::from_toml_str("strict = \"yes\"").is_err());
    }

    #[test]
    fn missing_file() {
        match CalcConfig::load("/nonexistent/thin-calc.toml") {
            Err(ConfigError::Io(_)) => (),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
