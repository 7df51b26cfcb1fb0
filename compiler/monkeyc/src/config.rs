//! Driver configuration, read from the environment.
//!
//! | Variable                | Effect                                          |
//! |-------------------------|-------------------------------------------------|
//! | `MONKEY_MAX_CALL_DEPTH` | Call-depth limit; `0` removes it                |
//! | `MONKEY_LOG_FORMAT`     | `tree` (default) or `flat` log output           |
//! | `RUST_LOG`              | Log filter; logging is off when unset           |

use monkey_eval::EvalConfig;

pub const MAX_CALL_DEPTH_VAR: &str = "MONKEY_MAX_CALL_DEPTH";
pub const LOG_FORMAT_VAR: &str = "MONKEY_LOG_FORMAT";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected a non-negative integer")]
    InvalidCallDepth { var: &'static str, value: String },
    #[error("invalid {var} value {value:?}: expected `tree` or `flat`")]
    InvalidLogFormat { var: &'static str, value: String },
}

/// How log events are rendered on stderr.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Indented by span nesting.
    #[default]
    Tree,
    /// One line per event.
    Flat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub eval: EvalConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(MAX_CALL_DEPTH_VAR) {
            let depth: usize =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidCallDepth {
                        var: MAX_CALL_DEPTH_VAR,
                        value: value.clone(),
                    })?;
            let limit = (depth > 0).then_some(depth);
            config.eval = config.eval.with_max_call_depth(limit);
        }

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = match value.trim().to_ascii_lowercase().as_str() {
                "tree" => LogFormat::Tree,
                "flat" => LogFormat::Flat,
                _ => {
                    return Err(ConfigError::InvalidLogFormat {
                        var: LOG_FORMAT_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap_or_default();
        assert_eq!(config.eval, EvalConfig::default());
        assert_eq!(config.log_format, LogFormat::Tree);
    }

    #[test]
    fn test_call_depth_override() {
        let config = Config::from_lookup(lookup(&[(MAX_CALL_DEPTH_VAR, "64")]));
        assert_eq!(config.map(|c| c.eval.max_call_depth), Ok(Some(64)));

        let unlimited = Config::from_lookup(lookup(&[(MAX_CALL_DEPTH_VAR, "0")]));
        assert_eq!(unlimited.map(|c| c.eval.max_call_depth), Ok(None));
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[(MAX_CALL_DEPTH_VAR, "-3")]));
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("invalid MONKEY_MAX_CALL_DEPTH value \"-3\": expected a non-negative integer".to_string())
        );

        let err = Config::from_lookup(lookup(&[(LOG_FORMAT_VAR, "json")]));
        assert!(matches!(err, Err(ConfigError::InvalidLogFormat { .. })));
    }

    #[test]
    fn test_log_format() {
        let config = Config::from_lookup(lookup(&[(LOG_FORMAT_VAR, "FLAT")]));
        assert_eq!(config.map(|c| c.log_format), Ok(LogFormat::Flat));
    }
}
