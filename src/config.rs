//! # Per-instance topic syntax configuration.
//!
//! [`Config`] fixes the three symbols the engine tokenizes with: the level
//! separator, the single-level wildcard, and the multi-level wildcard.
//! They are validated once at construction and never change for the
//! lifetime of an [`Emitter`](crate::Emitter).
//!
//! # Example
//! ```
//! use topicvisor::Config;
//!
//! let mut cfg = Config::default();
//! cfg.separator = ".".into();
//! cfg.wildcard_one = "*".into();
//!
//! assert!(cfg.validate().is_ok());
//! assert_eq!(cfg.wildcard_some, "#");
//! ```

use crate::error::ConfigError;

/// Topic syntax for one engine instance.
///
/// Tokens are produced by splitting topics and patterns on
/// [`Config::separator`]. A pattern token equal to [`Config::wildcard_one`]
/// matches exactly one topic token; a token equal to
/// [`Config::wildcard_some`] matches one or more trailing tokens and is only
/// meaningful as the last token of a pattern.
#[derive(Clone, Debug)]
pub struct Config {
    /// Level separator used to tokenize topics and patterns.
    pub separator: String,
    /// Single-level wildcard token (matches exactly one token).
    pub wildcard_one: String,
    /// Multi-level wildcard token (matches one or more trailing tokens).
    pub wildcard_some: String,
}

impl Default for Config {
    /// Provides the conventional MQTT-style syntax:
    /// - `separator = "/"`
    /// - `wildcard_one = "+"`
    /// - `wildcard_some = "#"`
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            wildcard_one: "+".to_string(),
            wildcard_some: "#".to_string(),
        }
    }
}

impl Config {
    /// Checks that the configured symbols form a usable syntax.
    ///
    /// ### Rules
    /// - none of the three symbols may be empty;
    /// - the three symbols must be pairwise distinct.
    ///
    /// Called by [`Emitter::new`](crate::Emitter::new); exposed so callers
    /// can validate configuration before wiring anything up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("separator", &self.separator),
            ("wildcard_one", &self.wildcard_one),
            ("wildcard_some", &self.wildcard_some),
        ];

        for &(name, value) in &fields {
            if value.is_empty() {
                return Err(ConfigError::EmptySymbol { symbol: name });
            }
        }

        for i in 0..fields.len() {
            for j in (i + 1)..fields.len() {
                let (left, a) = fields[i];
                let (right, b) = fields[j];
                if a == b {
                    return Err(ConfigError::SymbolClash {
                        left,
                        right,
                        token: a.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbols() {
        let cfg = Config::default();
        assert_eq!(cfg.separator, "/");
        assert_eq!(cfg.wildcard_one, "+");
        assert_eq!(cfg.wildcard_some, "#");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let mut cfg = Config::default();
        cfg.separator = String::new();
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EmptySymbol { symbol: "separator" })
        ));
    }

    #[test]
    fn test_clashing_symbols_rejected() {
        let mut cfg = Config::default();
        cfg.wildcard_one = "#".into();
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::SymbolClash { .. }));
    }

    #[test]
    fn test_custom_symbols_accepted() {
        let cfg = Config {
            separator: "~".into(),
            wildcard_one: "?".into(),
            wildcard_some: "*".into(),
        };
        assert!(cfg.validate().is_ok());
    }
}
