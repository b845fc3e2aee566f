//! Error types used by the topicvisor engine.
//!
//! This module defines two error enums:
//!
//! - [`ConfigError`] — rejected topic-syntax configuration at construction.
//! - [`EmitError`] — failures surfaced through an emission's completion.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics and additional utilities such as [`EmitError::is_closed`].

use thiserror::Error;

/// # Errors produced while validating an engine configuration.
///
/// Returned by [`Emitter::new`](crate::Emitter::new) before any state is
/// built; a rejected configuration never produces a partially wired engine.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One of the configured symbols is the empty string.
    #[error("{symbol} must not be empty")]
    EmptySymbol {
        /// Name of the offending configuration field.
        symbol: &'static str,
    },

    /// Two configured symbols share the same token, making patterns ambiguous.
    #[error("{left} and {right} must differ (both set to {token:?})")]
    SymbolClash {
        /// First configuration field involved in the clash.
        left: &'static str,
        /// Second configuration field involved in the clash.
        right: &'static str,
        /// The shared token value.
        token: String,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use topicvisor::ConfigError;
    ///
    /// let err = ConfigError::EmptySymbol { symbol: "separator" };
    /// assert_eq!(err.as_label(), "config_empty_symbol");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::EmptySymbol { .. } => "config_empty_symbol",
            ConfigError::SymbolClash { .. } => "config_symbol_clash",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ConfigError::EmptySymbol { symbol } => format!("empty symbol: {symbol}"),
            ConfigError::SymbolClash { left, right, token } => {
                format!("symbol clash: {left}={token:?} collides with {right}")
            }
        }
    }
}

/// # Errors produced by an emission.
///
/// Delivered through the future returned by [`Emitter::emit`](crate::Emitter::emit)
/// once the emission settles; `emit` itself never panics on these paths.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitError {
    /// The engine has begun (or finished) closing; the message was not
    /// resolved and no listener was invoked.
    #[error("emitter is closed")]
    Closed,

    /// A matched listener acknowledged with an error, dropped its
    /// acknowledgment unfired, or panicked. The fan-in still waited for
    /// every other listener before this was surfaced.
    #[error("listener failed: {reason}")]
    Listener {
        /// The failure reported (or inferred) for the listener.
        reason: String,
    },
}

impl EmitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use topicvisor::EmitError;
    ///
    /// assert_eq!(EmitError::Closed.as_label(), "emitter_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitError::Closed => "emitter_closed",
            EmitError::Listener { .. } => "listener_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitError::Closed => "emitter is closed".to_string(),
            EmitError::Listener { reason } => format!("listener failure: {reason}"),
        }
    }

    /// Indicates whether the error is the closed-engine rejection.
    ///
    /// Returns `false` for listener failures, which mean the emission was
    /// dispatched and joined but at least one listener misbehaved.
    ///
    /// # Example
    /// ```
    /// use topicvisor::EmitError;
    ///
    /// assert!(EmitError::Closed.is_closed());
    ///
    /// let failed = EmitError::Listener { reason: "boom".into() };
    /// assert!(!failed.is_closed());
    /// ```
    pub fn is_closed(&self) -> bool {
        matches!(self, EmitError::Closed)
    }
}
