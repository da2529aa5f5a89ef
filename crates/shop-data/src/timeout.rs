//! Timeout configuration for fetch operations.

use std::time::Duration;

/// Timeout configuration for a fetch client.
///
/// Both limits are unset by default: a slow API leaves the caller waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Option<Duration>,
    /// Total operation timeout.
    pub total: Option<Duration>,
}

impl TimeoutConfig {
    /// No timeouts at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create from a single total timeout.
    ///
    /// The connect phase gets a quarter of the total.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Some(total / 4),
            total: Some(total),
        }
    }

    /// Create from an optional number of seconds, as found in config files.
    pub fn from_secs(secs: Option<u64>) -> Self {
        secs.map(|s| Self::from_total(Duration::from_secs(s)))
            .unwrap_or_default()
    }

    /// Whether any limit is set.
    pub fn is_bounded(&self) -> bool {
        self.connect.is_some() || self.total.is_some()
    }
}
