//! Wrapper configuration.

use crate::error::ConfigError;
use std::time::Duration;

/// Configuration of a debounced wrapper.
///
/// Constant for the lifetime of the wrapper it configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DebounceOptions {
    /// Execute the first call of a burst immediately, on the caller's thread.
    pub leading: bool,
}

impl DebounceOptions {
    /// Trailing-only debouncing (the default).
    pub const fn trailing() -> Self {
        Self { leading: false }
    }

    /// Leading-edge debouncing: the first call of a burst runs immediately,
    /// and a trailing call still runs if the burst saw further calls.
    pub const fn leading() -> Self {
        Self { leading: true }
    }

    /// Set the `leading` flag.
    pub const fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }
}

/// Convert a signed millisecond count into a wait duration.
///
/// Zero is legal; negative values are rejected.
pub fn wait_from_millis(millis: i64) -> Result<Duration, ConfigError> {
    u64::try_from(millis)
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::NegativeWait(millis))
}
