//! Access token lifetime policy.

use chrono::Duration;
use tracing::warn;

/// Shortest lifetime an access token is ever issued with, in seconds.
pub const MIN_ACCESS_TTL_SECONDS: u64 = 3600;

/// Server-side access token lifetime, never below one hour.
///
/// The lifetime comes from configuration only. Clients cannot request
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessTtl(u64);

impl AccessTtl {
    /// Builds a lifetime, clamping values under the floor up to it.
    pub fn new(seconds: u64) -> Self {
        if seconds < MIN_ACCESS_TTL_SECONDS {
            warn!(
                requested = seconds,
                applied = MIN_ACCESS_TTL_SECONDS,
                "Access token TTL below minimum; clamping"
            );
            return Self(MIN_ACCESS_TTL_SECONDS);
        }
        Self(seconds)
    }

    /// Lifetime in seconds.
    pub fn seconds(&self) -> u64 {
        self.0
    }

    /// Lifetime as a signed duration for timestamp arithmetic.
    pub fn as_duration(&self) -> Duration {
        let seconds = i64::try_from(self.0).unwrap_or(i64::MAX);
        Duration::try_seconds(seconds).unwrap_or(Duration::MAX)
    }
}

impl Default for AccessTtl {
    fn default() -> Self {
        Self(MIN_ACCESS_TTL_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_applies() {
        assert_eq!(AccessTtl::new(0).seconds(), 3600);
        assert_eq!(AccessTtl::new(60).seconds(), 3600);
        assert_eq!(AccessTtl::new(3599).seconds(), 3600);
        assert_eq!(AccessTtl::new(3600).seconds(), 3600);
        assert_eq!(AccessTtl::new(7200).seconds(), 7200);
    }

    #[test]
    fn test_default_is_one_hour() {
        assert_eq!(AccessTtl::default().as_duration(), Duration::hours(1));
    }
}
