// src/config.rs
use chrono::Duration;
use log::{info, warn};

/// Fallback when the interval setting is absent or malformed.
pub fn default_interval() -> Duration {
    Duration::minutes(5)
}

/// Shortest active-duration an auction may be configured with.
pub fn min_interval() -> Duration {
    Duration::minutes(1)
}

/// Resolve the configured auction active-duration from its raw setting value.
///
/// The setting is a human-readable duration expression such as "5m" or "90s".
/// Resolution never fails: an absent or unparsable value degrades to the
/// default of 5 minutes, and a value shorter than 1 minute is clamped up to
/// exactly 1 minute. Callers pass the setting in explicitly; this function
/// performs no environment lookups of its own.
pub fn resolve_interval(setting: Option<&str>) -> Duration {
    let raw = match setting {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            info!("Auction interval not set, using default of 5 minutes");
            return default_interval();
        }
    };

    let parsed = match humantime::parse_duration(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(
                "Invalid auction interval {:?}, using default of 5 minutes: {}",
                raw, err
            );
            return default_interval();
        }
    };

    let interval = match Duration::from_std(parsed) {
        Ok(interval) => interval,
        Err(err) => {
            warn!(
                "Auction interval {:?} out of range, using default of 5 minutes: {}",
                raw, err
            );
            return default_interval();
        }
    };

    if interval < min_interval() {
        info!("Auction interval {:?} too short, using minimum of 1 minute", raw);
        return min_interval();
    }

    interval
}
