use chrono::{DateTime, Datelike, Utc};
use tracing::warn;

/// Rendered as `-YYYYMMDD-HHMMSS-ffffff`.
pub const SUFFIX_FORMAT: &str = "-%Y%m%d-%H%M%S-%6f";

/// Length of every suffix produced by [`time_suffix`].
pub const SUFFIX_LEN: usize = 23;

/// Suffix for instants before year 0.
pub const EARLIEST_SUFFIX: &str = "-00000101-000000-000000";

/// Suffix for instants after year 9999.
pub const LATEST_SUFFIX: &str = "-99991231-235959-999999";

/// Date, time of day and microsecond of `at`, each zero padded.
///
/// Instants outside years `0..=9999` are clamped to [`EARLIEST_SUFFIX`] or
/// [`LATEST_SUFFIX`] so the date group always has 8 digits.
pub fn time_suffix(at: DateTime<Utc>) -> String {
    match at.year() {
        ..0 => {
            warn!("instant {} is before year 0, clamping suffix", at);
            EARLIEST_SUFFIX.to_string()
        }
        10_000.. => {
            warn!("instant {} is after year 9999, clamping suffix", at);
            LATEST_SUFFIX.to_string()
        }
        _ => at.format(SUFFIX_FORMAT).to_string(),
    }
}
