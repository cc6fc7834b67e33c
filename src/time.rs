//! Local clock strings for IANA timezones

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::error;

use crate::{Result, TravelRecError};

/// Returned in place of a clock when the zone cannot be resolved
pub const TIME_NOT_AVAILABLE: &str = "Time not available";

// 12-hour clock, unpadded hour: "9:05:07 PM"
const CLOCK_FORMAT: &str = "%-I:%M:%S %p";

/// Look up an IANA zone id, ignoring case ("asia/tokyo" is Asia/Tokyo)
pub fn resolve_zone(zone: &str) -> Result<Tz> {
    Tz::from_str_insensitive(zone).map_err(|_| TravelRecError::time_zone(zone))
}

/// Format `instant` in `zone`, failing on an unknown zone id
pub fn try_local_time_at(zone: &str, instant: DateTime<Utc>) -> Result<String> {
    let tz = resolve_zone(zone)?;
    Ok(instant.with_timezone(&tz).format(CLOCK_FORMAT).to_string())
}

/// Format `instant` in `zone`, or [`TIME_NOT_AVAILABLE`] for an unknown zone
#[must_use]
pub fn local_time_at(zone: &str, instant: DateTime<Utc>) -> String {
    match try_local_time_at(zone, instant) {
        Ok(time) => time,
        Err(e) => {
            error!("Error getting time for timezone {}: {}", zone, e);
            TIME_NOT_AVAILABLE.to_string()
        }
    }
}

/// Current local time in `zone`
#[must_use]
pub fn current_local_time(zone: &str) -> String {
    local_time_at(zone, Utc::now())
}
