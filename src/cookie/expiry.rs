//! Cookie `expires` dates in the `Date.prototype.toUTCString` shape,
//! e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.

use crate::Days;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeDelta;
use chrono::Utc;

const FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Expiry used to evict a cookie. Any past instant works; this one is what
/// browsers conventionally receive.
pub const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 UTC";

/// Instant `days` days after `now`.
pub fn after(now: DateTime<Utc>, days: Days) -> DateTime<Utc> {
    offset(now, TimeDelta::try_days(days), days < 0)
}

/// `now` shifted by `delta`, kept within the four-digit years the date format
/// can round-trip. A `delta` too large to represent saturates toward the
/// direction given by `backwards`.
pub fn offset(now: DateTime<Utc>, delta: Option<TimeDelta>, backwards: bool) -> DateTime<Utc> {
    let floor = DateTime::<Utc>::UNIX_EPOCH;
    let ceiling = latest();
    delta
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(if backwards { floor } else { ceiling })
        .clamp(floor, ceiling)
}

fn latest() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn format(at: DateTime<Utc>) -> String {
    format!("{} GMT", at.format(FORMAT))
}

/// Accepts both the `GMT` and the `UTC` suffix.
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    let s = s
        .strip_suffix("GMT")
        .or_else(|| s.strip_suffix("UTC"))
        .unwrap_or(s)
        .trim_end();
    NaiveDateTime::parse_from_str(s, FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
