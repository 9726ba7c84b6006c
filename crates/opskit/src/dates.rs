//! Log-style date formatting on top of chrono.
//!
//! All formatters take an optional instant and fall back to the current
//! local time, so callers instrumenting live code stay terse while tests
//! pass fixed values.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::Serialize;

fn or_now(d: Option<DateTime<Local>>) -> DateTime<Local> {
    d.unwrap_or_else(Local::now)
}

/// Access-log format: `16/Apr/2013:16:40:09 +0800`.
pub fn access_log_date(d: Option<DateTime<Local>>) -> String {
    or_now(d).format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

/// Log-line format with milliseconds: `2013-04-16 16:40:09.123`.
///
/// `ms_sep` replaces the `.` before the millisecond field.
pub fn log_date(d: Option<DateTime<Local>>, ms_sep: Option<&str>) -> String {
    let d = or_now(d);
    format!(
        "{}{}{:03}",
        d.format("%Y-%m-%d %H:%M:%S"),
        ms_sep.unwrap_or("."),
        d.timestamp_subsec_millis()
    )
}

/// `2013-04-16 16:40:09` with configurable date and time separators.
pub fn ymd_hms(d: Option<DateTime<Local>>, date_sep: Option<&str>, time_sep: Option<&str>) -> String {
    let d = or_now(d);
    let ds = date_sep.unwrap_or("-");
    let ts = time_sep.unwrap_or(":");
    format!(
        "{:04}{}{:02}{}{:02} {:02}{}{:02}{}{:02}",
        d.year(),
        ds,
        d.month(),
        ds,
        d.day(),
        d.hour(),
        ts,
        d.minute(),
        ts,
        d.second()
    )
}

/// `2013-04-16` with a configurable separator.
pub fn ymd(d: Option<DateTime<Local>>, sep: Option<&str>) -> String {
    let d = or_now(d);
    let sep = sep.unwrap_or("-");
    format!("{:04}{}{:02}{}{:02}", d.year(), sep, d.month(), sep, d.day())
}

/// Numeric date plus hour, for bucketing logs by day and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateStruct {
    /// e.g. `20130401`
    pub yyyymmdd: u32,
    /// 0..=23
    pub hour: u32,
}

/// Split an instant into a [`DateStruct`].
pub fn date_struct(d: Option<DateTime<Local>>) -> DateStruct {
    let d = or_now(d);
    DateStruct {
        yyyymmdd: d.year() as u32 * 10_000 + d.month() * 100 + d.day(),
        hour: d.hour(),
    }
}

/// Current Unix timestamp in seconds.
pub fn unix_timestamp() -> i64 {
    Local::now().timestamp()
}

/// Convert a Unix timestamp to a local datetime.
///
/// Ten-digit values are treated as seconds, anything else as milliseconds,
/// matching the resolution-sniffing convention of access logs that mix the
/// two. Returns `None` for values outside chrono's representable range.
pub fn from_timestamp(t: i64) -> Option<DateTime<Local>> {
    let millis = if (1_000_000_000..10_000_000_000).contains(&t) {
        t * 1000
    } else {
        t
    };
    match Local.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(d) => Some(d),
        _ => None,
    }
}
