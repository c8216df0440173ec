use chrono::{DateTime, TimeDelta, Utc};

/// Compact timestamp used in the names of stored artifacts.
pub const TIME_FMT: &str = "%Y%m%dT%H%M";

pub fn compact_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIME_FMT).to_string()
}

/// Renders a duration as `H:MM:SS` with a `.ffffff` suffix when there are
/// sub-second microseconds, e.g. `0:00:01.250000`.
pub fn format_duration(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let delta = delta.abs();

    let total_micros = delta.num_microseconds().unwrap_or(i64::MAX);
    let micros = total_micros % 1_000_000;
    let total_secs = total_micros / 1_000_000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if micros == 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, seconds)
    } else {
        format!("{}{}:{:02}:{:02}.{:06}", sign, hours, minutes, seconds, micros)
    }
}
