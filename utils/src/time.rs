use chrono::{SecondsFormat, TimeZone, Utc};

/// RFC 3339 rendering of a provider creation date, falling back to the raw
/// number when it is out of chrono's range.
pub fn epoch_seconds_to_timestamp(epoch_seconds: i64) -> String {
    match Utc.timestamp_opt(epoch_seconds, 0).single() {
        Some(datetime) => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => epoch_seconds.to_string(),
    }
}
