use chrono::{DateTime, Utc};

// lastUpdated values on the wire are RFC-3339 / ISO-8601.
pub fn to_iso8601(time: &DateTime<Utc>) -> String {
    time.to_rfc3339()
}
