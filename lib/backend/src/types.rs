use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Generates a new document id, hex without dashes.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Current UTC time as an RFC 3339 string with microsecond precision.
///
/// Timestamps sort lexicographically, which the in-memory backend relies
/// on when ordering by `createdAt`.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
