use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Fresh collection-unique id, e.g. `case_9f2c...`. The prefix keeps mock
/// payloads readable; uniqueness comes from the v4 uuid.
pub fn fresh_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Opaque session token, e.g. `mock_token_1756200000000`. Tokens are never
/// tracked or inspected anywhere in this service.
pub fn mock_token(prefix: &str) -> String {
    format!("{}_{}", prefix, Utc::now().timestamp_millis())
}

/// ISO-8601 UTC timestamp with millisecond precision and `Z` suffix,
/// the same shape JavaScript's `Date.toISOString()` produces.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
