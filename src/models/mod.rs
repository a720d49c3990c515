pub mod case;
pub mod donation;
pub mod mosque;
pub mod user;

pub use case::*;
pub use donation::*;
pub use mosque::*;
pub use user::*;

use serde_json::{Map, Value};

/// Drops passthrough keys that collide with a record's typed fields, so a
/// record never serializes the same JSON key twice.
pub(crate) fn strip_reserved(extra: &mut Map<String, Value>, reserved: &[&str]) {
    extra.retain(|key, _| !reserved.contains(&key.as_str()));
}
