use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered mosque. Records are stored exactly as submitted plus the
/// verification flag the admin endpoints flip.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mosque {
    pub id: String,

    #[serde(default)]
    pub is_verified: bool,

    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}
