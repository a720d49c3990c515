use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::ids::{fresh_id, now_iso};

/// A platform user. `cnic` + `phoneNumber` together form the login key;
/// neither is unique-enforced. Unknown registration fields ride along in
/// `extra` and are echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// e.g. "imam", "donor", "admin"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    pub is_verified: bool,

    /// Arbitrary profile payload (the imam seed carries mosque details here).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub additional_info: Option<Value>,

    pub created_at: String,

    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Registration body. Everything is optional; whatever the client sends is
/// kept, while `id`, `isVerified` and `createdAt` are forced by the handler.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub cnic: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
    #[schema(value_type = Object)]
    pub additional_info: Option<Value>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Partial update for a user: provided fields replace, absent fields keep.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub cnic: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
    pub is_verified: Option<bool>,
    #[schema(value_type = Object)]
    pub additional_info: Option<Value>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Wire-level names owned by the typed struct; passthrough extras under
    /// these keys are dropped (see `strip_reserved`).
    pub const RESERVED: &'static [&'static str] = &[
        "id",
        "cnic",
        "phoneNumber",
        "location",
        "role",
        "isVerified",
        "additionalInfo",
        "createdAt",
    ];

    /// Builds the stored record from a registration body: fresh id, forced
    /// unverified, creation stamp.
    pub fn register(req: RegisterRequest) -> Self {
        let mut extra = req.extra;
        super::strip_reserved(&mut extra, Self::RESERVED);

        User {
            id: fresh_id("user"),
            cnic: req.cnic,
            phone_number: req.phone_number,
            location: req.location,
            role: req.role,
            is_verified: false,
            additional_info: req.additional_info,
            created_at: now_iso(),
            extra,
        }
    }

    /// Shallow merge. User updates carry no timestamp (cases do).
    pub fn apply(&mut self, patch: UserUpdate) {
        if let Some(v) = patch.cnic {
            self.cnic = Some(v);
        }
        if let Some(v) = patch.phone_number {
            self.phone_number = Some(v);
        }
        if let Some(v) = patch.location {
            self.location = Some(v);
        }
        if let Some(v) = patch.role {
            self.role = Some(v);
        }
        if let Some(v) = patch.is_verified {
            self.is_verified = v;
        }
        if let Some(v) = patch.additional_info {
            self.additional_info = Some(v);
        }

        let mut extra = patch.extra;
        super::strip_reserved(&mut extra, Self::RESERVED);
        self.extra.extend(extra);
    }
}
