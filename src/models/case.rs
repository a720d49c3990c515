use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::ids::{fresh_id, now_iso};

/// Lifecycle of a fundraising case. Cases are created `pending` and only the
/// admin approve/reject actions move them to `active` or `rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pending,
    Active,
    Rejected,
}

impl CaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::Active => "active",
            CaseStatus::Rejected => "rejected",
        }
    }
}

/// A fundraising request. `raisedAmount` only ever changes through donation
/// creation; imam verification and admin approval are independent flags.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// e.g. "medical", "education", "housing"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,

    pub raised_amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mosque_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_imam_verified: Option<bool>,

    pub is_admin_approved: bool,

    pub status: CaseStatus,

    pub created_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Creation body. Caller fields ride along; the handler's defaults win for
/// `raisedAmount`, `isAdminApproved` and `status`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseDraft {
    pub beneficiary_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub case_type: Option<String>,
    pub target_amount: Option<f64>,
    pub location: Option<String>,
    pub mosque_id: Option<String>,
    pub is_imam_verified: Option<bool>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Partial update: every stored field is patchable, `id` and the creation
/// stamp excepted. Shallow merge, exactly one level deep.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdate {
    pub beneficiary_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub case_type: Option<String>,
    pub target_amount: Option<f64>,
    pub raised_amount: Option<f64>,
    pub location: Option<String>,
    pub mosque_id: Option<String>,
    pub is_imam_verified: Option<bool>,
    pub is_admin_approved: Option<bool>,
    pub status: Option<CaseStatus>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl Case {
    pub const RESERVED: &'static [&'static str] = &[
        "id",
        "beneficiaryName",
        "title",
        "description",
        "type",
        "targetAmount",
        "raisedAmount",
        "location",
        "mosqueId",
        "isImamVerified",
        "isAdminApproved",
        "status",
        "createdAt",
        "updatedAt",
    ];

    /// Builds the stored record from a creation body: fresh id, zero raised,
    /// unapproved, pending, creation stamp.
    pub fn create(draft: CaseDraft) -> Self {
        let mut extra = draft.extra;
        super::strip_reserved(&mut extra, Self::RESERVED);

        Case {
            id: fresh_id("case"),
            beneficiary_name: draft.beneficiary_name,
            title: draft.title,
            description: draft.description,
            case_type: draft.case_type,
            target_amount: draft.target_amount,
            raised_amount: 0.0,
            location: draft.location,
            mosque_id: draft.mosque_id,
            is_imam_verified: draft.is_imam_verified,
            is_admin_approved: false,
            status: CaseStatus::Pending,
            created_at: now_iso(),
            updated_at: None,
            extra,
        }
    }

    /// Shallow merge; the update handler stamps `updatedAt` afterwards.
    pub fn apply(&mut self, patch: CaseUpdate) {
        if let Some(v) = patch.beneficiary_name {
            self.beneficiary_name = Some(v);
        }
        if let Some(v) = patch.title {
            self.title = Some(v);
        }
        if let Some(v) = patch.description {
            self.description = Some(v);
        }
        if let Some(v) = patch.case_type {
            self.case_type = Some(v);
        }
        if let Some(v) = patch.target_amount {
            self.target_amount = Some(v);
        }
        if let Some(v) = patch.raised_amount {
            self.raised_amount = v;
        }
        if let Some(v) = patch.location {
            self.location = Some(v);
        }
        if let Some(v) = patch.mosque_id {
            self.mosque_id = Some(v);
        }
        if let Some(v) = patch.is_imam_verified {
            self.is_imam_verified = Some(v);
        }
        if let Some(v) = patch.is_admin_approved {
            self.is_admin_approved = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }

        let mut extra = patch.extra;
        super::strip_reserved(&mut extra, Self::RESERVED);
        self.extra.extend(extra);
    }

    pub fn approve(&mut self) {
        self.is_admin_approved = true;
        self.status = CaseStatus::Active;
    }

    pub fn reject(&mut self) {
        self.is_admin_approved = false;
        self.status = CaseStatus::Rejected;
    }

    /// Filter intersection for the list endpoint. `status`/`type` compare
    /// exactly (an unrecognized status value matches nothing); `location` is
    /// a case-insensitive substring match, and a case without a location
    /// never matches a location filter.
    pub fn matches(
        &self,
        status: Option<&str>,
        case_type: Option<&str>,
        location: Option<&str>,
    ) -> bool {
        if let Some(wanted) = status {
            if self.status.as_str() != wanted {
                return false;
            }
        }

        if let Some(wanted) = case_type {
            if self.case_type.as_deref() != Some(wanted) {
                return false;
            }
        }

        if let Some(wanted) = location {
            match &self.location {
                Some(loc) => {
                    if !loc.to_lowercase().contains(&wanted.to_lowercase()) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}
