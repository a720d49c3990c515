use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Case;
use crate::utils::ids::{fresh_id, now_iso};

/// A single donation. `caseId` is kept as sent, whether or not a case with
/// that id exists.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    pub timestamp: String,

    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub case_id: Option<String>,
    pub donor_id: Option<String>,
    pub amount: Option<f64>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl Donation {
    pub const RESERVED: &'static [&'static str] =
        &["id", "caseId", "donorId", "amount", "timestamp"];

    pub fn create(req: DonationRequest) -> Self {
        let mut extra = req.extra;
        super::strip_reserved(&mut extra, Self::RESERVED);

        Donation {
            id: fresh_id("donation"),
            case_id: req.case_id,
            donor_id: req.donor_id,
            amount: req.amount,
            timestamp: now_iso(),
            extra,
        }
    }
}

/// Aggregate snapshot served by the reports endpoint. `totalDonations` is
/// the sum of amounts, `donationCount` the number of records.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationReport {
    pub total_donations: f64,
    pub total_cases: usize,
    pub active_cases: usize,
    pub donation_count: usize,
    pub average_donation: f64,
}

impl DonationReport {
    /// Sums treat a donation without an amount as zero; the average guards
    /// the empty-collection case instead of dividing by zero.
    pub fn compute(donations: &[Donation], cases: &[Case]) -> Self {
        let total_donations: f64 = donations.iter().filter_map(|d| d.amount).sum();
        let donation_count = donations.len();
        let average_donation = if donation_count == 0 {
            0.0
        } else {
            total_donations / donation_count as f64
        };

        let active_cases = cases
            .iter()
            .filter(|c| c.status == crate::models::CaseStatus::Active)
            .count();

        DonationReport {
            total_donations,
            total_cases: cases.len(),
            active_cases,
            donation_count,
            average_donation,
        }
    }
}
