use actix_web::{web, HttpResponse};

use crate::models::{Donation, DonationReport, DonationRequest};
use crate::store::MockStore;

#[utoipa::path(
    post,
    path = "/api/donations",
    tag = "Donations",
    request_body = DonationRequest,
    responses(
        (status = 200, description = "Donation recorded; a matching case's raisedAmount grows by the amount")
    )
)]
pub async fn create_donation(
    store: web::Data<MockStore>,
    body: web::Json<DonationRequest>,
) -> HttpResponse {
    let donation = Donation::create(body.into_inner());
    log::info!(
        "💰 POST /api/donations - {} for case {}",
        donation.id,
        donation.case_id.as_deref().unwrap_or("N/A")
    );

    // An unknown caseId or an absent amount leaves every case untouched.
    if let (Some(case_id), Some(amount)) = (donation.case_id.as_deref(), donation.amount) {
        let mut cases = store.cases();
        if let Some(case) = cases.iter_mut().find(|c| c.id == case_id) {
            case.raised_amount += amount;
            log::info!("✅ Case {} raised amount is now {}", case.id, case.raised_amount);
        }
    }

    let payload = serde_json::json!({
        "success": true,
        "donation": &donation
    });
    store.donations().push(donation);

    HttpResponse::Ok().json(payload)
}

#[utoipa::path(
    get,
    path = "/api/donations/{user_id}",
    tag = "Donations",
    params(("user_id" = String, Path, description = "Donor id")),
    responses(
        (status = 200, description = "Donations whose donorId matches, insertion order")
    )
)]
pub async fn list_user_donations(
    store: web::Data<MockStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let user_id = path.into_inner();
    log::info!("💰 GET /api/donations/{}", user_id);

    let donations = store.donations();
    let for_user: Vec<&Donation> = donations
        .iter()
        .filter(|d| d.donor_id.as_deref() == Some(user_id.as_str()))
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "donations": for_user
    }))
}

#[utoipa::path(
    get,
    path = "/api/reports/donations",
    tag = "Donations",
    responses(
        (status = 200, description = "Aggregate donation totals and case counts", body = DonationReport)
    )
)]
pub async fn donation_report(store: web::Data<MockStore>) -> HttpResponse {
    log::info!("📊 GET /api/reports/donations");

    let donations = store.donations().clone();
    let cases = store.cases().clone();
    let report = DonationReport::compute(&donations, &cases);

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "report": report
    }))
}
