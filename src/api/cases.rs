use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::models::{Case, CaseDraft, CaseUpdate};
use crate::store::MockStore;
use crate::utils::error::ApiError;
use crate::utils::ids::now_iso;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct CaseFilter {
    /// Exact match on `pending`, `active` or `rejected`.
    pub status: Option<String>,
    /// Exact match on the case type, e.g. `medical`.
    #[serde(rename = "type")]
    pub case_type: Option<String>,
    /// Case-insensitive substring match.
    pub location: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/cases",
    tag = "Cases",
    params(CaseFilter),
    responses(
        (status = 200, description = "Cases matching every provided filter, insertion order")
    )
)]
pub async fn list_cases(
    store: web::Data<MockStore>,
    query: web::Query<CaseFilter>,
) -> HttpResponse {
    log::info!(
        "📋 GET /api/cases - status: {:?}, type: {:?}, location: {:?}",
        query.status,
        query.case_type,
        query.location
    );

    // Empty filter values ("?status=") behave like absent parameters.
    let status = query.status.as_deref().filter(|s| !s.is_empty());
    let case_type = query.case_type.as_deref().filter(|s| !s.is_empty());
    let location = query.location.as_deref().filter(|s| !s.is_empty());

    let cases = store.cases();
    let filtered: Vec<&Case> = cases
        .iter()
        .filter(|c| c.matches(status, case_type, location))
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "cases": filtered
    }))
}

#[utoipa::path(
    post,
    path = "/api/cases",
    tag = "Cases",
    request_body = CaseDraft,
    responses(
        (status = 200, description = "Case created pending, unapproved, with zero raised")
    )
)]
pub async fn create_case(store: web::Data<MockStore>, body: web::Json<CaseDraft>) -> HttpResponse {
    let case = Case::create(body.into_inner());
    log::info!(
        "📋 POST /api/cases - created {} ({})",
        case.id,
        case.title.as_deref().unwrap_or("untitled")
    );

    let payload = serde_json::json!({
        "success": true,
        "case": &case
    });
    store.cases().push(case);

    HttpResponse::Ok().json(payload)
}

#[utoipa::path(
    put,
    path = "/api/cases/{id}",
    tag = "Cases",
    params(("id" = String, Path, description = "Case id")),
    request_body = CaseUpdate,
    responses(
        (status = 200, description = "Patched case with a fresh updatedAt stamp"),
        (status = 404, description = "Case not found")
    )
)]
pub async fn update_case(
    store: web::Data<MockStore>,
    path: web::Path<String>,
    body: web::Json<CaseUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    log::info!("📋 PUT /api/cases/{}", id);

    let mut cases = store.cases();
    match cases.iter_mut().find(|c| c.id == id) {
        Some(case) => {
            case.apply(body.into_inner());
            case.updated_at = Some(now_iso());
            log::info!("✅ Case updated: {}", id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "case": case
            })))
        }
        None => {
            log::warn!("❌ Case not found: {}", id);
            Err(ApiError::NotFound("Case not found".into()))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/cases/{id}",
    tag = "Cases",
    params(("id" = String, Path, description = "Case id")),
    responses(
        (status = 200, description = "Reports success whether or not the id existed")
    )
)]
pub async fn delete_case(store: web::Data<MockStore>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /api/cases/{}", id);

    store.cases().retain(|c| c.id != id);

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Case deleted successfully"
    }))
}

#[utoipa::path(
    post,
    path = "/api/cases/{id}/approve",
    tag = "Cases",
    params(("id" = String, Path, description = "Case id")),
    responses(
        (status = 200, description = "Case approved and activated"),
        (status = 404, description = "Case not found")
    )
)]
pub async fn approve_case(
    store: web::Data<MockStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    log::info!("👍 POST /api/cases/{}/approve", id);

    let mut cases = store.cases();
    match cases.iter_mut().find(|c| c.id == id) {
        Some(case) => {
            case.approve();
            log::info!("✅ Case approved: {}", id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "case": case
            })))
        }
        None => {
            log::warn!("❌ Case not found: {}", id);
            Err(ApiError::NotFound("Case not found".into()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/cases/{id}/reject",
    tag = "Cases",
    params(("id" = String, Path, description = "Case id")),
    responses(
        (status = 200, description = "Case rejected and unapproved"),
        (status = 404, description = "Case not found")
    )
)]
pub async fn reject_case(
    store: web::Data<MockStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    log::info!("👎 POST /api/cases/{}/reject", id);

    let mut cases = store.cases();
    match cases.iter_mut().find(|c| c.id == id) {
        Some(case) => {
            case.reject();
            log::info!("✅ Case rejected: {}", id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "case": case
            })))
        }
        None => {
            log::warn!("❌ Case not found: {}", id);
            Err(ApiError::NotFound("Case not found".into()))
        }
    }
}
