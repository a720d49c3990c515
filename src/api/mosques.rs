use actix_web::{web, Either, HttpResponse};
use serde::Deserialize;

use crate::store::MockStore;
use crate::utils::error::ApiError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyMosqueRequest {
    pub mosque_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/mosques",
    tag = "Mosques",
    responses(
        (status = 200, description = "Every registered mosque, unfiltered")
    )
)]
pub async fn list_mosques(store: web::Data<MockStore>) -> HttpResponse {
    log::info!("🕌 GET /api/mosques");

    let mosques = store.mosques();
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "mosques": &*mosques
    }))
}

#[utoipa::path(
    post,
    path = "/api/mosques/verify",
    tag = "Mosques",
    request_body = VerifyMosqueRequest,
    responses(
        (status = 200, description = "Mosque marked verified"),
        (status = 404, description = "Mosque not found")
    )
)]
pub async fn verify_mosque(
    store: web::Data<MockStore>,
    body: Either<web::Json<VerifyMosqueRequest>, web::Form<VerifyMosqueRequest>>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    log::info!(
        "🕌 POST /api/mosques/verify - mosqueId: {}",
        req.mosque_id.as_deref().unwrap_or("N/A")
    );

    let mut mosques = store.mosques();
    match mosques
        .iter_mut()
        .find(|m| Some(m.id.as_str()) == req.mosque_id.as_deref())
    {
        Some(mosque) => {
            mosque.is_verified = true;
            log::info!("✅ Mosque verified: {}", mosque.id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "mosque": mosque
            })))
        }
        None => {
            log::warn!("❌ Mosque not found: {:?}", req.mosque_id);
            Err(ApiError::NotFound("Mosque not found".into()))
        }
    }
}
