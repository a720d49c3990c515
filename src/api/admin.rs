use actix_web::{web, Either, HttpResponse};
use serde::Deserialize;
use std::env;

use crate::utils::error::ApiError;
use crate::utils::ids::mock_token;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AdminLoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Admin login successful, returns token and admin identity"),
        (status = 401, description = "Invalid admin credentials")
    )
)]
pub async fn admin_login(
    body: Either<web::Json<AdminLoginRequest>, web::Form<AdminLoginRequest>>,
) -> Result<HttpResponse, ApiError> {
    let creds = body.into_inner();
    log::info!(
        "🔐 POST /api/admin/login - username: {}",
        creds.username.as_deref().unwrap_or("N/A")
    );

    let expected_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let expected_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    if creds.username.as_deref() == Some(expected_username.as_str())
        && creds.password.as_deref() == Some(expected_password.as_str())
    {
        log::info!("✅ Admin login successful");
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "token": mock_token("admin_token"),
            "user": {
                "id": "admin_1",
                "username": expected_username,
                "role": "super_admin"
            }
        })))
    } else {
        log::warn!("❌ Admin login failed");
        Err(ApiError::Unauthorized("Invalid admin credentials".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn app_routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/api/admin/login", web::post().to(admin_login));
    }

    #[actix_web::test]
    async fn default_credentials_grant_the_super_admin_identity() {
        let app = test::init_service(App::new().configure(app_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({ "username": "admin", "password": "admin123" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], json!(true));
        assert!(body["token"].as_str().unwrap().starts_with("admin_token_"));
        assert_eq!(body["user"]["id"], json!("admin_1"));
        assert_eq!(body["user"]["username"], json!("admin"));
        assert_eq!(body["user"]["role"], json!("super_admin"));
    }

    #[actix_web::test]
    async fn wrong_password_is_rejected_with_401() {
        let app = test::init_service(App::new().configure(app_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({ "username": "admin", "password": "hunter2" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Invalid admin credentials"));
    }

    #[actix_web::test]
    async fn missing_fields_are_rejected_with_401() {
        let app = test::init_service(App::new().configure(app_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
