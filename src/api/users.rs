use actix_web::{web, Either, HttpResponse};
use serde::Deserialize;

use crate::models::{User, UserUpdate};
use crate::store::MockStore;
use crate::utils::error::ApiError;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct UserFilter {
    /// Exact match, e.g. `imam` or `donor`.
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyUserRequest {
    pub user_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(UserFilter),
    responses(
        (status = 200, description = "Users, optionally narrowed to one role")
    )
)]
pub async fn list_users(store: web::Data<MockStore>, query: web::Query<UserFilter>) -> HttpResponse {
    log::info!("👥 GET /api/users - role: {:?}", query.role);

    // An empty role value ("?role=") behaves like an absent filter.
    let role = query.role.as_deref().filter(|r| !r.is_empty());

    let users = store.users();
    let filtered: Vec<&User> = users
        .iter()
        .filter(|u| match role {
            Some(role) => u.role.as_deref() == Some(role),
            None => true,
        })
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "users": filtered
    }))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Patched user, no timestamp is stamped"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    store: web::Data<MockStore>,
    path: web::Path<String>,
    body: web::Json<UserUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    log::info!("👥 PUT /api/users/{}", id);

    let mut users = store.users();
    match users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            user.apply(body.into_inner());
            log::info!("✅ User updated: {}", id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "user": user
            })))
        }
        None => {
            log::warn!("❌ User not found: {}", id);
            Err(ApiError::NotFound("User not found".into()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/users/verify",
    tag = "Users",
    request_body = VerifyUserRequest,
    responses(
        (status = 200, description = "User marked verified"),
        (status = 404, description = "User not found")
    )
)]
pub async fn verify_user(
    store: web::Data<MockStore>,
    body: Either<web::Json<VerifyUserRequest>, web::Form<VerifyUserRequest>>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    log::info!(
        "✔️ POST /api/users/verify - userId: {}",
        req.user_id.as_deref().unwrap_or("N/A")
    );

    let mut users = store.users();
    match users
        .iter_mut()
        .find(|u| Some(u.id.as_str()) == req.user_id.as_deref())
    {
        Some(user) => {
            user.is_verified = true;
            log::info!("✅ User verified: {}", user.id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "user": user
            })))
        }
        None => {
            log::warn!("❌ User not found: {:?}", req.user_id);
            Err(ApiError::NotFound("User not found".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn seeded_store() -> web::Data<MockStore> {
        let store = MockStore::new();
        crate::seeds::demo_data_seed::seed_demo_data(&store);
        web::Data::new(store)
    }

    fn user_routes(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope("/api/users")
                .route("", web::get().to(list_users))
                .route("/verify", web::post().to(verify_user))
                .route("/{id}", web::put().to(update_user)),
        );
    }

    #[actix_web::test]
    async fn role_filter_narrows_the_listing() {
        let store = seeded_store();
        store.users().push(User::register(
            serde_json::from_value(json!({ "role": "donor" })).unwrap(),
        ));
        let app = test::init_service(App::new().app_data(store).configure(user_routes)).await;

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["users"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/users?role=imam")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let users = body["users"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["id"], json!("user_001"));
    }

    #[actix_web::test]
    async fn an_empty_role_value_lists_everyone() {
        let store = seeded_store();
        store.users().push(User::register(
            serde_json::from_value(json!({ "role": "donor" })).unwrap(),
        ));
        let app = test::init_service(App::new().app_data(store).configure(user_routes)).await;

        let req = test::TestRequest::get().uri("/api/users?role=").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["users"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn update_merges_without_stamping_a_timestamp() {
        let app =
            test::init_service(App::new().app_data(seeded_store()).configure(user_routes)).await;

        let req = test::TestRequest::put()
            .uri("/api/users/user_001")
            .set_json(json!({
                "location": "Lahore",
                "khutbahLanguage": "Urdu"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], json!(true));
        assert_eq!(body["user"]["location"], json!("Lahore"));
        assert_eq!(body["user"]["khutbahLanguage"], json!("Urdu"));
        assert_eq!(body["user"]["role"], json!("imam"));
        assert!(body["user"].get("updatedAt").is_none());
    }

    #[actix_web::test]
    async fn updating_a_missing_user_returns_404() {
        let app =
            test::init_service(App::new().app_data(seeded_store()).configure(user_routes)).await;

        let req = test::TestRequest::put()
            .uri("/api/users/user_999")
            .set_json(json!({ "location": "Multan" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], json!("User not found"));
    }

    #[actix_web::test]
    async fn verify_flips_the_flag_for_an_existing_user() {
        let store = seeded_store();
        let registered = User::register(
            serde_json::from_value(json!({ "role": "donor" })).unwrap(),
        );
        let id = registered.id.clone();
        store.users().push(registered);
        let app = test::init_service(App::new().app_data(store.clone()).configure(user_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/users/verify")
            .set_json(json!({ "userId": id }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], json!(true));
        assert_eq!(body["user"]["isVerified"], json!(true));
    }

    #[actix_web::test]
    async fn verify_without_a_user_id_returns_404() {
        let app =
            test::init_service(App::new().app_data(seeded_store()).configure(user_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/users/verify")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], json!("User not found"));
    }
}
