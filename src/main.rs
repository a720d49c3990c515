mod api;
mod middleware;
mod models;
mod seeds;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());

    log::info!("🚀 Starting Donation Platform Mock API...");

    // All state lives in memory and resets on restart
    let store = web::Data::new(store::MockStore::new());

    // 🌱 Seed the demo imam and the demo medical case
    seeds::demo_data_seed::seed_demo_data(&store);

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);
    log::info!("Available endpoints:");
    log::info!("- POST /api/auth/login | register | verify-otp | logout");
    log::info!("- GET/POST /api/cases, PUT/DELETE /api/cases/{{id}}, POST /api/cases/{{id}}/approve|reject");
    log::info!("- GET /api/users, PUT /api/users/{{id}}, POST /api/users/verify");
    log::info!("- POST /api/donations, GET /api/donations/{{userId}}, GET /api/reports/donations");
    log::info!("- GET /api/mosques, POST /api/mosques/verify");
    log::info!("- POST /api/admin/login");
    log::info!("- GET /health, GET /metrics");

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Auth endpoints
            .service(
                web::scope("/api/auth")
                    .route("/login", web::post().to(api::auth::login))
                    .route("/register", web::post().to(api::auth::register))
                    .route("/verify-otp", web::post().to(api::auth::verify_otp))
                    .route("/logout", web::post().to(api::auth::logout))
            )
            // Cases: browse, create, patch, delete, approve/reject
            .service(
                web::scope("/api/cases")
                    .route("", web::get().to(api::cases::list_cases))
                    .route("", web::post().to(api::cases::create_case))
                    .route("/{id}", web::put().to(api::cases::update_case))
                    .route("/{id}", web::delete().to(api::cases::delete_case))
                    .route("/{id}/approve", web::post().to(api::cases::approve_case))
                    .route("/{id}/reject", web::post().to(api::cases::reject_case))
            )
            // Users: listing, patching, verification
            .service(
                web::scope("/api/users")
                    .route("", web::get().to(api::users::list_users))
                    .route("/verify", web::post().to(api::users::verify_user))
                    .route("/{id}", web::put().to(api::users::update_user))
            )
            // Donations
            .service(
                web::scope("/api/donations")
                    .route("", web::post().to(api::donations::create_donation))
                    .route("/{user_id}", web::get().to(api::donations::list_user_donations))
            )
            // Reports
            .route("/api/reports/donations", web::get().to(api::donations::donation_report))
            // Mosques
            .service(
                web::scope("/api/mosques")
                    .route("", web::get().to(api::mosques::list_mosques))
                    .route("/verify", web::post().to(api::mosques::verify_mosque))
            )
            // Admin
            .route("/api/admin/login", web::post().to(api::admin::admin_login))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
