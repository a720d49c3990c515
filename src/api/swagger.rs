use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Donation Platform Mock API",
        version = "1.0.0",
        description = "Mock backend for the charitable-donation platform. \n\n**State:** everything lives in process memory and resets on restart.\n\n**Tokens:** login endpoints hand out opaque mock tokens that no endpoint ever validates.\n\n**Resources:**\n- Authentication (CNIC + phone number)\n- Fundraising cases with admin approve/reject\n- Donations and aggregate reports\n- User and mosque verification",
        contact(
            name = "Donation Platform Team"
        )
    ),
    paths(
        // Auth endpoints
        crate::api::auth::login,
        crate::api::auth::register,
        crate::api::auth::verify_otp,
        crate::api::auth::logout,

        // Admin
        crate::api::admin::admin_login,

        // Cases
        crate::api::cases::list_cases,
        crate::api::cases::create_case,
        crate::api::cases::update_case,
        crate::api::cases::delete_case,
        crate::api::cases::approve_case,
        crate::api::cases::reject_case,

        // Users
        crate::api::users::list_users,
        crate::api::users::update_user,
        crate::api::users::verify_user,

        // Donations & reports
        crate::api::donations::create_donation,
        crate::api::donations::list_user_donations,
        crate::api::donations::donation_report,

        // Mosques
        crate::api::mosques::list_mosques,
        crate::api::mosques::verify_mosque,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            // Auth
            crate::api::auth::LoginRequest,
            crate::api::admin::AdminLoginRequest,

            // Users
            crate::models::User,
            crate::models::RegisterRequest,
            crate::models::UserUpdate,
            crate::api::users::VerifyUserRequest,

            // Cases
            crate::models::Case,
            crate::models::CaseStatus,
            crate::models::CaseDraft,
            crate::models::CaseUpdate,

            // Donations
            crate::models::Donation,
            crate::models::DonationRequest,
            crate::models::DonationReport,

            // Mosques
            crate::models::Mosque,
            crate::api::mosques::VerifyMosqueRequest,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Mock authentication. Login matches CNIC + phone number against the user collection; tokens are opaque and never checked."),
        (name = "Admin", description = "Admin login with configured credentials (ADMIN_USERNAME/ADMIN_PASSWORD, default admin/admin123)."),
        (name = "Cases", description = "Fundraising case CRUD plus admin approve/reject transitions."),
        (name = "Users", description = "User listing, patch updates, and verification."),
        (name = "Donations", description = "Donation recording, per-donor listing, and the aggregate report."),
        (name = "Mosques", description = "Mosque listing and verification. The collection starts empty in this build."),
        (name = "Health", description = "Liveness probe and request-counter metrics."),
    )
)]
pub struct ApiDoc;
