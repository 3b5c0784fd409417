use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequestDto, LoginRequestDto, LoginResponseBody, LogoutRequestDto,
    LogoutResponseBody, RefreshTokenRequestDto, RefreshTokenResponseBody, SignupRequestDto,
    SignupResponseBody, UpdateUserRequestDto, UserDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CiviCare API",
        version = "1.0.0",
        description = "API documentation for the CiviCare civic issue reporting platform",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::current_user_handler,
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::auth::adapter::incoming::web::routes::fetch_user_handler,
        crate::auth::adapter::incoming::web::routes::update_user_handler,
        crate::auth::adapter::incoming::web::routes::delete_user_handler,

        // Issue endpoints
        // create_issue_handler,
        // get_issues_handler,
        // get_single_issue_handler,
        // patch_issue_handler,
        // close_issue_handler,
        // delete_issue_handler,
        // cast_vote_handler,
        // vote_summary_handler,

        // Issue type endpoints
        // create_issue_type_handler,
        // get_issue_types_handler,
        // delete_issue_type_handler,

        // Attachment endpoints
        // init_upload_handler,
        // list_attachments_handler,

        // Notification endpoints
        // list_notifications_handler,
        // mark_notification_read_handler,
    ),
    components(
        schemas(
            SuccessResponse<UserDto>,
            ErrorResponse,
            ErrorDetail,
            UserDto,
            SignupRequestDto,
            SignupResponseBody,
            LoginRequestDto,
            LoginResponseBody,
            LogoutRequestDto,
            LogoutResponseBody,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            ChangePasswordRequestDto,
            UpdateUserRequestDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, login and session lifecycle"),
        (name = "users", description = "Profiles and the admin user directory"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
