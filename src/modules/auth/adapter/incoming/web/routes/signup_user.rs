use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::signup_user::{
    SignupError, SignupPayload, SignupRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::UserDto;

/// Signup request from client
#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    /// Desired username
    #[schema(example = "amina")]
    pub username: String,

    /// Email address (stored lowercase)
    #[schema(example = "amina@example.com")]
    pub email: String,

    /// Full display name
    #[schema(example = "Amina K")]
    pub full_name: String,

    /// Optional phone number
    #[schema(example = "+4915123456789")]
    pub phone: Option<String>,

    /// Optional date of birth (YYYY-MM-DD)
    #[schema(example = "1991-04-23")]
    pub date_of_birth: Option<String>,

    /// Password
    #[schema(example = "SecurePass123")]
    pub password: String,

    /// Must match `password`
    #[schema(example = "SecurePass123")]
    pub confirm_password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignupResponseBody {
    /// The created user
    pub user: UserDto,

    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// JWT refresh token (long-lived, single-use)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Register a new citizen account
///
/// Creates the user, fires the welcome notification and returns an
/// initial token pair. Accounts always start with the citizen role.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<SignupResponseBody>),
        ),
        (
            status = 400,
            description = "Validation failure (weak password, bad email, mismatch)",
            body = ErrorResponse,
        ),
        (
            status = 409,
            description = "Username or email already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_TAKEN",
                    "message": "A user with this email already exists"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_user_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Signup attempt");

    let date_of_birth = match dto
        .date_of_birth
        .as_deref()
        .map(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
    {
        Ok(d) => d,
        Err(_) => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "Expected date_of_birth in YYYY-MM-DD format",
            );
        }
    };

    let payload = SignupPayload {
        username: dto.username,
        email: dto.email,
        full_name: dto.full_name,
        phone: dto.phone,
        date_of_birth,
        password: dto.password,
        confirm_password: dto.confirm_password,
    };

    match data.register_user_orchestrator.register(payload).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User registered");

            ApiResponse::created(SignupResponseBody {
                user: UserDto::from(response.user),
                access_token: response.access_token,
                refresh_token: response.refresh_token,
            })
        }

        Err(SignupError::InvalidRequest(e)) => {
            warn!("Signup validation failed: {}", e);
            let code = match e {
                SignupRequestError::PasswordMismatch => "PASSWORD_MISMATCH",
                SignupRequestError::WeakPassword(_) => "WEAK_PASSWORD",
                _ => "VALIDATION_ERROR",
            };
            ApiResponse::bad_request(code, &e.to_string())
        }

        Err(SignupError::UsernameAlreadyExists) => {
            warn!("Signup rejected: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "A user with this username already exists")
        }

        Err(SignupError::EmailAlreadyExists) => {
            warn!("Signup rejected: email taken");
            ApiResponse::conflict("EMAIL_TAKEN", "A user with this email already exists")
        }

        Err(SignupError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(SignupError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(SignupError::RepositoryError(ref e)) => {
            error!(error = %e, "User creation failed");
            ApiResponse::internal_error()
        }
    }
}
