use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// The refresh token to exchange
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    /// Fresh JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Fresh JWT refresh token; the presented one is now spent
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Exchange a refresh token for a new pair
///
/// Refresh tokens are single-use: the presented token is revoked before
/// the new pair is minted, and a second exchange of the same token fails.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New token pair issued",
            body = inline(SuccessResponse<RefreshTokenResponseBody>),
        ),
        (
            status = 401,
            description = "Invalid, expired or already-used refresh token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "TOKEN_ALREADY_USED",
                    "message": "Refresh token has already been used"
                }
            })
        ),
        (
            status = 403,
            description = "Bound user missing or deactivated",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RefreshTokenRequest::new(dto.refresh_token) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => {
            info!("Token pair rotated");
            ApiResponse::success(RefreshTokenResponseBody {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
            })
        }

        Err(RefreshTokenError::AlreadyUsed) => {
            warn!("Refresh rejected: token already used");
            ApiResponse::unauthorized("TOKEN_ALREADY_USED", "Refresh token has already been used")
        }

        Err(RefreshTokenError::TokenExpired) => {
            warn!("Refresh rejected: token expired");
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }

        Err(RefreshTokenError::UserInactive) => {
            warn!("Refresh rejected: user missing or disabled");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "User account is disabled")
        }

        Err(
            RefreshTokenError::TokenInvalid
            | RefreshTokenError::InvalidTokenType
            | RefreshTokenError::InvalidSignature,
        ) => {
            warn!("Refresh rejected: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::StorageError(ref e)) => {
            error!(error = %e, "Blacklist storage failed");
            ApiResponse::internal_error()
        }
    }
}
