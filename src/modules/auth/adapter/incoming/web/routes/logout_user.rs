use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::logout_user::{LogoutError, LogoutRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    /// Refresh token to revoke; optional, logout succeeds without it
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// Logout
///
/// Blacklists the supplied refresh token. Succeeds regardless of the
/// token's prior state — already revoked, expired, or absent.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    responses(
        (
            status = 200,
            description = "Logged out",
            body = inline(SuccessResponse<LogoutResponseBody>),
        ),
        (
            status = 500,
            description = "Revocation store unavailable",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let request = LogoutRequest::new(dto.refresh_token);

    match data.logout_user_use_case.execute(request).await {
        Ok(response) => ApiResponse::ok_message(&response.message),

        Err(LogoutError::StorageError(ref e)) => {
            error!(error = %e, "Logout failed to reach the revocation store");
            ApiResponse::internal_error()
        }
    }
}
