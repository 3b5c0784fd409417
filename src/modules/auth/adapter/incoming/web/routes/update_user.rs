use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::use_cases::update_user::{UpdateUserError, UpdateUserPayload};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserDto;

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequestDto {
    /// New full name
    #[schema(example = "Amina K.")]
    pub full_name: Option<String>,

    /// New phone number
    #[schema(example = "+4915123456789")]
    pub phone: Option<String>,

    /// New avatar URL
    pub avatar_url: Option<String>,

    /// New date of birth (YYYY-MM-DD)
    #[schema(example = "1991-04-23")]
    pub date_of_birth: Option<String>,

    /// New role — administrators only
    #[schema(example = "citizen")]
    pub role: Option<String>,

    /// Enable/disable the account — administrators only
    #[schema(example = true)]
    pub is_active: Option<bool>,
}

/// Update a user profile
///
/// Owners update their own profile fields; role changes require an
/// administrator.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequestDto,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserDto>)),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 403, description = "Not allowed", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
    )
)]
#[patch("/api/users/{id}")]
pub async fn update_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_id = path.into_inner();
    let dto = req.into_inner();

    let role = match dto.role.as_deref().map(str::parse::<UserRole>).transpose() {
        Ok(r) => r,
        Err(_) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", "Unknown role");
        }
    };

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

    let payload = UpdateUserPayload {
        full_name: dto.full_name,
        phone: dto.phone,
        avatar_url: dto.avatar_url,
        date_of_birth,
        role,
        is_active: dto.is_active,
    };

    match data
        .update_user_use_case
        .execute(user.user_id, user.role, target_id, payload)
        .await
    {
        Ok(updated) => {
            info!(user_id = %target_id, "Profile updated");
            ApiResponse::success(UserDto::from(updated))
        }

        Err(UpdateUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to update this user")
        }

        Err(UpdateUserError::RoleChangeForbidden) => {
            warn!(user_id = %user.user_id, "Role change attempt by non-admin");
            ApiResponse::forbidden("ROLE_CHANGE_FORBIDDEN", "Only administrators can change user roles")
        }

        Err(UpdateUserError::ActivationChangeForbidden) => {
            warn!(user_id = %user.user_id, "Activation change attempt by non-admin");
            ApiResponse::forbidden(
                "ACTIVATION_CHANGE_FORBIDDEN",
                "Only administrators can enable or disable accounts",
            )
        }

        Err(e @ (UpdateUserError::EmptyFullName | UpdateUserError::InvalidPhone)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
