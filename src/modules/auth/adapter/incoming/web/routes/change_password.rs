use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordPayload,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ChangePasswordRequestDto {
    /// Current password
    #[schema(example = "OldPass123")]
    pub old_password: String,

    /// New password
    #[schema(example = "NewPass456")]
    pub new_password: String,

    /// Must match `new_password`
    #[schema(example = "NewPass456")]
    pub confirm_password: String,
}

/// Change the caller's password
///
/// Requires the current password. Existing sessions remain valid.
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = "auth",
    request_body = ChangePasswordRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Password updated",
            body = inline(SuccessResponse<serde_json::Value>),
        ),
        (
            status = 400,
            description = "Wrong current password, mismatch, or weak new password",
            body = ErrorResponse,
        ),
        (
            status = 401,
            description = "Missing or invalid access token",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let payload = ChangePasswordPayload {
        old_password: dto.old_password,
        new_password: dto.new_password,
        confirm_password: dto.confirm_password,
    };

    match data
        .change_password_use_case
        .execute(user.user_id, payload)
        .await
    {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::ok_message("Password updated successfully")
        }

        Err(ChangePasswordError::WrongOldPassword) => {
            warn!(user_id = %user.user_id, "Password change rejected: wrong current password");
            ApiResponse::bad_request("WRONG_PASSWORD", "Wrong password")
        }

        Err(ChangePasswordError::InvalidRequest(e)) => {
            warn!("Password change validation failed: {}", e);
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(ChangePasswordError::UserNotFound) => {
            // Token subject vanished between issuance and now
            warn!(user_id = %user.user_id, "Password change for missing user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ChangePasswordError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(ChangePasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Password update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::change_password::IChangePasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{citizen_bearer, test_token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockChangePasswordSuccess;

    #[async_trait]
    impl IChangePasswordUseCase for MockChangePasswordSuccess {
        async fn execute(
            &self,
            _user_id: Uuid,
            _payload: ChangePasswordPayload,
        ) -> Result<(), ChangePasswordError> {
            Ok(())
        }
    }

    #[derive(Clone)]
    struct MockChangePasswordWrongOld;

    #[async_trait]
    impl IChangePasswordUseCase for MockChangePasswordWrongOld {
        async fn execute(
            &self,
            _user_id: Uuid,
            _payload: ChangePasswordPayload,
        ) -> Result<(), ChangePasswordError> {
            Err(ChangePasswordError::WrongOldPassword)
        }
    }

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "old_password": "OldPass123",
            "new_password": "NewPass456",
            "confirm_password": "NewPass456"
        })
    }

    #[actix_web::test]
    async fn test_change_password_success() {
        let app_state = TestAppStateBuilder::default()
            .with_change_password(MockChangePasswordSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/change-password")
            .insert_header(citizen_bearer())
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_change_password_requires_auth() {
        let app_state = TestAppStateBuilder::default()
            .with_change_password(MockChangePasswordSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/change-password")
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_change_password_wrong_old_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_change_password(MockChangePasswordWrongOld)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(change_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/change-password")
            .insert_header(citizen_bearer())
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "WRONG_PASSWORD");
    }
}
