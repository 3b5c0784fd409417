use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// The authenticated caller: subject and role straight from a verified
/// access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let token_provider = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    match token_provider.verify_token(&token) {
        Ok(claims) => {
            if claims.token_type != "access" {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )));
            }

            Ok(AuthenticatedUser {
                user_id: claims.sub,
                role: claims.role,
            })
        }
        Err(_) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))),
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Admin-gated endpoints extract this instead of checking the role by
/// hand in every handler.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|user| {
            if !user.role.is_admin() {
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Administrator access required",
                )));
            }

            Ok(AdminUser {
                user_id: user.user_id,
            })
        }))
    }
}

/// Public endpoints that personalize when a bearer token happens to be
/// present (vote summaries and their `my_vote`). A missing or invalid
/// token is simply anonymous, never an error.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl MaybeUser {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.as_ref().map(|u| u.user_id)
    }
}

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeUser(authenticate(req).ok())))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use actix_web::{get, test, web, App, Responder};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        ApiResponse::success(serde_json::json!({
            "user_id": user.user_id,
            "role": user.role,
        }))
    }

    #[get("/admin-only")]
    async fn admin_only(admin: AdminUser) -> impl Responder {
        ApiResponse::success(serde_json::json!({ "user_id": admin.user_id }))
    }

    #[get("/maybe")]
    async fn maybe(user: MaybeUser) -> impl Responder {
        ApiResponse::success(serde_json::json!({ "anonymous": user.user_id().is_none() }))
    }

    fn jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        })
    }

    fn provider_data(service: JwtTokenService) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(service);
        web::Data::new(arc)
    }

    #[actix_web::test]
    async fn test_valid_access_token_authenticates() {
        let service = jwt_service();
        let user_id = Uuid::new_v4();
        let token = service
            .generate_access_token(user_id, UserRole::Citizen)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(provider_data(service))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user_id"], user_id.to_string());
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(jwt_service()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_refresh_token_rejected_as_bearer() {
        let service = jwt_service();
        let token = service
            .generate_refresh_token(Uuid::new_v4(), UserRole::Citizen)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(provider_data(service))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_citizen_blocked_from_admin_route() {
        let service = jwt_service();
        let token = service
            .generate_access_token(Uuid::new_v4(), UserRole::Citizen)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(provider_data(service))
                .service(admin_only),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn test_admin_passes_admin_route() {
        let service = jwt_service();
        let token = service
            .generate_access_token(Uuid::new_v4(), UserRole::Administrator)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(provider_data(service))
                .service(admin_only),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_maybe_user_tolerates_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(jwt_service()))
                .service(maybe),
        )
        .await;

        let req = test::TestRequest::get().uri("/maybe").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["anonymous"], true);
    }
}
