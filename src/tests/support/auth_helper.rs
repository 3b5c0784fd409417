use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::TokenProvider;

const TEST_SECRET: &str = "test_secret_key_min_32_characters_long";

fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: "testapp".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// The token provider the extractors read from app data; mint bearers
/// with the matching helpers below.
pub fn test_token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(arc)
}

pub fn bearer_for(user_id: Uuid, role: UserRole) -> (&'static str, String) {
    let token = test_jwt_service()
        .generate_access_token(user_id, role)
        .expect("test token generation");
    ("Authorization", format!("Bearer {}", token))
}

pub fn citizen_bearer() -> (&'static str, String) {
    bearer_for(Uuid::new_v4(), UserRole::Citizen)
}

pub fn admin_bearer() -> (&'static str, String) {
    bearer_for(Uuid::new_v4(), UserRole::Administrator)
}
