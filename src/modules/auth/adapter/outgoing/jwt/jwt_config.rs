#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds. Short: access tokens ride every request.
    pub access_token_expiry: i64,
    /// Seconds. Long-lived but single-use; rotation hands out the next one.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = std::env::var("JWT_SECRET").expect("JWT_SECRET is not set");

        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters");
        }

        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "civicare".to_string());

        let access_token_expiry: i64 = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(900); // 15 minutes

        let refresh_token_expiry: i64 = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7 * 24 * 3600); // 7 days

        Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        }
    }
}
