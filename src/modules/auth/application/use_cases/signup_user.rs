use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::auth::application::ports::outgoing::{
    token_provider::TokenProvider,
    user_query::UserQuery,
    user_repository::{CreateUserData, UserRepository, UserRepositoryError},
    PasswordHasher,
};

// ========================= Signup Request =========================
/// Validated signup request. Every instance is syntactically sound:
/// email is normalized to lowercase, passwords match, phone (when
/// given) looks like a phone number.
///
/// Role is intentionally absent. Everyone signs up as a citizen;
/// promotions go through the admin surface.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    username: String,
    email: String,
    full_name: String,
    phone: Option<String>,
    date_of_birth: Option<NaiveDate>,
    password: String,
}

#[derive(Debug, Clone)]
pub enum SignupRequestError {
    EmptyUsername,
    InvalidUsername,
    InvalidEmailFormat,
    EmptyFullName,
    InvalidPhone,
    PasswordMismatch,
    WeakPassword(PasswordPolicyError),
}

impl std::fmt::Display for SignupRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            SignupRequestError::InvalidUsername => write!(
                f,
                "Username must be 3-150 characters of letters, digits, '.', '_' or '-'"
            ),
            SignupRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            SignupRequestError::EmptyFullName => write!(f, "Full name cannot be empty"),
            SignupRequestError::InvalidPhone => write!(f, "Invalid phone number"),
            SignupRequestError::PasswordMismatch => write!(f, "Password fields didn't match"),
            SignupRequestError::WeakPassword(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SignupRequestError {}

impl SignupRequest {
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        phone: Option<String>,
        date_of_birth: Option<NaiveDate>,
        password: String,
        confirm_password: String,
        policy: &dyn PasswordPolicy,
    ) -> Result<Self, SignupRequestError> {
        let username = Self::validate_username(username)?;
        let email = Self::validate_email(email)?;
        let full_name = full_name.trim().to_string();

        if full_name.is_empty() {
            return Err(SignupRequestError::EmptyFullName);
        }

        let phone = match phone {
            Some(p) => Some(Self::validate_phone(p)?),
            None => None,
        };

        if password != confirm_password {
            return Err(SignupRequestError::PasswordMismatch);
        }

        policy
            .validate(&password)
            .map_err(SignupRequestError::WeakPassword)?;

        Ok(Self {
            username,
            email,
            full_name,
            phone,
            date_of_birth,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    // ------------------------
    // Validation helpers
    // ------------------------

    fn validate_username(username: String) -> Result<String, SignupRequestError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(SignupRequestError::EmptyUsername);
        }

        let valid_shape = username.len() >= 3
            && username.len() <= 150
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

        if !valid_shape {
            return Err(SignupRequestError::InvalidUsername);
        }

        Ok(username.to_string())
    }

    fn validate_email(email: String) -> Result<String, SignupRequestError> {
        let email = email.trim();

        if !EmailAddress::is_valid(email) {
            return Err(SignupRequestError::InvalidEmailFormat);
        }

        // The only place an email enters the system; stored lowercase from here on
        Ok(email.to_lowercase())
    }

    fn validate_phone(phone: String) -> Result<String, SignupRequestError> {
        let phone = phone.trim().to_string();

        let re = regex::Regex::new(r"^\+?[0-9]{7,15}$").expect("phone regex is valid");
        if !re.is_match(&phone) {
            return Err(SignupRequestError::InvalidPhone);
        }

        Ok(phone)
    }
}

/// Wire shape of the signup body; turned into a validated `SignupRequest`
/// by the use case so the policy object can participate.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupPayload {
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_date")]
    pub date_of_birth: Option<NaiveDate>,
    pub password: String,
    pub confirm_password: String,
}

fn deserialize_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| serde::de::Error::custom("Expected date in YYYY-MM-DD format")),
    }
}

// ====================== Signup Error =============================
#[derive(Debug, Clone)]
pub enum SignupError {
    InvalidRequest(SignupRequestError),
    UsernameAlreadyExists,
    EmailAlreadyExists,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupError::InvalidRequest(e) => write!(f, "{}", e),
            SignupError::UsernameAlreadyExists => {
                write!(f, "A user with this username already exists")
            }
            SignupError::EmailAlreadyExists => write!(f, "A user with this email already exists"),
            SignupError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            SignupError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            SignupError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for SignupError {}

// ============================ Signup Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct SignupUserResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

// ============================ Signup Use Case =============================
#[async_trait]
pub trait ISignupUserUseCase: Send + Sync {
    async fn execute(&self, payload: SignupPayload) -> Result<SignupUserResponse, SignupError>;
}

#[derive(Clone)]
pub struct SignupUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> SignupUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> ISignupUserUseCase for SignupUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, payload: SignupPayload) -> Result<SignupUserResponse, SignupError> {
        // 1️⃣ **Validate the payload** (normalizes email, checks policy)
        let request = SignupRequest::new(
            payload.username,
            payload.email,
            payload.full_name,
            payload.phone,
            payload.date_of_birth,
            payload.password,
            payload.confirm_password,
            self.password_policy.as_ref(),
        )
        .map_err(SignupError::InvalidRequest)?;

        // 2️⃣ **Fast-path duplicate checks** (friendly errors before hashing work)
        if let Ok(Some(_)) = self.query.find_by_username(request.username()).await {
            return Err(SignupError::UsernameAlreadyExists);
        }

        if let Ok(Some(_)) = self.query.find_by_email(request.email()).await {
            return Err(SignupError::EmailAlreadyExists);
        }

        // 3️⃣ **Hash password**
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| SignupError::HashingFailed(e.to_string()))?;

        // 4️⃣ **Persist** — the unique constraints are the authoritative
        // duplicate check; a racing signup loses here, with no partial row
        let user = self
            .repository
            .create_user(CreateUserData {
                username: request.username().to_string(),
                email: request.email().to_string(),
                password_hash,
                full_name: request.full_name().to_string(),
                phone: request.phone().map(str::to_string),
                date_of_birth: request.date_of_birth(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => SignupError::EmailAlreadyExists,
                other => SignupError::RepositoryError(other.to_string()),
            })?;

        // 5️⃣ **Issue the initial token pair**
        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| SignupError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| SignupError::TokenGenerationFailed(e.to_string()))?;

        Ok(SignupUserResponse {
            user,
            access_token,
            refresh_token,
        })
    }
}
