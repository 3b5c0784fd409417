pub mod change_password;
pub mod current_user;
pub mod delete_user;
pub mod fetch_user;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod signup_user;
pub mod update_user;

pub use change_password::*;
pub use current_user::*;
pub use delete_user::*;
pub use fetch_user::*;
pub use list_users::*;
pub use login_user::*;
pub use logout_user::*;
pub use refresh_token::*;
pub use signup_user::*;
pub use update_user::*;

use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::User;

/// Public representation of a user. The password hash never leaves the
/// domain layer, and this DTO makes that structural.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Username
    #[schema(example = "amina")]
    pub username: String,

    /// Email address (always lowercase)
    #[schema(example = "amina@example.com")]
    pub email: String,

    /// Full display name
    #[schema(example = "Amina K")]
    pub full_name: String,

    /// Phone number, if provided
    #[schema(example = "+4915123456789")]
    pub phone: Option<String>,

    /// Avatar URL, if set
    pub avatar_url: Option<String>,

    /// Date of birth (YYYY-MM-DD), if provided
    pub date_of_birth: Option<String>,

    /// Account role
    #[schema(example = "citizen")]
    pub role: String,

    /// Whether the account can log in
    #[schema(example = true)]
    pub is_active: bool,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,

    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
            avatar_url: user.avatar_url,
            date_of_birth: user.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
            role: user.role.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}
