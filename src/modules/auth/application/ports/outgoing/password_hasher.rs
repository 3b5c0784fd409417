use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    HashFailed,
    TaskFailed,
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::HashFailed => write!(f, "Password hashing failed"),
            HashError::TaskFailed => write!(f, "Hashing task failed to complete"),
        }
    }
}

impl std::error::Error for HashError {}

/// Async because real implementations run the KDF on a blocking thread.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Ok(false) means the password simply did not match; Err is reserved
    /// for corrupt hashes or infrastructure failures.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
