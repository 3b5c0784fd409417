use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
    pub fn new() -> Self {
        let params = Params::new(4 * 1024, 3, 1, None).expect("Invalid Argon2 params");
        Self { params }
    }

    /// Custom params for other environments
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params =
            Params::new(memory_kib, iterations, parallelism, None).expect("Invalid Argon2 params");
        Self { params }
    }

    pub fn from_env() -> Self {
        let memory_kib: u32 = std::env::var("ARGON2_MEMORY_KIB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4 * 1024);

        let iterations: u32 = std::env::var("ARGON2_ITERATIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let parallelism: u32 = std::env::var("ARGON2_PARALLELISM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Self::with_params(memory_kib, iterations, parallelism)
    }

    /// Cheap params for tests: hashing at real cost makes the suite crawl
    pub fn fast_env() -> Self {
        Self::with_params(1024, 1, 1)
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            let parsed = PasswordHash::new(&hash).map_err(|_| HashError::HashFailed)?;

            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(_) => Err(HashError::HashFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let hasher = Argon2Hasher::fast_env();

        let hash = hasher.hash_password("civic pass 1").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));

        let ok = hasher.verify_password("civic pass 1", &hash).await.unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn test_wrong_password_is_false_not_error() {
        let hasher = Argon2Hasher::fast_env();

        let hash = hasher.hash_password("civic pass 1").await.unwrap();
        let ok = hasher.verify_password("other pass 2", &hash).await.unwrap();

        assert!(!ok);
    }

    #[tokio::test]
    async fn test_corrupt_hash_is_error() {
        let hasher = Argon2Hasher::fast_env();

        let result = hasher.verify_password("whatever", "not-a-phc-string").await;
        assert_eq!(result, Err(HashError::HashFailed));
    }

    #[tokio::test]
    async fn test_same_password_different_salts() {
        let hasher = Argon2Hasher::fast_env();

        let a = hasher.hash_password("civic pass 1").await.unwrap();
        let b = hasher.hash_password("civic pass 1").await.unwrap();

        assert_ne!(a, b);
    }
}
