use sha2::{Digest, Sha256};

/// SHA-256 a refresh token before it touches Redis. The blacklist only
/// ever sees hashes; a dump of the revocation set is not a bag of usable
/// credentials.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_token_same_hash() {
        let token = "eyJhbGciOiJIUzI1NiJ9.refresh";
        assert_eq!(hash_token(token), hash_token(token));
    }

    #[test]
    fn test_distinct_tokens_distinct_hashes() {
        assert_ne!(hash_token("refresh-a"), hash_token("refresh-b"));
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = hash_token("anything");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
