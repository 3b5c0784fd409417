use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUrlError {
    #[error("Infrastructure error occurred")]
    Infrastructure,

    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Invalid configuration")]
    Configuration,
}

/// Signed-URL factory for the attachment bucket.
///
/// Blobs go client↔bucket directly; this service never proxies file
/// bytes, it only mints short-lived URLs.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// URL the client PUTs the blob to.
    async fn signed_upload_url(&self, object_name: &str) -> Result<String, SignUrlError>;

    /// URL the client GETs the blob from.
    async fn signed_read_url(&self, object_name: &str) -> Result<String, SignUrlError>;
}
