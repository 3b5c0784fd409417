use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::attachment::application::ports::outgoing::{AttachmentStore, SignUrlError};

/// TTL for signed upload/read URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_sign_error(msg: &str) -> SignUrlError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        SignUrlError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        SignUrlError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") || m.contains("configuration") {
        SignUrlError::Configuration
    } else {
        SignUrlError::Infrastructure
    }
}

/// Internal seam so the adapter is testable without mocking
/// google-cloud-storage types.
#[async_trait]
trait GcsSigner: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;

    async fn sign_get_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

/// Production adapter for the attachment bucket.
#[derive(Clone)]
pub struct GcsAttachmentStore {
    client: Arc<OnceCell<Box<dyn GcsSigner>>>,
    bucket_name: String,
    signed_url_ttl: Duration,
}

impl GcsAttachmentStore {
    /// Synchronous constructor — the signer is initialized lazily on
    /// first use, so startup doesn't block on credential loading.
    pub fn new(bucket_name: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket_name,
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }

    pub fn from_env() -> Self {
        let bucket =
            std::env::var("ATTACHMENT_BUCKET").expect("ATTACHMENT_BUCKET is not set");
        Self::new(bucket)
    }

    async fn get_client(&self) -> Result<&dyn GcsSigner, SignUrlError> {
        self.client
            .get_or_try_init(|| async {
                let real = RealGcsSigner::new().await.map_err(|e| {
                    tracing::error!("GCS signer init failed: {}", e);
                    SignUrlError::Configuration
                })?;
                Ok(Box::new(real) as Box<dyn GcsSigner>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_signer(signer: Box<dyn GcsSigner>, bucket_name: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(signer);

        Self {
            client: Arc::new(once),
            bucket_name: bucket_name.to_string(),
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }
}

#[async_trait]
impl AttachmentStore for GcsAttachmentStore {
    async fn signed_upload_url(&self, object_name: &str) -> Result<String, SignUrlError> {
        let client = self.get_client().await?;
        let bucket = bucket_resource(&self.bucket_name);

        client
            .sign_put_url(&bucket, object_name, self.signed_url_ttl)
            .await
            .map_err(|e| map_sign_error(&e))
    }

    async fn signed_read_url(&self, object_name: &str) -> Result<String, SignUrlError> {
        let client = self.get_client().await?;
        let bucket = bucket_resource(&self.bucket_name);

        client
            .sign_get_url(&bucket, object_name, self.signed_url_ttl)
            .await
            .map_err(|e| map_sign_error(&e))
    }
}

// ============================================================================
// Real Google Cloud Storage signer (google-cloud-storage)
// ============================================================================

struct RealGcsSigner {
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsSigner {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS signer...");

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                let msg = e.to_string();
                tracing::error!("Failed to build GCS signer: {:?}", e);

                if msg.contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }

                e
            })?;

        Ok(Self { signer })
    }
}

#[async_trait]
impl GcsSigner for RealGcsSigner {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        let url = google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())?;

        Ok(url)
    }

    async fn sign_get_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        let url = google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::GET)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())?;

        Ok(url)
    }
}
