use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::modules::media::application::ports::outgoing::{FileStorage, FileStorageError};

/// Signed upload URLs only need to outlive the single PUT that follows.
const SIGNED_URL_TTL: Duration = Duration::from_secs(5 * 60);

/// google-cloud-storage names buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_url(bucket: &str, key: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, key)
}

fn map_storage_error(msg: String) -> FileStorageError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") || m.contains("403") {
        FileStorageError::AccessDenied(msg)
    } else {
        FileStorageError::Unavailable(msg)
    }
}

/// Seam between the adapter and google-cloud-storage so the adapter can be
/// tested with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;

    async fn put_object(
        &self,
        signed_url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[derive(Clone)]
pub struct GcsFileStorage {
    bucket: String,
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
}

impl GcsFileStorage {
    /// The client is built on first use, so startup never blocks on GCP.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            client: Arc::new(OnceCell::new()),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, FileStorageError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new()?;
                Ok::<_, FileStorageError>(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(bucket: &str, client: Box<dyn GcsClient>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(client);

        Self {
            bucket: bucket.to_string(),
            client: Arc::new(once),
        }
    }
}

#[async_trait]
impl FileStorage for GcsFileStorage {
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FileStorageError> {
        let client = self.get_client().await?;

        let signed = client
            .sign_put_url(&bucket_resource(&self.bucket), key, SIGNED_URL_TTL)
            .await
            .map_err(map_storage_error)?;

        client
            .put_object(&signed, content_type, bytes)
            .await
            .map_err(map_storage_error)?;

        Ok(public_url(&self.bucket, key))
    }

    async fn read(&self, _key: &str) -> Result<Option<Vec<u8>>, FileStorageError> {
        Ok(None)
    }
}

// ============================================================================
// Real Google Cloud Storage client
// ============================================================================

struct RealGcsClient {
    signer: google_cloud_auth::signer::Signer,
    http: reqwest::Client,
}

impl RealGcsClient {
    fn new() -> Result<Self, FileStorageError> {
        tracing::info!("Initializing GCS signer...");

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                tracing::error!(
                    "Failed to build GCS signer: {:?}. Signed URLs require a service-account key in GOOGLE_APPLICATION_CREDENTIALS",
                    e
                );
                FileStorageError::Unavailable(e.to_string())
            })?;

        Ok(Self {
            signer,
            http: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())
    }

    async fn put_object(
        &self,
        signed_url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.http
            .put(signed_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
