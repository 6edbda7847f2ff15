//! Object storage: uploads and public URLs.

use reqwest::{header, Method};
use tracing::instrument;

use super::{BackendError, SupabaseClient};

impl SupabaseClient {
    /// Store `bytes` at `bucket/path`. Existing objects are not overwritten.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BackendError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url(), bucket, path);

        let response = self
            .request(Method::POST, &url)
            .header(header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        Self::check(response).await?;
        tracing::info!(bucket = bucket, path = path, "Object uploaded");
        Ok(())
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url(),
            bucket,
            path.trim_start_matches('/')
        )
    }
}
