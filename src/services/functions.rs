//! Serverless function invocation.

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use super::{BackendError, SupabaseClient};

impl SupabaseClient {
    #[instrument(skip(self, body))]
    pub async fn invoke<B: Serialize, R: DeserializeOwned>(
        &self,
        function: &str,
        body: &B,
    ) -> Result<R, BackendError> {
        let url = format!("{}/functions/v1/{}", self.base_url(), function);

        let response = self
            .request(Method::POST, &url)
            .json(body)
            .send()
            .await?;

        Self::decode(Self::check(response).await?).await
    }
}
