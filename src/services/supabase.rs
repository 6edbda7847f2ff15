//! Client for the hosted backend.
//!
//! One handle covers the table API (`/rest/v1`), object storage (`/storage/v1`) and
//! serverless functions (`/functions/v1`). Public reads go out with the anon key;
//! admin writes are scoped to the operator's token via [`SupabaseClient::with_token`]
//! so the backend's row policies apply.

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::Query;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("unexpected backend response: {0}")]
    Decode(String),
}

/// Error body shapes used by the table, storage and function APIs.
#[derive(Debug, Default, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl SupabaseClient {
    pub fn new(http: Client, base_url: &str, anon_key: &str) -> Self {
        tracing::info!(base_url = base_url, "Backend client initialized");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: None,
        }
    }

    /// A handle whose requests carry the operator's access token.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            access_token: Some(token.to_string()),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Turn a non-success response into a [`BackendError::Status`].
    pub(super) async fn check(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<BackendErrorBody>().await.unwrap_or_default();
        let message = body
            .message
            .or(body.error)
            .or(body.msg)
            .unwrap_or_else(|| format!("request failed with status {}", status));

        Err(BackendError::Status { status, message })
    }

    pub(super) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    // =========================================================================
    // Tables
    // =========================================================================

    #[instrument(skip(self, query))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .request(Method::GET, &self.table_url(table))
            .query(&query.to_params())
            .send()
            .await?;

        let rows: Vec<T> = Self::decode(Self::check(response).await?).await?;
        debug!(table = table, rows = rows.len(), "Selected rows");
        Ok(rows)
    }

    /// First row matching `query`, `None` when nothing matches.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Option<T>, BackendError> {
        let query = query.clone().limit(1);
        Ok(self.select(table, &query).await?.into_iter().next())
    }

    /// One page of rows plus the total row count.
    #[instrument(skip(self, query))]
    pub async fn select_page<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        offset: u64,
        limit: u32,
    ) -> Result<(Vec<T>, u64), BackendError> {
        let last = offset.saturating_add(u64::from(limit.max(1)) - 1);
        let response = self
            .request(Method::GET, &self.table_url(table))
            .query(&query.to_params())
            .header("Prefer", "count=exact")
            .header("Range-Unit", "items")
            .header(header::RANGE, format!("{}-{}", offset, last))
            .send()
            .await?;

        let total = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);

        // A page past the end is answered with 416 and `*/<total>`
        if response.status() == StatusCode::RANGE_NOT_SATISFIABLE {
            debug!(table = table, offset = offset, "Requested page is past the last row");
            return Ok((Vec::new(), total.unwrap_or(0)));
        }

        let response = Self::check(response).await?;
        let rows: Vec<T> = Self::decode(response).await?;
        let total = total.unwrap_or(rows.len() as u64);
        Ok((rows, total))
    }

    #[instrument(skip(self, row))]
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .request(Method::POST, &self.table_url(table))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<T> = Self::decode(Self::check(response).await?).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode(format!("insert into {} returned no row", table)))
    }

    /// Insert without reading the row back.
    ///
    /// Row policies that let the anon role insert but not select would reject a
    /// returning insert, so callers that need the id generate it themselves.
    #[instrument(skip(self, row))]
    pub async fn insert_minimal<B: Serialize>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<(), BackendError> {
        let response = self
            .request(Method::POST, &self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        Self::check(response).await?;
        debug!(table = table, "Inserted row");
        Ok(())
    }

    /// Overwrite the row with `id` using every field of `row`.
    #[instrument(skip(self, row))]
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        id: Uuid,
        row: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .request(Method::PATCH, &self.table_url(table))
            .query(&Query::new().eq("id", id).to_params())
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<T> = Self::decode(Self::check(response).await?).await?;
        rows.into_iter().next().ok_or_else(|| BackendError::Status {
            status: StatusCode::NOT_FOUND,
            message: format!("No {} row with id {}", table, id),
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, table: &str, id: Uuid) -> Result<(), BackendError> {
        let response = self
            .request(Method::DELETE, &self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;

        Self::check(response).await?;
        debug!(table = table, id = %id, "Deleted row");
        Ok(())
    }

    /// The user behind the current access token.
    pub async fn auth_user<T: DeserializeOwned>(&self) -> Result<T, BackendError> {
        let response = self
            .request(Method::GET, &format!("{}/auth/v1/user", self.base_url))
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    /// Check the table API answers at all.
    pub async fn health_check(&self) -> Result<(), BackendError> {
        let response = self
            .request(Method::GET, &format!("{}/rest/v1/", self.base_url))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// `0-9/42` → 42, `*/0` → 0, `0-9/*` → None.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit_once('/').and_then(|(_, total)| total.parse().ok())
}
