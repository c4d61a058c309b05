//! REST client for the form backend
//!
//! The backend exposes PostgREST-style table endpoints: rows are inserted
//! with `POST /rest/v1/<table>` and, with `Prefer: return=representation`,
//! echoed back as a JSON array.

use super::traits::FormBackend;
use crate::config::BuilderConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const RESPONSES_TABLE: &str = "form_responses";
const SHARES_TABLE: &str = "form_shares";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend returned no share record")]
    EmptyShare,
}

/// Response row to insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResponse {
    pub form_id: String,
    pub responses: Map<String, Value>,
}

/// Share row to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShare {
    pub form_id: String,
}

/// Share row as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub id: String,
    #[serde(default)]
    pub form_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShareRecord {
    /// Public URL of the shared form
    pub fn url(&self, origin: &str) -> String {
        format!("{}/form/{}", origin.trim_end_matches('/'), self.id)
    }
}

/// Client for the REST backend
pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestBackend {
    pub fn new(config: &BuilderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.backend_url().trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn post(&self, table: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.post(self.table_url(table));
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header(header::AUTHORIZATION, format!("Bearer {key}"));
        }
        request
    }
}

/// Turn a non-success status into `BackendError::Status`
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status { status, body })
    }
}

/// First row of a `return=representation` body
fn first_share(body: &str) -> Result<ShareRecord, BackendError> {
    let rows: Vec<ShareRecord> = serde_json::from_str(body)?;
    rows.into_iter().next().ok_or(BackendError::EmptyShare)
}

#[async_trait]
impl FormBackend for RestBackend {
    async fn insert_response(&self, response: NewResponse) -> Result<(), BackendError> {
        tracing::debug!(form_id = %response.form_id, answers = response.responses.len(), "inserting response");
        let result = self
            .post(RESPONSES_TABLE)
            .header("Prefer", "return=minimal")
            .json(&response)
            .send()
            .await?;
        check_status(result).await?;
        Ok(())
    }

    async fn insert_share(&self, share: NewShare) -> Result<ShareRecord, BackendError> {
        tracing::debug!(form_id = %share.form_id, "creating share link");
        let result = self
            .post(SHARES_TABLE)
            .header("Prefer", "return=representation")
            .json(&share)
            .send()
            .await?;
        let body = check_status(result).await?.text().await?;
        first_share(&body)
    }
}
