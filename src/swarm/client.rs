// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bee node HTTP client.

use std::time::Duration;

use reqwest::{header, Client, Response};
use url::Url;

use super::types::*;
use super::BlobStore;

/// Per-request timeout for calls into the Bee node.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors that can occur while talking to the storage network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Invalid Bee endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Bee request failed: {0}")]
    Request(String),

    #[error("Bee returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Bee response was invalid: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        NetworkError::Request(e.to_string())
    }
}

/// Configured handle to a Bee node.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BeeClient {
    config: StorageConfig,
    base_url: Url,
    http: Client,
}

impl BeeClient {
    /// Create a client for the given configuration.
    ///
    /// No network traffic happens here.
    pub fn new(config: StorageConfig) -> Result<Self, NetworkError> {
        let mut base_url = Url::parse(&config.bee_api)
            .map_err(|e| NetworkError::InvalidEndpoint(format!("{}: {e}", config.bee_api)))?;

        // Url::join drops the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NetworkError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            base_url,
            http,
        })
    }

    /// The configuration this handle was built from.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Public URL of raw bytes stored under `reference`.
    pub fn bytes_url(&self, reference: &str) -> String {
        format!("{}bytes/{reference}", self.base_url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        self.base_url
            .join(path)
            .map_err(|e| NetworkError::InvalidEndpoint(e.to_string()))
    }

    /// Fetch raw bytes previously written under `reference`.
    pub async fn read_bytes(&self, reference: &Reference) -> Result<Vec<u8>, NetworkError> {
        let url = self.endpoint(&format!("bytes/{reference}"))?;
        let response = check_status(self.http.get(url).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Whether the node answers on its API at all.
    pub async fn is_reachable(&self) -> bool {
        let Ok(url) = self.endpoint("addresses") else {
            return false;
        };
        match self.http.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, bee_api = %self.config.bee_api, "Bee node unreachable");
                false
            }
        }
    }
}

impl BlobStore for BeeClient {
    async fn write_raw_bytes(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<Reference, NetworkError> {
        let url = self.endpoint("bytes")?;

        let mut request = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, content_type)
            .body(bytes.to_vec());
        if self.config.has_postage_batch() {
            request = request.header(POSTAGE_BATCH_HEADER, &self.config.postage_batch_id);
        }

        let response = check_status(request.send().await?).await?;
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| NetworkError::InvalidResponse(e.to_string()))?;

        let reference = Reference::parse(&body.reference).ok_or_else(|| {
            NetworkError::InvalidResponse(format!("malformed reference `{}`", body.reference))
        })?;

        tracing::debug!(
            %reference,
            content_type,
            size = bytes.len(),
            "Wrote raw bytes to Swarm"
        );
        Ok(reference)
    }

    async fn read_all_quota_records(&self) -> Result<Vec<PostageBatch>, NetworkError> {
        let url = self.endpoint("stamps")?;
        let response = check_status(self.http.get(url).send().await?).await?;
        let body: StampsResponse = response
            .json()
            .await
            .map_err(|e| NetworkError::InvalidResponse(e.to_string()))?;
        Ok(body.stamps)
    }
}

/// Turn a non-2xx response into `NetworkError::Status`.
async fn check_status(response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(NetworkError::Status {
        status: status.as_u16(),
        message,
    })
}
