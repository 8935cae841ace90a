// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Swarm types and constants.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bee API endpoint used when no configuration is supplied.
pub const DEFAULT_BEE_API: &str = "http://localhost:1633";

/// Header carrying the postage batch that pays for a write.
pub const POSTAGE_BATCH_HEADER: &str = "swarm-postage-batch-id";

/// Connection settings for a Bee node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Bee HTTP API endpoint
    pub bee_api: String,
    /// Postage batch paying for uploads. Empty means no usable batch yet.
    pub postage_batch_id: String,
}

impl StorageConfig {
    pub fn new(bee_api: impl Into<String>, postage_batch_id: impl Into<String>) -> Self {
        Self {
            bee_api: bee_api.into(),
            postage_batch_id: postage_batch_id.into(),
        }
    }

    /// Whether a postage batch identifier has been configured at all.
    pub fn has_postage_batch(&self) -> bool {
        !self.postage_batch_id.is_empty()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BEE_API, "")
    }
}

/// Content address of an object stored on Swarm.
///
/// Always lowercase hex: 64 characters for plain references, 128 for
/// encrypted ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Validate and normalize a reference returned by a node.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let well_formed = matches!(trimmed.len(), 64 | 128)
            && trimmed.chars().all(|c| c.is_ascii_hexdigit());
        well_formed.then(|| Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Postage batch as reported by `GET /stamps`.
///
/// Only the fields the service looks at are modelled; the node reports more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostageBatch {
    #[serde(rename = "batchID")]
    pub batch_id: String,
    #[serde(default)]
    pub usable: bool,
    #[serde(default)]
    pub utilization: u64,
    #[serde(default)]
    pub depth: u8,
    #[serde(default)]
    pub amount: String,
    #[serde(rename = "batchTTL", default)]
    pub batch_ttl: i64,
}

/// `GET /stamps` response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StampsResponse {
    #[serde(default)]
    pub stamps: Vec<PostageBatch>,
}

/// `POST /bytes` response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UploadResponse {
    pub reference: String,
}
