// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Test doubles for the storage network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sha2::{Digest, Sha256};

use super::{BlobStore, NetworkError, PostageBatch, Reference, POSTAGE_BATCH_HEADER};

/// Content address used by the doubles: SHA-256 of the bytes.
pub fn content_address(bytes: &[u8]) -> Reference {
    let digest = Sha256::digest(bytes);
    Reference::parse(&alloy::hex::encode(digest)).expect("sha256 digest is 64 hex chars")
}

/// A write observed by a test double.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub reference: Reference,
    pub content_type: String,
    pub postage_batch_id: Option<String>,
    pub bytes: Vec<u8>,
}

/// In-memory blob store.
#[derive(Default)]
pub struct MemoryBlobStore {
    uploads: Mutex<Vec<RecordedUpload>>,
    failing: bool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, like an unreachable node.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl BlobStore for MemoryBlobStore {
    async fn write_raw_bytes(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<Reference, NetworkError> {
        if self.failing {
            return Err(NetworkError::Request("connection refused".into()));
        }
        let reference = content_address(bytes);
        self.uploads.lock().unwrap().push(RecordedUpload {
            reference: reference.clone(),
            content_type: content_type.to_string(),
            postage_batch_id: None,
            bytes: bytes.to_vec(),
        });
        Ok(reference)
    }

    async fn read_all_quota_records(&self) -> Result<Vec<PostageBatch>, NetworkError> {
        if self.failing {
            return Err(NetworkError::Request("connection refused".into()));
        }
        Ok(Vec::new())
    }
}

/// Handle to a fake Bee node served on an ephemeral local port.
pub struct FakeBee {
    pub url: String,
    uploads: Arc<Mutex<Vec<RecordedUpload>>>,
}

impl FakeBee {
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

type Uploads = Arc<Mutex<Vec<RecordedUpload>>>;

/// Start a fake Bee node exposing `/bytes`, `/stamps` and `/addresses`.
pub async fn spawn_fake_bee() -> FakeBee {
    let uploads: Uploads = Arc::default();

    let app = Router::new()
        .route("/bytes", post(write_bytes))
        .route("/bytes/{reference}", get(read_bytes))
        .route("/stamps", get(stamps))
        .route("/addresses", get(|| async { Json(json!({ "overlay": "00" })) }))
        .with_state(uploads.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeBee {
        url: format!("http://{addr}"),
        uploads,
    }
}

async fn write_bytes(
    State(uploads): State<Uploads>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<serde_json::Value> {
    let reference = content_address(&body);
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    uploads.lock().unwrap().push(RecordedUpload {
        reference: reference.clone(),
        content_type: header_value("content-type").unwrap_or_default(),
        postage_batch_id: header_value(POSTAGE_BATCH_HEADER),
        bytes: body.to_vec(),
    });
    Json(json!({ "reference": reference }))
}

async fn read_bytes(
    State(uploads): State<Uploads>,
    Path(reference): Path<String>,
) -> Result<Vec<u8>, StatusCode> {
    let by_reference: HashMap<String, Vec<u8>> = uploads
        .lock()
        .unwrap()
        .iter()
        .map(|u| (u.reference.as_str().to_string(), u.bytes.clone()))
        .collect();
    by_reference.get(&reference).cloned().ok_or(StatusCode::NOT_FOUND)
}

async fn stamps() -> Json<serde_json::Value> {
    Json(json!({
        "stamps": [{
            "batchID": "f".repeat(64),
            "usable": true,
            "utilization": 0,
            "depth": 20,
            "amount": "100000000",
            "bucketDepth": 16,
            "immutableFlag": false,
            "batchTTL": 86400
        }]
    }))
}
