// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::swarm::{BeeClient, BlobStore};

/// Health check response with individual component status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// Overall health status ("ok" or "degraded").
    pub status: String,
    /// Individual health checks and their results.
    pub checks: HealthChecks,
}

/// Individual health check results.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Whether the service process is running.
    pub service: String,
    /// Data directory availability.
    pub data_dir: String,
    /// Whether the configured Bee node answers.
    pub bee: String,
    /// Postage stamp availability. Only present when the node is reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postage: Option<String>,
}

/// Simple health check response for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

async fn check_postage(bee: &BeeClient) -> String {
    match bee.read_all_quota_records().await {
        Ok(batches) if batches.iter().any(|b| b.usable) => "ok".to_string(),
        Ok(_) => "exhausted".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read postage batches");
            "unavailable".to_string()
        }
    }
}

/// Health check endpoint handler.
///
/// Returns 200 if the data directory exists and the Bee node is reachable
/// with at least one usable postage batch, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = ReadyResponse),
        (status = 503, description = "Service is unhealthy", body = ReadyResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let data_ok = state.snapshots.paths().root().exists();
    // Never hold the session lock across network calls
    let bee = state.session.read().await.state().storage().clone();

    let bee_ok = bee.is_reachable().await;
    let postage = if bee_ok {
        Some(check_postage(&bee).await)
    } else {
        None
    };
    let postage_ok = postage.as_deref() == Some("ok");
    let all_ok = data_ok && bee_ok && postage_ok;

    let response = ReadyResponse {
        status: if all_ok { "ok" } else { "degraded" }.to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            data_dir: if data_ok { "ok" } else { "missing" }.to_string(),
            bee: if bee_ok { "ok" } else { "unreachable" }.to_string(),
            postage,
        },
    };

    let status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Liveness probe handler.
///
/// Always returns 200 if the process is running.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
