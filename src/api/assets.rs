// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    engine::{self, markdown_embed, Asset},
    error::ApiError,
    models::{AssetUploadQuery, AssetUploadResponse},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/v1/assets",
    tag = "Assets",
    responses((status = 200, body = [Asset]))
)]
pub async fn list_assets(State(state): State<AppState>) -> Result<Json<Vec<Asset>>, ApiError> {
    let session = state.session.read().await;
    Ok(Json(session.state().assets().to_vec()))
}

/// Upload an image and register it with the blog.
///
/// The upload happens first; the asset is only recorded once Swarm has
/// returned its reference.
#[utoipa::path(
    post,
    path = "/v1/assets",
    params(AssetUploadQuery),
    request_body(content = Vec<u8>, content_type = "image/png"),
    tag = "Assets",
    responses(
        (status = 201, body = AssetUploadResponse),
        (status = 400, description = "Empty name or body"),
        (status = 502, description = "Bee node rejected the upload")
    )
)]
pub async fn upload_asset(
    State(state): State<AppState>,
    Query(query): Query<AssetUploadQuery>,
    body: Bytes,
) -> Result<(StatusCode, Json<AssetUploadResponse>), ApiError> {
    if query.name.trim().is_empty() {
        return Err(ApiError::bad_request("Asset name must not be empty"));
    }
    if body.is_empty() {
        return Err(ApiError::bad_request("Asset body must not be empty"));
    }

    let bee = state.session.read().await.state().storage().clone();
    let asset = engine::upload(&bee, &query.name, &body).await?;

    state
        .update(|session| {
            session.register_asset(asset.clone());
            Ok::<_, ApiError>(())
        })
        .await?;

    let url = bee.bytes_url(&asset.reference);
    Ok((
        StatusCode::CREATED,
        Json(AssetUploadResponse {
            markdown: markdown_embed(&url),
            url,
            asset,
        }),
    ))
}
