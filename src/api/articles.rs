// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    engine::{self, ArticleIndex},
    error::ApiError,
    models::{
        article_views, ArticleView, RecordStatusRequest, SubmitProposalRequest, UploadResponse,
    },
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/v1/articles",
    tag = "Articles",
    responses((status = 200, body = [ArticleView]))
)]
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleView>>, ApiError> {
    let session = state.session.read().await;
    Ok(Json(article_views(session.state().articles())))
}

/// Record a proposal already created on the DAO as a pending article.
#[utoipa::path(
    post,
    path = "/v1/articles",
    request_body = SubmitProposalRequest,
    tag = "Articles",
    responses(
        (status = 201, body = ArticleView),
        (status = 422, description = "Missing title, reference, proposal or preview")
    )
)]
pub async fn submit_article(
    State(state): State<AppState>,
    Json(request): Json<SubmitProposalRequest>,
) -> Result<(StatusCode, Json<ArticleView>), ApiError> {
    let submission = request.into_submission().map_err(ApiError::unprocessable)?;

    let view = state
        .update(|session| {
            let (index, article) = session.submit_proposal(submission);
            Ok::<_, ApiError>(ArticleView::new(index, article))
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

#[utoipa::path(
    put,
    path = "/v1/articles/{index}/status",
    params(
        ("index" = usize, Path, description = "Position of the article in the list")
    ),
    request_body = RecordStatusRequest,
    tag = "Articles",
    responses(
        (status = 200, body = ArticleView),
        (status = 404, description = "No article at that index")
    )
)]
pub async fn record_status(
    Path(index): Path<usize>,
    State(state): State<AppState>,
    Json(request): Json<RecordStatusRequest>,
) -> Result<Json<ArticleView>, ApiError> {
    let index = ArticleIndex(index);
    let view = state
        .update(|session| {
            let article = session.record_status(index, request.status)?;
            Ok::<_, ApiError>(ArticleView::new(index, article))
        })
        .await?;
    Ok(Json(view))
}

/// Upload an article body. The returned reference goes into the proposal.
#[utoipa::path(
    post,
    path = "/v1/articles/markdown",
    request_body(content = String, content_type = "text/markdown"),
    tag = "Articles",
    responses(
        (status = 201, body = UploadResponse),
        (status = 502, description = "Bee node rejected the upload")
    )
)]
pub async fn upload_markdown(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::bad_request("Article body must not be empty"));
    }

    let bee = state.session.read().await.state().storage().clone();
    let reference = engine::upload_markdown(&bee, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: bee.bytes_url(reference.as_str()),
            reference: reference.into_string(),
        }),
    ))
}
