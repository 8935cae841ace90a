// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{error::ApiError, models::StateView, state::AppState};

#[utoipa::path(
    get,
    path = "/v1/state",
    tag = "Blog",
    responses((status = 200, body = StateView))
)]
pub async fn get_state(State(state): State<AppState>) -> Result<Json<StateView>, ApiError> {
    let session = state.session.read().await;
    Ok(Json(StateView::from(&*session)))
}

/// Forget the article in flight so the editor starts from a blank draft.
#[utoipa::path(
    post,
    path = "/v1/drafts",
    tag = "Blog",
    responses((status = 200, body = StateView))
)]
pub async fn start_new_draft(State(state): State<AppState>) -> Result<Json<StateView>, ApiError> {
    // The current article is session-only, so there is nothing to persist
    let mut session = state.session.write().await;
    session.start_new_draft();
    Ok(Json(StateView::from(&*session)))
}
