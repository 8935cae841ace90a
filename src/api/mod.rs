// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    engine::{Article, ArticleStage, Asset, ProposalStatus},
    models::{
        ArticleView, AssetUploadResponse, RecordStatusRequest, StateView, SubmitProposalRequest,
        UploadResponse,
    },
    state::AppState,
};

pub mod articles;
pub mod assets;
pub mod blog;
pub mod health;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/state", get(blog::get_state))
        .route("/drafts", post(blog::start_new_draft))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::submit_article),
        )
        .route("/articles/markdown", post(articles::upload_markdown))
        .route("/articles/{index}/status", put(articles::record_status))
        .route(
            "/assets",
            get(assets::list_assets).post(assets::upload_asset),
        )
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        blog::get_state,
        blog::start_new_draft,
        articles::list_articles,
        articles::submit_article,
        articles::record_status,
        articles::upload_markdown,
        assets::list_assets,
        assets::upload_asset
    ),
    components(
        schemas(
            Article,
            ArticleStage,
            ArticleView,
            Asset,
            AssetUploadResponse,
            ProposalStatus,
            RecordStatusRequest,
            StateView,
            SubmitProposalRequest,
            UploadResponse,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Health", description = "Liveness and Bee node readiness"),
        (name = "Blog", description = "Blog state and drafting session"),
        (name = "Articles", description = "Article proposals and DAO status"),
        (name = "Assets", description = "Image uploads to Swarm")
    )
)]
struct ApiDoc;
