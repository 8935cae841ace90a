// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use etherjot_server::{
    api::router,
    config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER},
    state::AppState,
    storage::{SnapshotFile, StoragePaths},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();
    init_tracing(config.log_format);

    let snapshots = SnapshotFile::new(StoragePaths::new(&config.data_dir));
    let state = match AppState::bootstrap(snapshots, &config.blog_name, config.defaults.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, data_dir = %config.data_dir, "Failed to load blog state");
            std::process::exit(1);
        }
    };

    {
        let session = state.session.read().await;
        let blog = session.state();
        info!(
            blog = %config.blog_name,
            address = %blog.identity().address(),
            bee_api = %blog.storage_config().bee_api,
            postage = blog.storage_config().has_postage_batch(),
            "Blog state ready"
        );
    }

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    info!(%addr, "Etherjot server listening (docs at /docs)");

    if let Err(e) = axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
    {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
