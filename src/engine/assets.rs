// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Uploading binary assets and article bodies to Swarm.

use tracing::info;

use super::records::Asset;
use super::state::State;
use crate::swarm::{BlobStore, NetworkError, Reference};

/// MIME type assets are tagged with.
pub const ASSET_CONTENT_TYPE: &str = "image/png";

/// MIME type article bodies are tagged with.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown";

/// Write `bytes` to the store and describe the result as an [`Asset`].
///
/// A failed write is returned untouched; nothing is retried.
pub async fn upload<S: BlobStore>(
    store: &S,
    display_path: &str,
    bytes: &[u8],
) -> Result<Asset, NetworkError> {
    let reference = store.write_raw_bytes(bytes, ASSET_CONTENT_TYPE).await?;

    info!(
        name = display_path,
        %reference,
        size = bytes.len(),
        "Uploaded asset"
    );

    Ok(Asset {
        name: display_path.to_string(),
        content_type: ASSET_CONTENT_TYPE.to_string(),
        reference: reference.into_string(),
    })
}

/// Write an article's Markdown body and return its content address.
pub async fn upload_markdown<S: BlobStore>(
    store: &S,
    markdown: &str,
) -> Result<Reference, NetworkError> {
    let reference = store
        .write_raw_bytes(markdown.as_bytes(), MARKDOWN_CONTENT_TYPE)
        .await?;
    info!(%reference, size = markdown.len(), "Uploaded article body");
    Ok(reference)
}

/// Markdown snippet embedding an uploaded image.
pub fn markdown_embed(bytes_url: &str) -> String {
    format!("![img alt here]({bytes_url})")
}

impl State {
    /// Same state with `asset` appended to the asset list.
    pub fn with_asset(&self, asset: Asset) -> State {
        let mut assets = self.assets().to_vec();
        assets.push(asset);
        self.with_assets(assets)
    }
}
