// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blog state engine.
//!
//! This module provides functionality for:
//! - Coercing untrusted snapshots into typed state
//! - Loading, saving and minting blog state
//! - Tracking articles through DAO proposal approval
//! - Uploading assets and article bodies to Swarm

pub mod assets;
pub(crate) mod coerce;
pub mod error;
pub mod lifecycle;
pub mod records;
pub mod session;
pub mod snapshot;
pub mod state;

pub use assets::{
    markdown_embed, upload, upload_markdown, ASSET_CONTENT_TYPE, MARKDOWN_CONTENT_TYPE,
};
pub use error::{EngineError, EngineResult, LifecycleError, ValidationError};
pub use lifecycle::{make_preview, ArticleIndex, ProposalSubmission};
pub use records::{Article, ArticleStage, Asset, ProposalStatus};
pub use session::Session;
pub use snapshot::Snapshot;
pub use state::{create_default, load, save, DefaultStateParams, State};
