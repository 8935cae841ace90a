// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Canonical in-memory blog state.
//!
//! `State` is a value: every transition returns a new `State` and leaves the
//! receiver untouched. The only way in is [`load`] (or
//! [`State::from_snapshot`]), so a `State` is always fully initialized.

use serde_json::Value;
use tracing::{debug, info};

use super::error::EngineResult;
use super::records::{Article, Asset};
use super::snapshot::{self, Snapshot};
use crate::identity::Identity;
use crate::swarm::{BeeClient, StorageConfig, DEFAULT_BEE_API};

/// Operator-supplied overrides for [`create_default`].
///
/// Empty strings count as "not supplied".
#[derive(Debug, Clone, Default)]
pub struct DefaultStateParams {
    pub bee_api: Option<String>,
    pub postage_batch_id: Option<String>,
}

/// The blog: identity, storage handle, articles and assets.
#[derive(Debug, Clone)]
pub struct State {
    identity: Identity,
    storage: BeeClient,
    pub(super) articles: Vec<Article>,
    assets: Vec<Asset>,
}

impl State {
    /// Build live handles from a validated snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> EngineResult<Self> {
        let identity = Identity::from_private_key_hex(&snapshot.private_key)?;
        let storage = BeeClient::new(StorageConfig::new(
            snapshot.bee_api,
            snapshot.postage_batch_id,
        ))?;

        info!(
            address = %identity.address(),
            bee_api = %storage.config().bee_api,
            articles = snapshot.articles.len(),
            assets = snapshot.assets.len(),
            "Loaded blog state"
        );

        Ok(Self {
            identity,
            storage,
            articles: snapshot.articles,
            assets: snapshot.assets,
        })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Handle to the storage network. Clone it to hold it across an await.
    pub fn storage(&self) -> &BeeClient {
        &self.storage
    }

    pub fn storage_config(&self) -> &StorageConfig {
        self.storage.config()
    }

    /// Articles in insertion order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Assets in insertion order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Replace the asset list, keeping everything else.
    pub fn with_assets(&self, assets: Vec<Asset>) -> State {
        State {
            identity: self.identity.clone(),
            storage: self.storage.clone(),
            articles: self.articles.clone(),
            assets,
        }
    }

    /// Same state with a different article list. Lifecycle transitions go through here.
    pub(super) fn with_articles(&self, articles: Vec<Article>) -> State {
        State {
            identity: self.identity.clone(),
            storage: self.storage.clone(),
            articles,
            assets: self.assets.clone(),
        }
    }
}

/// Parse raw JSON and build a live [`State`].
///
/// Fails with a validation error for malformed input and an identity error
/// for unusable key material. No network calls are made.
pub fn load(raw: &Value) -> EngineResult<State> {
    let snapshot = snapshot::parse(raw)?;
    State::from_snapshot(snapshot)
}

/// Serialize a state back into its snapshot.
pub fn save(state: &State) -> Snapshot {
    let config = state.storage_config();
    Snapshot {
        bee_api: config.bee_api.clone(),
        postage_batch_id: config.postage_batch_id.clone(),
        private_key: state.identity.private_key_hex(),
        articles: state.articles.clone(),
        assets: state.assets.clone(),
    }
}

/// Mint a fresh snapshot with a new identity and empty lists.
pub fn create_default(name: &str, params: Option<DefaultStateParams>) -> Snapshot {
    let params = params.unwrap_or_default();
    let bee_api = params
        .bee_api
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_BEE_API.to_string());
    let postage_batch_id = params.postage_batch_id.unwrap_or_default();

    let identity = Identity::generate();
    debug!(blog = name, address = %identity.address(), %bee_api, "Created default blog state");

    Snapshot {
        bee_api,
        postage_batch_id,
        private_key: identity.private_key_hex(),
        articles: Vec::new(),
        assets: Vec::new(),
    }
}
