// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Snapshot Storage
//!
//! Local persistence for the blog snapshot.
//!
//! ## Storage Layout
//!
//! ```text
//! {DATA_DIR}/
//!   state.json      # Blog snapshot (private key, Bee config, articles, assets)
//! ```
//!
//! ## Important Notes
//!
//! - `state.json` contains the operator's private key in plain hex; keep the
//!   data directory private
//! - Article bodies and assets are NOT stored here, only their Swarm references

pub mod paths;
pub mod snapshot_file;

pub use paths::StoragePaths;
pub use snapshot_file::{SnapshotFile, StorageError, StorageResult};
