// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Swarm storage network integration.
//!
//! This module provides:
//! - Storage configuration (Bee endpoint and postage batch)
//! - The `BlobStore` contract used by the engine
//! - An HTTP client for a Bee node implementing that contract

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;

pub use client::{BeeClient, NetworkError};
pub use types::*;

/// Content-addressed blob store the engine writes into.
///
/// Identical bytes always map to the identical reference, so writes are safe
/// to repeat. Implementations never retry on their own.
pub trait BlobStore {
    /// Write raw bytes tagged with a MIME type and return their content address.
    fn write_raw_bytes(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> impl Future<Output = Result<Reference, NetworkError>> + Send;

    /// List every postage batch known to the node.
    fn read_all_quota_records(
        &self,
    ) -> impl Future<Output = Result<Vec<PostageBatch>, NetworkError>> + Send;
}
