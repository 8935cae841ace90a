// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Etherjot Server - DAO Blog State Engine
//!
//! This crate keeps a blog's articles and image assets as content-addressed
//! objects on Swarm, signs as the blog operator with a secp256k1 key, and
//! tracks every article through DAO governance approval.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `engine` - Blog state, proposal lifecycle and asset uploads
//! - `identity` - Operator key pair and message signing
//! - `storage` - Local snapshot persistence
//! - `swarm` - Bee node client

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod models;
pub mod state;
pub mod storage;
pub mod swarm;
