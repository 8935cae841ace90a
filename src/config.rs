// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Directory holding `state.json` | `./data` |
//! | `HOST` | Server bind address | `127.0.0.1` |
//! | `PORT` | Server bind port | `8080` |
//! | `BEE_API` | Bee endpoint for a freshly created blog | `http://localhost:1633` |
//! | `POSTAGE_BATCH_ID` | Postage batch for a freshly created blog | empty |
//! | `BLOG_NAME` | Name of a freshly created blog | `DAO Blog` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//!
//! `BEE_API` and `POSTAGE_BATCH_ID` only matter the first time the service
//! runs; afterwards the values stored in the snapshot win.

use std::env;

use crate::engine::DefaultStateParams;
use crate::storage::paths::DATA_ROOT;

/// Environment variable name for the data directory path.
pub const DATA_DIR_ENV: &str = "DATA_DIR";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const BEE_API_ENV: &str = "BEE_API";
pub const POSTAGE_BATCH_ID_ENV: &str = "POSTAGE_BATCH_ID";
pub const BLOG_NAME_ENV: &str = "BLOG_NAME";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BLOG_NAME: &str = "DAO Blog";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: String,
    pub host: String,
    pub port: u16,
    pub blog_name: String,
    pub defaults: DefaultStateParams,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: non_empty(DATA_DIR_ENV).unwrap_or_else(|| DATA_ROOT.to_string()),
            host: non_empty(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: non_empty(PORT_ENV)
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            blog_name: non_empty(BLOG_NAME_ENV).unwrap_or_else(|| DEFAULT_BLOG_NAME.to_string()),
            defaults: DefaultStateParams {
                bee_api: non_empty(BEE_API_ENV),
                postage_batch_id: lookup(POSTAGE_BATCH_ID_ENV),
            },
            log_format: LogFormat::parse(lookup(LOG_FORMAT_ENV).as_deref()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
