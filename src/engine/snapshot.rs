// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Snapshot Serialization
//!
//! A snapshot is the flat, storable form of the blog state: the private key,
//! the storage configuration, and the article and asset lists. It carries no
//! live handles, so it is safe to write to disk as-is.
//!
//! ## Layout
//!
//! ```json
//! {
//!   "beeApi": "http://localhost:1633",
//!   "postageBatchId": "",
//!   "privateKey": "0x…",
//!   "articles": [],
//!   "assets": []
//! }
//! ```
//!
//! [`parse`] is the single coercion boundary for untrusted input. Unknown
//! fields are ignored so older binaries can read newer snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use url::Url;

use super::coerce::{self, Object};
use super::error::ValidationError;
use super::records::{Article, Asset, ProposalStatus};

/// Persisted form of the blog state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub bee_api: String,
    pub postage_batch_id: String,
    pub private_key: String,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Snapshot {
    /// Render as an untyped JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Validate and coerce raw JSON into a [`Snapshot`].
pub fn parse(raw: &Value) -> Result<Snapshot, ValidationError> {
    let root = coerce::as_object(raw, "")?;

    let bee_api = coerce::required_string(root, "", "beeApi")?;
    if Url::parse(&bee_api).is_err() {
        return Err(ValidationError::WrongShape {
            field: "beeApi".to_string(),
            expected: "an absolute URL",
        });
    }

    let articles = coerce::array(root, "", "articles")?
        .iter()
        .enumerate()
        .map(|(i, item)| parse_article(item, &format!("articles[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let assets = coerce::array(root, "", "assets")?
        .iter()
        .enumerate()
        .map(|(i, item)| parse_asset(item, &format!("assets[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Snapshot {
        bee_api,
        postage_batch_id: coerce::emptiable_string(root, "", "postageBatchId")?,
        private_key: coerce::required_string(root, "", "privateKey")?,
        articles,
        assets,
    })
}

/// Validate and coerce one article record.
pub fn parse_article(raw: &Value, path: &str) -> Result<Article, ValidationError> {
    let object = coerce::as_object(raw, path)?;

    let tags = coerce::array(object, path, "tags")?
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let tag_path = format!("{path}.tags[{i}]");
            coerce::string_value(tag, &tag_path)?.ok_or(ValidationError::WrongShape {
                field: tag_path,
                expected: "a string",
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Article {
        title: coerce::required_string(object, path, "title")?,
        preview: coerce::required_string(object, path, "preview")?,
        markdown_reference: coerce::required_string(object, path, "markdownReference")?,
        category: coerce::required_string(object, path, "category")?,
        tags,
        created_at: coerce::required_number(object, path, "createdAt")?,
        author_address: coerce::optional_string(object, path, "authorAddress")?.unwrap_or_default(),
        banner_reference: coerce::optional_string(object, path, "bannerReference")?,
        proposal_id: coerce::optional_string(object, path, "proposalId")?,
        proposal_status: parse_proposal_status(object, path),
        proposal_submitted_at: coerce::optional_number(object, path, "proposalSubmittedAt")?,
    })
}

/// Status reported by governance is never fatal: unknown values become absent.
fn parse_proposal_status(object: &Object, path: &str) -> Option<ProposalStatus> {
    let raw = match object.get("proposalStatus")? {
        Value::Null | Value::Bool(false) => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let status = ProposalStatus::parse_lenient(&raw);
    if status.is_none() {
        warn!(
            field = %coerce::field_path(path, "proposalStatus"),
            value = %raw,
            "Ignoring unrecognized proposal status"
        );
    }
    status
}

/// Validate and coerce one asset record.
pub fn parse_asset(raw: &Value, path: &str) -> Result<Asset, ValidationError> {
    let object = coerce::as_object(raw, path)?;
    Ok(Asset {
        name: coerce::required_string(object, path, "name")?,
        content_type: coerce::required_string(object, path, "contentType")?,
        reference: coerce::required_string(object, path, "reference")?,
    })
}
