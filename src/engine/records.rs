// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Article and asset records as they live inside the blog state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Governance status of an article's proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Submitted, awaiting the DAO vote
    Pending,
    /// Accepted by the DAO; the article counts as published
    Approved,
    /// Turned down by the DAO; kept for history
    Rejected,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Lenient parse for status reported by the governance side.
    ///
    /// Case-insensitive; anything outside the three known values is `None`.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Where an article sits in the governance lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStage {
    /// Stored, but no proposal status recorded
    Unproposed,
    Pending,
    Approved,
    Rejected,
}

/// Binary asset uploaded to Swarm (images embedded in articles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Display label, usually the original file path
    pub name: String,
    /// MIME type the bytes were tagged with
    pub content_type: String,
    /// Content address on Swarm
    pub reference: String,
}

/// Article metadata. The body itself lives on Swarm under `markdown_reference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    /// Short excerpt shown in listings
    pub preview: String,
    /// Content address of the raw Markdown body
    pub markdown_reference: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
    /// Free-form author address; not verified here
    #[serde(default)]
    pub author_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_status: Option<ProposalStatus>,
    /// Submission time of the proposal in epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_submitted_at: Option<i64>,
}

impl Article {
    pub fn stage(&self) -> ArticleStage {
        match self.proposal_status {
            None => ArticleStage::Unproposed,
            Some(ProposalStatus::Pending) => ArticleStage::Pending,
            Some(ProposalStatus::Approved) => ArticleStage::Approved,
            Some(ProposalStatus::Rejected) => ArticleStage::Rejected,
        }
    }

    /// Approved articles are the ones readers get to see.
    pub fn is_published(&self) -> bool {
        self.stage() == ArticleStage::Approved
    }
}
