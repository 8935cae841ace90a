// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize` or `Deserialize` and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **State**: read-only view of the blog (never includes the private key)
//! - **Articles**: proposal submission and status recording
//! - **Assets**: image uploads

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::engine::{
    make_preview, Article, ArticleIndex, ArticleStage, Asset, ProposalStatus,
    ProposalSubmission, Session,
};

/// Category used when a submission names none.
pub const DEFAULT_CATEGORY: &str = "General";

/// Author used when a submission names none.
pub const ANONYMOUS_AUTHOR: &str = "anonymous";

/// Article together with its position and lifecycle stage.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    /// Position in the article list; use it to address the article later
    pub index: usize,
    pub stage: ArticleStage,
    #[serde(flatten)]
    pub article: Article,
}

impl ArticleView {
    pub fn new(index: ArticleIndex, article: &Article) -> Self {
        Self {
            index: index.0,
            stage: article.stage(),
            article: article.clone(),
        }
    }
}

/// Public view of the blog state.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    /// Operator address derived from the private key
    pub address: String,
    pub bee_api: String,
    pub postage_batch_id: String,
    pub articles: Vec<ArticleView>,
    pub assets: Vec<Asset>,
    /// Article the author is currently following, if any
    pub current_article: Option<usize>,
    /// Whether the editor should offer a fresh draft
    pub accepts_new_draft: bool,
}

impl From<&Session> for StateView {
    fn from(session: &Session) -> Self {
        let state = session.state();
        let config = state.storage_config();
        Self {
            address: state.identity().address(),
            bee_api: config.bee_api.clone(),
            postage_batch_id: config.postage_batch_id.clone(),
            articles: article_views(state.articles()),
            assets: state.assets().to_vec(),
            current_article: session.current_article().map(|i| i.0),
            accepts_new_draft: session.accepts_new_draft(),
        }
    }
}

pub fn article_views(articles: &[Article]) -> Vec<ArticleView> {
    articles
        .iter()
        .enumerate()
        .map(|(i, article)| ArticleView::new(ArticleIndex(i), article))
        .collect()
}

/// Request to record a newly created DAO proposal as a pending article.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProposalRequest {
    pub title: String,
    /// Swarm reference of the uploaded Markdown body
    pub markdown_reference: String,
    /// Identifier of the proposal created on the DAO contract
    pub proposal_id: String,
    /// Explicit preview; derived from `content` when omitted
    #[serde(default)]
    pub preview: Option<String>,
    /// Markdown body, only used to derive the preview
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_address: Option<String>,
    #[serde(default)]
    pub banner_reference: Option<String>,
}

impl SubmitProposalRequest {
    /// Fill in defaults and check the fields the engine relies on.
    pub fn into_submission(self) -> Result<ProposalSubmission, String> {
        let required = [
            ("title", &self.title),
            ("markdownReference", &self.markdown_reference),
            ("proposalId", &self.proposal_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("`{field}` must not be empty"));
            }
        }

        let preview = match (self.preview, self.content) {
            (Some(preview), _) if !preview.is_empty() => preview,
            (_, Some(content)) if !content.is_empty() => make_preview(&content),
            _ => return Err("either `preview` or `content` is required".to_string()),
        };

        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Ok(ProposalSubmission {
            title: self.title,
            markdown_reference: self.markdown_reference,
            preview,
            category: non_empty(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tags: self.tags,
            author_address: non_empty(self.author_address)
                .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
            banner_reference: non_empty(self.banner_reference),
            proposal_id: self.proposal_id,
        })
    }
}

/// Request to record the status reported by DAO governance.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecordStatusRequest {
    pub status: ProposalStatus,
}

/// Result of uploading raw content to Swarm.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub reference: String,
    /// URL the content can be fetched from through the configured Bee node
    pub url: String,
}

/// Query for asset uploads.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AssetUploadQuery {
    /// Display name for the asset, usually its original path
    pub name: String,
}

/// Result of an asset upload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetUploadResponse {
    pub asset: Asset,
    pub url: String,
    /// Markdown snippet embedding the image
    pub markdown: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SubmitProposalRequest {
        SubmitProposalRequest {
            title: "Hello".into(),
            markdown_reference: "ref".into(),
            proposal_id: "prop-1".into(),
            preview: None,
            content: Some("# Hello\n\nBody".into()),
            category: None,
            tags: vec![],
            author_address: None,
            banner_reference: Some(String::new()),
        }
    }

    #[test]
    fn submission_defaults() {
        let submission = request().into_submission().unwrap();
        assert_eq!(submission.preview, "# Hello\n\nBody");
        assert_eq!(submission.category, DEFAULT_CATEGORY);
        assert_eq!(submission.author_address, ANONYMOUS_AUTHOR);
        assert_eq!(submission.banner_reference, None);
    }

    #[test]
    fn explicit_preview_wins_over_content() {
        let mut req = request();
        req.preview = Some("teaser".into());
        assert_eq!(req.into_submission().unwrap().preview, "teaser");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let mut req = request();
        req.proposal_id = " ".into();
        assert!(req.into_submission().unwrap_err().contains("proposalId"));

        let mut req = request();
        req.content = None;
        assert!(req.into_submission().is_err());
    }

    #[test]
    fn article_view_flattens_article() {
        let article = Article {
            title: "T".into(),
            preview: "P".into(),
            markdown_reference: "R".into(),
            category: "C".into(),
            tags: vec![],
            created_at: 1,
            author_address: String::new(),
            banner_reference: None,
            proposal_id: Some("p".into()),
            proposal_status: Some(ProposalStatus::Pending),
            proposal_submitted_at: Some(1),
        };
        let value = serde_json::to_value(ArticleView::new(ArticleIndex(2), &article)).unwrap();
        assert_eq!(value["index"], 2);
        assert_eq!(value["stage"], "pending");
        assert_eq!(value["title"], "T");
        assert_eq!(value["proposalStatus"], "pending");
    }
}
