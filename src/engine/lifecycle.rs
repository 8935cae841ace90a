// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Article Proposal Lifecycle
//!
//! ```text
//! draft ──submit_proposal──▶ pending ──record_status──▶ approved | rejected
//! ```
//!
//! A draft is anything not yet in the state's article list. Submitting
//! appends a new article with status `pending`. After that the engine only
//! records whatever status the DAO reports; any status may follow any other.
//! Articles are never removed, so rejected proposals stay as history and a
//! resubmission is a new, unrelated article.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::error::LifecycleError;
use super::records::{Article, ProposalStatus};
use super::state::State;

/// Maximum number of characters kept by [`make_preview`].
pub const PREVIEW_LENGTH: usize = 150;

/// Position of an article in the state's article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ArticleIndex(pub usize);

/// Everything needed to turn a draft into a pending article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSubmission {
    pub title: String,
    pub markdown_reference: String,
    pub preview: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author_address: String,
    pub banner_reference: Option<String>,
    pub proposal_id: String,
}

impl State {
    /// Append a new pending article for a freshly created proposal.
    ///
    /// Never deduplicates: submitting twice yields two articles.
    pub fn submit_proposal(&self, submission: ProposalSubmission) -> (State, ArticleIndex) {
        let now = Utc::now().timestamp_millis();
        let article = Article {
            title: submission.title,
            preview: submission.preview,
            markdown_reference: submission.markdown_reference,
            category: submission.category,
            tags: submission.tags,
            created_at: now,
            author_address: submission.author_address,
            banner_reference: submission.banner_reference.filter(|r| !r.is_empty()),
            proposal_id: Some(submission.proposal_id),
            proposal_status: Some(ProposalStatus::Pending),
            proposal_submitted_at: Some(now),
        };

        let index = ArticleIndex(self.articles.len());
        info!(
            index = index.0,
            proposal_id = ?article.proposal_id,
            title = %article.title,
            "Article submitted for DAO approval"
        );

        let mut articles = self.articles.clone();
        articles.push(article);
        (self.with_articles(articles), index)
    }

    /// Overwrite the proposal status of one article.
    pub fn record_status(
        &self,
        index: ArticleIndex,
        status: ProposalStatus,
    ) -> Result<State, LifecycleError> {
        let mut articles = self.articles.clone();
        let article = articles
            .get_mut(index.0)
            .ok_or(LifecycleError::UnknownArticle(index.0))?;

        info!(
            index = index.0,
            proposal_id = ?article.proposal_id,
            from = ?article.proposal_status,
            to = status.as_str(),
            "Recorded proposal status"
        );
        article.proposal_status = Some(status);

        Ok(self.with_articles(articles))
    }

    pub fn article(&self, index: ArticleIndex) -> Option<&Article> {
        self.articles.get(index.0)
    }

    /// Approved articles, in list order.
    pub fn published_articles(&self) -> impl Iterator<Item = (ArticleIndex, &Article)> {
        self.articles
            .iter()
            .enumerate()
            .filter(|(_, article)| article.is_published())
            .map(|(i, article)| (ArticleIndex(i), article))
    }
}

/// Short excerpt of a Markdown body for listings.
pub fn make_preview(markdown: &str) -> String {
    let mut chars = markdown.chars();
    let head: String = chars.by_ref().take(PREVIEW_LENGTH).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::records::ArticleStage;
    use crate::engine::state::{load, save};
    use serde_json::json;

    fn empty_state() -> State {
        load(&json!({
            "beeApi": "http://localhost:1633",
            "postageBatchId": "",
            "privateKey": "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            "articles": [],
            "assets": []
        }))
        .unwrap()
    }

    fn hello_submission() -> ProposalSubmission {
        ProposalSubmission {
            title: "Hello".into(),
            markdown_reference: "ref123".into(),
            preview: "prev".into(),
            category: "Gen".into(),
            tags: vec![],
            author_address: "0xauthor".into(),
            banner_reference: None,
            proposal_id: "prop-1".into(),
        }
    }

    #[test]
    fn submit_then_approve_scenario() {
        let state = empty_state();
        let (state, index) = state.submit_proposal(hello_submission());

        let saved = save(&state);
        assert_eq!(saved.articles.len(), 1);
        let pending = saved.articles[0].clone();
        assert_eq!(pending.title, "Hello");
        assert_eq!(pending.markdown_reference, "ref123");
        assert_eq!(pending.preview, "prev");
        assert_eq!(pending.category, "Gen");
        assert!(pending.tags.is_empty());
        assert_eq!(pending.author_address, "0xauthor");
        assert_eq!(pending.banner_reference, None);
        assert_eq!(pending.proposal_id.as_deref(), Some("prop-1"));
        assert_eq!(pending.proposal_status, Some(ProposalStatus::Pending));
        assert!(pending.proposal_submitted_at.is_some());
        assert!(pending.created_at > 0);

        let state = state.record_status(index, ProposalStatus::Approved).unwrap();
        let saved = save(&state);
        assert_eq!(saved.articles.len(), 1);

        let approved = &saved.articles[0];
        assert_eq!(approved.proposal_status, Some(ProposalStatus::Approved));
        let mut expected = pending;
        expected.proposal_status = Some(ProposalStatus::Approved);
        assert_eq!(approved, &expected);
    }

    #[test]
    fn article_count_grows_by_one_and_never_shrinks() {
        let state = empty_state();
        let (mut state, index) = state.submit_proposal(hello_submission());
        assert_eq!(state.articles().len(), 1);

        for status in [
            ProposalStatus::Rejected,
            ProposalStatus::Pending,
            ProposalStatus::Approved,
            ProposalStatus::Rejected,
        ] {
            state = state.record_status(index, status).unwrap();
            assert_eq!(state.articles().len(), 1);
        }
        assert_eq!(state.article(index).unwrap().stage(), ArticleStage::Rejected);
    }

    #[test]
    fn duplicate_submissions_are_distinct_articles() {
        let state = empty_state();
        let (state, first) = state.submit_proposal(hello_submission());
        let (state, second) = state.submit_proposal(hello_submission());

        assert_ne!(first, second);
        assert_eq!(state.articles().len(), 2);

        // Only the targeted record changes even though titles collide
        let state = state.record_status(second, ProposalStatus::Approved).unwrap();
        assert_eq!(state.article(first).unwrap().stage(), ArticleStage::Pending);
        assert_eq!(state.article(second).unwrap().stage(), ArticleStage::Approved);
    }

    #[test]
    fn record_status_on_unknown_article_leaves_state_alone() {
        let state = empty_state();
        let err = state
            .record_status(ArticleIndex(3), ProposalStatus::Approved)
            .unwrap_err();
        assert_eq!(err, LifecycleError::UnknownArticle(3));
        assert!(state.articles().is_empty());
    }

    #[test]
    fn transitions_do_not_mutate_the_receiver() {
        let before = empty_state();
        let (after, index) = before.submit_proposal(hello_submission());
        assert!(before.articles().is_empty());

        let approved = after.record_status(index, ProposalStatus::Approved).unwrap();
        assert_eq!(after.article(index).unwrap().stage(), ArticleStage::Pending);
        assert_eq!(approved.published_articles().count(), 1);
        assert_eq!(after.published_articles().count(), 0);
    }

    #[test]
    fn rejected_article_can_be_resubmitted_as_new_record() {
        let (state, first) = empty_state().submit_proposal(hello_submission());
        let state = state.record_status(first, ProposalStatus::Rejected).unwrap();

        let mut retry = hello_submission();
        retry.markdown_reference = "ref456".into();
        retry.proposal_id = "prop-2".into();
        let (state, second) = state.submit_proposal(retry);

        assert_eq!(state.articles().len(), 2);
        assert_eq!(state.article(first).unwrap().stage(), ArticleStage::Rejected);
        assert_eq!(state.article(second).unwrap().stage(), ArticleStage::Pending);
        assert_eq!(state.article(second).unwrap().markdown_reference, "ref456");
    }

    #[test]
    fn preview_truncates_long_bodies() {
        assert_eq!(make_preview("short"), "short");

        let exact = "a".repeat(PREVIEW_LENGTH);
        assert_eq!(make_preview(&exact), exact);

        let long = "é".repeat(PREVIEW_LENGTH + 10);
        let preview = make_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_LENGTH + 3);
    }
}
