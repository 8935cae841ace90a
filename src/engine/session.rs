// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The single mutable slot holding the current blog state.
//!
//! Every operation computes a new [`State`] through a pure transition and
//! then swaps it in. The session also tracks which article the author is
//! looking at, so the next submission knows whether to start fresh.

use super::error::LifecycleError;
use super::lifecycle::{ArticleIndex, ProposalSubmission};
use super::records::{Article, ArticleStage, Asset, ProposalStatus};
use super::state::State;

#[derive(Debug, Clone)]
pub struct Session {
    state: State,
    current_article: Option<ArticleIndex>,
}

impl Session {
    pub fn new(state: State) -> Self {
        Self {
            state,
            current_article: None,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Swap in a whole new state (e.g. after reloading from disk).
    pub fn replace_state(&mut self, state: State) {
        self.state = state;
        self.current_article = None;
    }

    pub fn current_article(&self) -> Option<ArticleIndex> {
        self.current_article
    }

    /// Whether the editor should offer a fresh draft: nothing is in flight,
    /// or the article in flight was turned down.
    pub fn accepts_new_draft(&self) -> bool {
        match self.current_article.and_then(|i| self.state.article(i)) {
            None => true,
            Some(article) => article.stage() == ArticleStage::Rejected,
        }
    }

    pub fn submit_proposal(&mut self, submission: ProposalSubmission) -> (ArticleIndex, &Article) {
        let (next, index) = self.state.submit_proposal(submission);
        self.state = next;
        self.current_article = Some(index);
        (index, &self.state.articles()[index.0])
    }

    pub fn record_status(
        &mut self,
        index: ArticleIndex,
        status: ProposalStatus,
    ) -> Result<&Article, LifecycleError> {
        self.state = self.state.record_status(index, status)?;
        Ok(&self.state.articles()[index.0])
    }

    /// Forget the current article; persisted articles are untouched.
    pub fn start_new_draft(&mut self) {
        self.current_article = None;
    }

    pub fn register_asset(&mut self, asset: Asset) {
        self.state = self.state.with_asset(asset);
    }
}
