// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Error taxonomy of the state engine.

use crate::identity::IdentityError;
use crate::swarm::NetworkError;

/// Serialized input is missing a required field or has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field `{0}`")]
    Missing(String),

    #[error("Field `{field}` must be {expected}")]
    WrongShape {
        field: String,
        expected: &'static str,
    },
}

/// A lifecycle transition could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("No article at index {0}")]
    UnknownArticle(usize),
}

/// Any failure surfaced by the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

pub type EngineResult<T> = Result<T, EngineError>;
