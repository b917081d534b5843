// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response panel state

use crate::error::{Error, FailureKind};

/// Why a submission ended without a rendered response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        Self::new(err.failure_kind(), err.to_string())
    }
}

/// What the response panel shows
///
/// `Idle` until the first submission, then `Loading` while it runs and
/// finally `Rendered` or `Errored`. Any later submission goes back to
/// `Loading`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResponseState {
    #[default]
    Idle,
    Loading,
    Rendered(String),
    Errored(Failure),
}

impl ResponseState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResponseState::Loading)
    }

    /// Highlighted markup, if rendered
    pub fn html(&self) -> Option<&str> {
        match self {
            ResponseState::Rendered(html) => Some(html),
            _ => None,
        }
    }

    /// Failure, if errored
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ResponseState::Errored(failure) => Some(failure),
            _ => None,
        }
    }

    /// Settled state for a finished run
    pub fn settle(outcome: &crate::error::Result<String>) -> Self {
        match outcome {
            Ok(html) => ResponseState::Rendered(html.clone()),
            Err(e) => ResponseState::Errored(Failure::from(e)),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ResponseState::Idle => "idle",
            ResponseState::Loading => "loading",
            ResponseState::Rendered(_) => "rendered",
            ResponseState::Errored(_) => "errored",
        }
    }
}
