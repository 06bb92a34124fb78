use serde::Serialize;
use thiserror::Error;

use crate::error::ClientError;

/// Lifecycle of one container command
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum CommandState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> CommandState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, CommandState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CommandState::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, CommandState::Succeeded(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            CommandState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CommandState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

/// What a successful resource command did, keyed by record id where there is one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Listed(usize),
    Fetched(String),
    Created(String),
    Updated(String),
    Deleted(String),
}

/// Failure reason handed back to views. Only the message survives; the kind
/// of the underlying [`ClientError`] is deliberately dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CommandFailure(pub String);

impl CommandFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        CommandFailure(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl From<ClientError> for CommandFailure {
    fn from(err: ClientError) -> Self {
        CommandFailure(err.message())
    }
}
