//! Result types for callable invocation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Classification of a failure raised inside a callable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Wrong number of positional arguments
    ArgumentMismatch,
    /// An argument had the wrong JSON type
    TypeMismatch,
    /// An argument had an acceptable type but an unusable value
    Domain,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::ArgumentMismatch => write!(f, "argument mismatch"),
            FailureKind::TypeMismatch => write!(f, "type mismatch"),
            FailureKind::Domain => write!(f, "domain error"),
            FailureKind::Other => write!(f, "error"),
        }
    }
}

/// A failure reported by a callable, carried through untouched
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct CallFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl CallFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(FailureKind::TypeMismatch, message)
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Domain, message)
    }
}

/// Tagged result of invoking a callable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum CallOutcome {
    Success(Value),
    Failure(CallFailure),
}

impl CallOutcome {
    /// Creates a successful outcome
    pub fn success(value: impl Into<Value>) -> Self {
        CallOutcome::Success(value.into())
    }

    /// Creates a failed outcome
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        CallOutcome::Failure(CallFailure::new(kind, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            CallOutcome::Success(value) => Some(value),
            CallOutcome::Failure(_) => None,
        }
    }

    /// Converts to a Result type
    pub fn into_result(self) -> Result<Value, CallFailure> {
        match self {
            CallOutcome::Success(value) => Ok(value),
            CallOutcome::Failure(failure) => Err(failure),
        }
    }
}

impl From<Result<Value, CallFailure>> for CallOutcome {
    fn from(result: Result<Value, CallFailure>) -> Self {
        match result {
            Ok(value) => CallOutcome::Success(value),
            Err(failure) => CallOutcome::Failure(failure),
        }
    }
}
