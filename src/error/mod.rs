use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::registry::{CallFailure, FailureKind};

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Every way a dispatch can fail
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("[E{code:04}] Invalid invocation: {message}")]
    InvalidInvocation { code: u16, message: String },

    #[error("[E{code:04}] Namespace not found: {namespace}")]
    NamespaceNotFound { code: u16, namespace: String },

    #[error("[E{code:04}] Argument decode error: {message}")]
    ArgumentDecode {
        code: u16,
        message: String,
        index: Option<usize>,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("[E{code:04}] Callable not found: {message}")]
    CallableNotFound {
        code: u16,
        namespace: String,
        callable: String,
        message: String,
    },

    /// The callable ran and reported its own failure; its message is kept verbatim.
    #[error("[E{code:04}] {namespace}.{callable} failed: {failure}")]
    CallableExecution {
        code: u16,
        namespace: String,
        callable: String,
        #[source]
        failure: CallFailure,
    },

    #[error("[E{code:04}] Output error: {message}")]
    Output {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Serializable tag for the variants of [`DispatchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidInvocation,
    NamespaceNotFound,
    ArgumentDecodeError,
    CallableNotFound,
    CallableExecutionError,
    OutputError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidInvocation => "InvalidInvocation",
            ErrorKind::NamespaceNotFound => "NamespaceNotFound",
            ErrorKind::ArgumentDecodeError => "ArgumentDecodeError",
            ErrorKind::CallableNotFound => "CallableNotFound",
            ErrorKind::CallableExecutionError => "CallableExecutionError",
            ErrorKind::OutputError => "OutputError",
        };
        f.write_str(name)
    }
}

impl DispatchError {
    /// Wrong number of positional arguments
    pub fn invalid_invocation(expected: usize, given: usize) -> Self {
        let code = if given < expected {
            ErrorCode::INVOCATION_TOO_FEW_ARGS
        } else {
            ErrorCode::INVOCATION_TOO_MANY_ARGS
        };
        Self::InvalidInvocation {
            code,
            message: format!(
                "should have {expected} args: namespace, callable, arguments (got {given})"
            ),
        }
    }

    pub fn namespace_not_found(namespace: impl Into<String>) -> Self {
        Self::NamespaceNotFound {
            code: ErrorCode::NAMESPACE_NOT_FOUND,
            namespace: namespace.into(),
        }
    }

    /// The outer argument list could not be parsed as a JSON array
    pub fn invalid_argument_list(source: serde_json::Error) -> Self {
        Self::ArgumentDecode {
            code: ErrorCode::DECODE_INVALID_ARGUMENT_LIST,
            message: format!("argument list is not a JSON array of strings: {source}"),
            index: None,
            source: Some(source),
        }
    }

    /// An element of the argument list was not a JSON string
    pub fn non_string_argument(index: usize) -> Self {
        Self::ArgumentDecode {
            code: ErrorCode::DECODE_NON_STRING_ELEMENT,
            message: format!("argument {index} is not a JSON-encoded string"),
            index: Some(index),
            source: None,
        }
    }

    /// An element of the argument list held malformed JSON text
    pub fn invalid_argument(index: usize, source: serde_json::Error) -> Self {
        Self::ArgumentDecode {
            code: ErrorCode::DECODE_INVALID_ARGUMENT,
            message: format!("argument {index} is not valid JSON: {source}"),
            index: Some(index),
            source: Some(source),
        }
    }

    pub fn callable_missing(namespace: impl Into<String>, callable: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let callable = callable.into();
        Self::CallableNotFound {
            code: ErrorCode::CALLABLE_MISSING,
            message: format!("{namespace} has no member named {callable}"),
            namespace,
            callable,
        }
    }

    pub fn callable_not_function(
        namespace: impl Into<String>,
        callable: impl Into<String>,
    ) -> Self {
        let namespace = namespace.into();
        let callable = callable.into();
        Self::CallableNotFound {
            code: ErrorCode::CALLABLE_NOT_FUNCTION,
            message: format!("{callable} is not a function"),
            namespace,
            callable,
        }
    }

    pub fn callable_execution(
        namespace: impl Into<String>,
        callable: impl Into<String>,
        failure: CallFailure,
    ) -> Self {
        let code = match failure.kind {
            FailureKind::ArgumentMismatch => ErrorCode::EXEC_ARGUMENT_MISMATCH,
            FailureKind::TypeMismatch => ErrorCode::EXEC_TYPE_MISMATCH,
            FailureKind::Domain => ErrorCode::EXEC_DOMAIN,
            FailureKind::Other => ErrorCode::EXEC_GENERIC,
        };
        Self::CallableExecution {
            code,
            namespace: namespace.into(),
            callable: callable.into(),
            failure,
        }
    }

    /// Create an output error with a specific code
    pub fn output(
        code: u16,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Output {
            code,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidInvocation { code, .. }
            | Self::NamespaceNotFound { code, .. }
            | Self::ArgumentDecode { code, .. }
            | Self::CallableNotFound { code, .. }
            | Self::CallableExecution { code, .. }
            | Self::Output { code, .. } => *code,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInvocation { .. } => ErrorKind::InvalidInvocation,
            Self::NamespaceNotFound { .. } => ErrorKind::NamespaceNotFound,
            Self::ArgumentDecode { .. } => ErrorKind::ArgumentDecodeError,
            Self::CallableNotFound { .. } => ErrorKind::CallableNotFound,
            Self::CallableExecution { .. } => ErrorKind::CallableExecutionError,
            Self::Output { .. } => ErrorKind::OutputError,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInvocation { .. } => 2,
            _ => 1,
        }
    }

    /// The callable's own failure, if the error came from inside the call
    pub fn failure(&self) -> Option<&CallFailure> {
        match self {
            Self::CallableExecution { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// Whether the dispatcher itself rejected the request, as opposed to the callable
    pub fn is_dispatch_failure(&self) -> bool {
        !matches!(self, Self::CallableExecution { .. })
    }
}

/// Type alias for Results using DispatchError
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_invocation_codes() {
        let too_few = DispatchError::invalid_invocation(3, 1);
        assert_eq!(too_few.code(), ErrorCode::INVOCATION_TOO_FEW_ARGS);
        assert_eq!(too_few.exit_code(), 2);
        assert!(too_few.to_string().starts_with("[E1001]"));

        let too_many = DispatchError::invalid_invocation(3, 4);
        assert_eq!(too_many.code(), ErrorCode::INVOCATION_TOO_MANY_ARGS);
        assert!(too_many.to_string().contains("got 4"));
    }

    #[test]
    fn test_callable_execution_preserves_message() {
        let failure = CallFailure::new(FailureKind::Domain, "division by zero");
        let err = DispatchError::callable_execution("mathlib", "divide", failure.clone());

        assert_eq!(err.kind(), ErrorKind::CallableExecutionError);
        assert_eq!(err.code(), ErrorCode::EXEC_DOMAIN);
        assert_eq!(err.failure(), Some(&failure));
        assert!(err.to_string().contains("mathlib.divide failed"));
        assert!(err.to_string().contains("division by zero"));
        assert!(!err.is_dispatch_failure());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_not_function_message() {
        let err = DispatchError::callable_not_function("mathlib", "pi");
        assert_eq!(err.kind(), ErrorKind::CallableNotFound);
        assert_eq!(err.code(), ErrorCode::CALLABLE_NOT_FUNCTION);
        assert!(err.to_string().contains("pi is not a function"));
        assert!(err.is_dispatch_failure());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DispatchError::invalid_argument(1, source);

        assert_eq!(err.kind(), ErrorKind::ArgumentDecodeError);
        assert!(std::error::Error::source(&err).is_some());
        match err {
            DispatchError::ArgumentDecode { index, .. } => assert_eq!(index, Some(1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_kind_serializes_by_name() {
        let json = serde_json::to_string(&ErrorKind::NamespaceNotFound).unwrap();
        assert_eq!(json, "\"NamespaceNotFound\"");
        assert_eq!(ErrorKind::ArgumentDecodeError.to_string(), "ArgumentDecodeError");
    }
}
