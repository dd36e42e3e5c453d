//! Machine-readable record of one dispatch

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, ErrorKind};
use crate::registry::CallFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedError {
    pub kind: ErrorKind,
    pub code: u16,
    pub message: String,
    /// Present only when the callable itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<CallFailure>,
}

impl From<&DispatchError> for ReportedError {
    fn from(err: &DispatchError) -> Self {
        Self {
            kind: err.kind(),
            code: err.code(),
            message: err.to_string(),
            failure: err.failure().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationReport {
    pub namespace: Option<String>,
    pub callable: Option<String>,
    pub status: ResultStatus,
    /// Rendered text of the returned value
    pub output: Option<String>,
    pub error: Option<ReportedError>,
}

impl InvocationReport {
    /// Folds the rendered result of a dispatch into a report
    pub fn new<S: AsRef<str>>(
        args: &[S],
        result: &std::result::Result<String, DispatchError>,
    ) -> Self {
        let namespace = args.first().map(|s| s.as_ref().to_string());
        let callable = args.get(1).map(|s| s.as_ref().to_string());

        match result {
            Ok(output) => Self {
                namespace,
                callable,
                status: ResultStatus::Success,
                output: Some(output.clone()),
                error: None,
            },
            Err(err) => Self {
                namespace,
                callable,
                status: ResultStatus::Error,
                output: None,
                error: Some(ReportedError::from(err)),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResultStatus::Success
    }
}
