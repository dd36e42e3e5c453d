use crate::error::{DispatchError, Result};

/// Number of positional inputs a dispatch takes
pub const EXPECTED_ARGS: usize = 3;

/// The three raw inputs of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub namespace: String,
    pub callable: String,
    /// Double-encoded argument list, still undecoded
    pub arguments: String,
}

impl InvocationRequest {
    pub fn new(
        namespace: impl Into<String>,
        callable: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            callable: callable.into(),
            arguments: arguments.into(),
        }
    }

    /// Builds a request from positional inputs, requiring exactly three
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [namespace, callable, arguments] => Ok(Self::new(
                namespace.as_ref(),
                callable.as_ref(),
                arguments.as_ref(),
            )),
            _ => Err(DispatchError::invalid_invocation(EXPECTED_ARGS, args.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_three_args() {
        let request = InvocationRequest::from_args(&["mathlib", "add", "[\"1\",\"2\"]"]).unwrap();
        assert_eq!(request, InvocationRequest::new("mathlib", "add", "[\"1\",\"2\"]"));
    }

    #[test]
    fn test_wrong_arg_counts() {
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["a"],
            vec!["a", "b"],
            vec!["a", "b", "c", "d"],
        ];
        for args in &cases {
            let err = InvocationRequest::from_args(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInvocation);
        }
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args = vec!["greetings".to_string(), "greet".to_string(), "[]".to_string()];
        let request = InvocationRequest::from_args(&args).unwrap();
        assert_eq!(request.callable, "greet");
    }
}
