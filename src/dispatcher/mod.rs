//! Name-based dispatch of registered callables
//!
//! One dispatch is a straight pipeline:
//!
//! 1. check that exactly three inputs were given
//! 2. resolve the namespace
//! 3. decode the double-encoded argument list
//! 4. resolve the callable inside the namespace
//! 5. invoke it with the decoded arguments in order
//! 6. render the returned value as text
//!
//! The first failing step ends the dispatch with a [`DispatchError`].

use serde_json::Value;
use std::io::Write;
use tracing::{debug, trace};

pub mod decode;
pub mod render;
pub mod report;
pub mod request;

pub use decode::{decode_arguments, encode_arguments};
pub use render::render_text;
pub use report::{InvocationReport, ReportedError, ResultStatus};
pub use request::{InvocationRequest, EXPECTED_ARGS};

use crate::error::{DispatchError, ErrorCode, Result};
use crate::registry::{CallOutcome, Registry, Unresolved};

/// Resolves and invokes callables from a [`Registry`]
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Creates a dispatcher over the built-in namespaces
    pub fn with_defaults() -> Self {
        Self::new(Registry::with_defaults())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the full pipeline and writes the rendered value to `out`
    ///
    /// No trailing newline is written.
    pub fn run<S: AsRef<str>, W: Write>(&self, args: &[S], out: &mut W) -> Result<()> {
        let text = self.evaluate(args)?;
        out.write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| {
                DispatchError::output(ErrorCode::OUTPUT_WRITE_FAILED, "failed to write result", e)
            })
    }

    /// Runs the full pipeline and returns the rendered value
    pub fn evaluate<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        let request = InvocationRequest::from_args(args)?;
        let value = self.dispatch(&request)?;
        Ok(render_text(&value))
    }

    /// Runs the full pipeline, folding any failure into the report
    pub fn report<S: AsRef<str>>(&self, args: &[S]) -> InvocationReport {
        InvocationReport::new(args, &self.evaluate(args))
    }

    /// Resolves, decodes and invokes one request
    pub fn dispatch(&self, request: &InvocationRequest) -> Result<Value> {
        debug!(
            "Dispatching {}.{} with arguments {}",
            request.namespace, request.callable, request.arguments
        );

        let namespace = self
            .registry
            .namespace(&request.namespace)
            .ok_or_else(|| DispatchError::namespace_not_found(&request.namespace))?;

        let args = decode_arguments(&request.arguments)?;
        trace!("Decoded arguments: {:?}", args);

        let callable = namespace
            .resolve(&request.callable)
            .map_err(|reason| match reason {
                Unresolved::Missing => {
                    DispatchError::callable_missing(&request.namespace, &request.callable)
                }
                Unresolved::NotCallable => {
                    DispatchError::callable_not_function(&request.namespace, &request.callable)
                }
            })?;

        match callable.call(&args) {
            CallOutcome::Success(value) => {
                debug!("{}.{} returned {}", request.namespace, request.callable, value);
                Ok(value)
            }
            CallOutcome::Failure(failure) => {
                debug!("{}.{} failed: {}", request.namespace, request.callable, failure);
                Err(DispatchError::callable_execution(
                    &request.namespace,
                    &request.callable,
                    failure,
                ))
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
