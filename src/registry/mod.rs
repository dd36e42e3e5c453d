//! Explicit lookup table of invocable functions
//!
//! Callables are grouped into named namespaces, and namespaces are collected
//! in a [`Registry`] built at startup. Resolution by name only ever sees what
//! was registered. Each callable implements the [`Callable`] trait.

use serde_json::Value;
use tracing::warn;

pub mod namespace;
pub mod outcome;
#[allow(clippy::module_inception)]
pub mod registry;
pub mod signature;

pub use namespace::{Member, Namespace, NamespaceBuilder, Unresolved};
pub use outcome::{CallFailure, CallOutcome, FailureKind};
pub use registry::{CatalogEntry, Registry};
pub use signature::{Arity, OutputType, Signature};

/// Core trait that all registered callables must implement
pub trait Callable: Send + Sync {
    /// Returns the name this callable is registered under
    fn name(&self) -> &str;

    /// Returns the declared arity and output type
    fn signature(&self) -> Signature;

    /// Runs the callable on already validated arguments
    fn invoke(&self, args: &[Value]) -> CallOutcome;

    /// Returns a description of what this callable does
    fn description(&self) -> &str;

    /// Validates the argument count, then invokes
    fn call(&self, args: &[Value]) -> CallOutcome {
        if let Err(failure) = self.signature().arity.check(self.name(), args.len()) {
            return CallOutcome::Failure(failure);
        }
        self.invoke(args)
    }
}

/// Plain function pointer signature for built-in callables
pub type CallableFn = fn(&[Value]) -> CallOutcome;

/// A [`Callable`] backed by a plain function
pub struct FnCallable {
    name: String,
    description: String,
    signature: Signature,
    func: CallableFn,
}

impl FnCallable {
    pub fn new(
        name: impl Into<String>,
        signature: Signature,
        description: impl Into<String>,
        func: CallableFn,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            signature,
            func,
        }
    }
}

impl Callable for FnCallable {
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> Signature {
        self.signature
    }

    fn invoke(&self, args: &[Value]) -> CallOutcome {
        let outcome = (self.func)(args);
        if let CallOutcome::Success(value) = &outcome {
            if !self.signature.output.matches(value) {
                warn!(
                    "{} declared {} output but returned {}",
                    self.name,
                    self.signature.output,
                    OutputType::of(value)
                );
            }
        }
        outcome
    }

    fn description(&self) -> &str {
        &self.description
    }
}
