//! Library-level dispatch tests against custom registries

use serde_json::{json, Value};
use seraph_dispatch::dispatcher::{encode_arguments, InvocationRequest};
use seraph_dispatch::registry::{
    Arity, CallFailure, CallOutcome, Callable, FailureKind, Namespace, OutputType, Signature,
};
use seraph_dispatch::{DispatchError, Dispatcher, ErrorKind, Registry};

/// Joins its arguments with a configurable separator
struct Joiner {
    separator: String,
}

impl Callable for Joiner {
    fn name(&self) -> &str {
        "join"
    }

    fn signature(&self) -> Signature {
        Signature::new(Arity::Between(1, 3), OutputType::String)
    }

    fn invoke(&self, args: &[Value]) -> CallOutcome {
        let parts: Result<Vec<&str>, CallFailure> = args
            .iter()
            .map(|arg| {
                arg.as_str()
                    .ok_or_else(|| CallFailure::type_mismatch("join() only accepts strings"))
            })
            .collect();
        parts.map(|parts| Value::from(parts.join(self.separator.as_str()))).into()
    }

    fn description(&self) -> &str {
        "Joins strings"
    }
}

fn raise(_args: &[Value]) -> CallOutcome {
    CallOutcome::failure(FailureKind::Other, "boom")
}

fn custom_dispatcher() -> Dispatcher {
    let mut registry = Registry::new();
    registry.register(
        Namespace::builder("strings")
            .register(Joiner {
                separator: "-".to_string(),
            })
            .function(
                "raise",
                Signature::new(Arity::AtLeast(0), OutputType::NoOutput),
                "Always fails",
                raise,
            )
            .constant("separator", "-")
            .build(),
    );
    Dispatcher::new(registry)
}

fn evaluate(
    dispatcher: &Dispatcher,
    namespace: &str,
    callable: &str,
    args: &[Value],
) -> Result<String, DispatchError> {
    let encoded = encode_arguments(args);
    dispatcher.evaluate(&[namespace, callable, encoded.as_str()])
}

#[test]
fn test_custom_callable_is_dispatched() {
    let dispatcher = custom_dispatcher();
    let args = [json!("a"), json!("b"), json!("c")];
    let text = evaluate(&dispatcher, "strings", "join", &args).unwrap();
    assert_eq!(text, "a-b-c");
}

#[test]
fn test_custom_callable_arity_is_enforced() {
    let dispatcher = custom_dispatcher();
    let err = evaluate(&dispatcher, "strings", "join", &[]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CallableExecutionError);
    assert_eq!(
        err.failure().map(|f| f.kind),
        Some(FailureKind::ArgumentMismatch)
    );
}

#[test]
fn test_callable_failure_is_distinguishable_from_dispatch_failure() {
    let dispatcher = custom_dispatcher();

    let err = evaluate(&dispatcher, "strings", "raise", &[]).unwrap_err();
    assert!(!err.is_dispatch_failure());
    assert_eq!(err.failure().map(|f| f.message.as_str()), Some("boom"));

    let err = evaluate(&dispatcher, "strings", "separator", &[]).unwrap_err();
    assert!(err.is_dispatch_failure());
    assert_eq!(err.kind(), ErrorKind::CallableNotFound);
}

#[test]
fn test_builtins_are_absent_from_custom_registry() {
    let dispatcher = custom_dispatcher();
    let err = evaluate(&dispatcher, "mathlib", "add", &[json!(1), json!(2)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NamespaceNotFound);
}

#[test]
fn test_dispatch_returns_the_raw_value() {
    let dispatcher = Dispatcher::with_defaults();
    let arguments = encode_arguments(&[json!("x.y"), json!(".")]);
    let request = InvocationRequest::new("text", "split", arguments);
    assert_eq!(dispatcher.dispatch(&request).unwrap(), json!(["x", "y"]));
}

#[test]
fn test_every_builtin_rejects_an_extra_argument() {
    let dispatcher = Dispatcher::with_defaults();
    for entry in dispatcher.registry().catalog() {
        let Arity::Exact(n) = entry.arity else {
            continue;
        };
        let args = vec![json!("x"); n + 1];
        let err = evaluate(&dispatcher, &entry.namespace, &entry.callable, &args).unwrap_err();
        assert_eq!(
            err.failure().map(|f| f.kind),
            Some(FailureKind::ArgumentMismatch),
            "{}.{}",
            entry.namespace,
            entry.callable
        );
    }
}
