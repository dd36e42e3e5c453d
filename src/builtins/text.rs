use serde_json::Value;

use crate::dispatcher::render::render_text;
use crate::registry::{Arity, CallFailure, CallOutcome, Namespace, OutputType, Signature};

pub const NAME: &str = "text";

pub fn namespace() -> Namespace {
    let unary = |output| Signature::new(Arity::Exact(1), output);

    Namespace::builder(NAME)
        .description("String manipulation")
        .function("upper", unary(OutputType::String), "Uppercases a string", upper)
        .function("lower", unary(OutputType::String), "Lowercases a string", lower)
        .function(
            "length",
            unary(OutputType::Number),
            "Counts the characters of a string",
            length,
        )
        .function(
            "concat",
            Signature::new(Arity::AtLeast(0), OutputType::String),
            "Joins the text form of every argument",
            concat,
        )
        .function(
            "split",
            Signature::new(Arity::Exact(2), OutputType::Array),
            "Splits a string on a separator",
            split,
        )
        .build()
}

fn string_arg<'a>(callable: &str, position: usize, value: &'a Value) -> Result<&'a str, CallFailure> {
    value.as_str().ok_or_else(|| {
        CallFailure::type_mismatch(format!(
            "{callable}() argument {position} must be a string, not {}",
            OutputType::of(value)
        ))
    })
}

fn upper(args: &[Value]) -> CallOutcome {
    string_arg("upper", 0, &args[0])
        .map(|s| Value::from(s.to_uppercase()))
        .into()
}

fn lower(args: &[Value]) -> CallOutcome {
    string_arg("lower", 0, &args[0])
        .map(|s| Value::from(s.to_lowercase()))
        .into()
}

fn length(args: &[Value]) -> CallOutcome {
    string_arg("length", 0, &args[0])
        .map(|s| Value::from(s.chars().count()))
        .into()
}

fn concat(args: &[Value]) -> CallOutcome {
    CallOutcome::success(args.iter().map(render_text).collect::<String>())
}

fn split(args: &[Value]) -> CallOutcome {
    split_on(args).into()
}

fn split_on(args: &[Value]) -> Result<Value, CallFailure> {
    let input = string_arg("split", 0, &args[0])?;
    let separator = string_arg("split", 1, &args[1])?;
    if separator.is_empty() {
        return Err(CallFailure::domain("empty separator"));
    }
    Ok(Value::from(input.split(separator).collect::<Vec<_>>()))
}
