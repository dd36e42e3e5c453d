//! Call signatures: how many arguments a callable takes and what it returns

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::{CallFailure, FailureKind};

/// Number of positional arguments a callable accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(&self, given: usize) -> bool {
        match *self {
            Arity::Exact(n) => given == n,
            Arity::AtLeast(min) => given >= min,
            Arity::Between(min, max) => (min..=max).contains(&given),
        }
    }

    /// Checks an argument count, producing the failure a caller would see
    pub fn check(&self, callable: &str, given: usize) -> Result<(), CallFailure> {
        if self.accepts(given) {
            return Ok(());
        }

        let expected = match *self {
            Arity::Exact(n) => format!("takes {n} positional {}", plural(n)),
            Arity::AtLeast(min) => format!("takes at least {min} positional {}", plural(min)),
            Arity::Between(min, max) => {
                format!("takes from {min} to {max} positional arguments")
            }
        };
        let was = if given == 1 { "was" } else { "were" };

        Err(CallFailure::new(
            FailureKind::ArgumentMismatch,
            format!("{callable}() {expected} but {given} {was} given"),
        ))
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(min) => write!(f, "{min}+"),
            Arity::Between(min, max) => write!(f, "{min}..={max}"),
        }
    }
}

/// The kind of value a callable produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    #[serde(rename = "not_output")]
    NoOutput,
}

impl OutputType {
    /// Classifies a JSON value; `null` counts as no output
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => OutputType::String,
            Value::Number(_) => OutputType::Number,
            Value::Bool(_) => OutputType::Boolean,
            Value::Array(_) => OutputType::Array,
            Value::Object(_) => OutputType::Object,
            Value::Null => OutputType::NoOutput,
        }
    }

    pub fn matches(&self, value: &Value) -> bool {
        Self::of(value) == *self
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::String => write!(f, "string"),
            OutputType::Number => write!(f, "number"),
            OutputType::Boolean => write!(f, "boolean"),
            OutputType::Array => write!(f, "array"),
            OutputType::Object => write!(f, "object"),
            OutputType::NoOutput => write!(f, "not_output"),
        }
    }
}

/// Declared shape of a callable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub arity: Arity,
    pub output: OutputType,
}

impl Signature {
    pub fn new(arity: Arity, output: OutputType) -> Self {
        Self { arity, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(3));
        assert!(Arity::AtLeast(0).accepts(0));
        assert!(Arity::AtLeast(1).accepts(7));
        assert!(!Arity::AtLeast(1).accepts(0));
        assert!(Arity::Between(1, 2).accepts(1));
        assert!(!Arity::Between(1, 2).accepts(3));
    }

    #[test]
    fn test_arity_check_message() {
        let failure = Arity::Exact(2).check("add", 3).unwrap_err();
        assert_eq!(failure.kind, FailureKind::ArgumentMismatch);
        assert_eq!(
            failure.message,
            "add() takes 2 positional arguments but 3 were given"
        );

        let failure = Arity::Exact(1).check("greet", 0).unwrap_err();
        assert_eq!(
            failure.message,
            "greet() takes 1 positional argument but 0 were given"
        );

        let failure = Arity::AtLeast(1).check("concat", 0).unwrap_err();
        assert!(failure.message.contains("at least 1"));

        assert!(Arity::Exact(1).check("greet", 1).is_ok());
    }

    #[test]
    fn test_output_type_classification() {
        assert_eq!(OutputType::of(&json!("x")), OutputType::String);
        assert_eq!(OutputType::of(&json!(1.5)), OutputType::Number);
        assert_eq!(OutputType::of(&json!(null)), OutputType::NoOutput);
        assert!(OutputType::Array.matches(&json!([1, 2])));
        assert!(!OutputType::Object.matches(&json!([1, 2])));
    }

    #[test]
    fn test_output_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&OutputType::NoOutput).unwrap(),
            "\"not_output\""
        );
        assert_eq!(
            serde_json::from_str::<OutputType>("\"boolean\"").unwrap(),
            OutputType::Boolean
        );
        assert_eq!(OutputType::NoOutput.to_string(), "not_output");
    }
}
