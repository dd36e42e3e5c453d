//! Arithmetic over JSON numbers
//!
//! Integer operands stay integral as long as the result fits in an `i64`;
//! anything else is computed in `f64`. `divide` always produces a float.

use serde_json::{Number, Value};

use crate::registry::{Arity, CallFailure, CallOutcome, Namespace, OutputType, Signature};

pub const NAME: &str = "mathlib";

pub fn namespace() -> Namespace {
    let binary = Signature::new(Arity::Exact(2), OutputType::Number);

    Namespace::builder(NAME)
        .description("Basic arithmetic")
        .function("add", binary, "Adds two numbers", add)
        .function("subtract", binary, "Subtracts the second number from the first", subtract)
        .function("multiply", binary, "Multiplies two numbers", multiply)
        .function("divide", binary, "Divides the first number by the second", divide)
        .function(
            "sum",
            Signature::new(Arity::AtLeast(0), OutputType::Number),
            "Adds any number of numbers",
            sum,
        )
        .constant("pi", std::f64::consts::PI)
        .constant("e", std::f64::consts::E)
        .build()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operand {
    Int(i64),
    Float(f64),
}

impl Operand {
    fn parse(callable: &str, position: usize, value: &Value) -> Result<Self, CallFailure> {
        let Value::Number(number) = value else {
            return Err(CallFailure::type_mismatch(format!(
                "{callable}() argument {position} must be a number, not {}",
                OutputType::of(value)
            )));
        };

        match (number.as_i64(), number.as_f64()) {
            (Some(n), _) => Ok(Operand::Int(n)),
            (None, Some(x)) => Ok(Operand::Float(x)),
            (None, None) => Err(CallFailure::type_mismatch(format!(
                "{callable}() argument {position} is not representable"
            ))),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Operand::Int(n) => n as f64,
            Operand::Float(x) => x,
        }
    }

    fn into_value(self) -> Result<Value, CallFailure> {
        match self {
            Operand::Int(n) => Ok(Value::from(n)),
            Operand::Float(x) => Number::from_f64(x)
                .map(Value::Number)
                .ok_or_else(|| CallFailure::domain("result is not a finite number")),
        }
    }
}

fn combine(
    lhs: Operand,
    rhs: Operand,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Operand {
    match (lhs, rhs) {
        (Operand::Int(a), Operand::Int(b)) => match int_op(a, b) {
            Some(n) => Operand::Int(n),
            None => Operand::Float(float_op(a as f64, b as f64)),
        },
        (a, b) => Operand::Float(float_op(a.as_f64(), b.as_f64())),
    }
}

fn binary(
    callable: &str,
    args: &[Value],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, CallFailure> {
    let lhs = Operand::parse(callable, 0, &args[0])?;
    let rhs = Operand::parse(callable, 1, &args[1])?;
    combine(lhs, rhs, int_op, float_op).into_value()
}

fn add(args: &[Value]) -> CallOutcome {
    binary("add", args, i64::checked_add, |a, b| a + b).into()
}

fn subtract(args: &[Value]) -> CallOutcome {
    binary("subtract", args, i64::checked_sub, |a, b| a - b).into()
}

fn multiply(args: &[Value]) -> CallOutcome {
    binary("multiply", args, i64::checked_mul, |a, b| a * b).into()
}

fn divide(args: &[Value]) -> CallOutcome {
    quotient(args).into()
}

fn quotient(args: &[Value]) -> Result<Value, CallFailure> {
    let lhs = Operand::parse("divide", 0, &args[0])?.as_f64();
    let rhs = Operand::parse("divide", 1, &args[1])?.as_f64();
    if rhs == 0.0 {
        return Err(CallFailure::domain("division by zero"));
    }
    Operand::Float(lhs / rhs).into_value()
}

fn sum(args: &[Value]) -> CallOutcome {
    total(args).into()
}

fn total(args: &[Value]) -> Result<Value, CallFailure> {
    let mut total = Operand::Int(0);
    for (position, value) in args.iter().enumerate() {
        let operand = Operand::parse("sum", position, value)?;
        total = combine(total, operand, i64::checked_add, |a, b| a + b);
    }
    total.into_value()
}
