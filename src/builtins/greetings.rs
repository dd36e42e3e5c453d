//! Greeting helpers

use serde_json::Value;

use crate::dispatcher::render::render_text;
use crate::registry::{Arity, CallOutcome, Namespace, OutputType, Signature};

pub const NAME: &str = "greetings";

pub fn namespace() -> Namespace {
    let unary = Signature::new(Arity::Exact(1), OutputType::String);

    Namespace::builder(NAME)
        .description("Friendly messages")
        .function("greet", unary, "Says hello to the given name", greet)
        .function("farewell", unary, "Says goodbye to the given name", farewell)
        .constant("default_name", "world")
        .build()
}

fn greet(args: &[Value]) -> CallOutcome {
    CallOutcome::success(format!("hello {}", render_text(&args[0])))
}

fn farewell(args: &[Value]) -> CallOutcome {
    CallOutcome::success(format!("goodbye {}", render_text(&args[0])))
}
