//! # Seraph Dispatch
//!
//! Invoke a registered function by name with JSON-encoded arguments and print
//! the result.
//!
//! ## Usage
//!
//! ```bash
//! seraph-dispatch mathlib add '["1", "2"]'        # prints 3
//! seraph-dispatch greetings greet '["\"world\""]' # prints hello world
//! ```
//!
//! ## Modules
//!
//! - `builtins` - Namespaces registered at startup
//! - `config` - Output format and logging settings
//! - `dispatcher` - Request validation, argument decoding, invocation and rendering
//! - `error` - Dispatch error taxonomy with stable error codes
//! - `registry` - Callables, namespaces and the lookup table that holds them
pub mod builtins;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod registry;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, ErrorKind};
pub use registry::Registry;
