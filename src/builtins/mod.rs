//! Built-in namespaces registered at startup

pub mod greetings;
pub mod mathlib;
pub mod text;

use crate::registry::Namespace;

/// Creates a vector of all built-in namespaces
pub fn all_namespaces() -> Vec<Namespace> {
    vec![mathlib::namespace(), greetings::namespace(), text::namespace()]
}
