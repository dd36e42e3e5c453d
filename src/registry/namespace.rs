//! Named collections of callables and constants

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Callable, CallableFn, FnCallable, Signature};

/// An entry in a namespace
#[derive(Clone)]
pub enum Member {
    Function(Arc<dyn Callable>),
    /// A plain attribute; resolvable by name but not invocable
    Constant(Value),
}

impl Member {
    pub fn is_callable(&self) -> bool {
        matches!(self, Member::Function(_))
    }
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Member::Function(callable) => f.debug_tuple("Function").field(&callable.name()).finish(),
            Member::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
        }
    }
}

/// Why a member name did not resolve to a callable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved {
    Missing,
    NotCallable,
}

#[derive(Debug, Clone)]
pub struct Namespace {
    name: String,
    description: String,
    members: BTreeMap<String, Member>,
}

impl Namespace {
    /// Starts building a namespace with the given identifier
    pub fn builder(name: impl Into<String>) -> NamespaceBuilder {
        NamespaceBuilder {
            namespace: Namespace {
                name: name.into(),
                description: String::new(),
                members: BTreeMap::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Looks up a member and requires it to be a function
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Callable>, Unresolved> {
        match self.members.get(name) {
            Some(Member::Function(callable)) => Ok(Arc::clone(callable)),
            Some(Member::Constant(_)) => Err(Unresolved::NotCallable),
            None => Err(Unresolved::Missing),
        }
    }

    /// Registered callables in name order
    pub fn callables(&self) -> impl Iterator<Item = &Arc<dyn Callable>> {
        self.members.values().filter_map(|member| match member {
            Member::Function(callable) => Some(callable),
            Member::Constant(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Builder for assembling a [`Namespace`]
pub struct NamespaceBuilder {
    namespace: Namespace,
}

impl NamespaceBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.namespace.description = description.into();
        self
    }

    /// Registers a callable under its own name, replacing any previous member
    pub fn register(mut self, callable: impl Callable + 'static) -> Self {
        let name = callable.name().to_string();
        self.namespace
            .members
            .insert(name, Member::Function(Arc::new(callable)));
        self
    }

    /// Registers a plain function
    pub fn function(
        self,
        name: &str,
        signature: Signature,
        description: &str,
        func: CallableFn,
    ) -> Self {
        self.register(FnCallable::new(name, signature, description, func))
    }

    /// Registers a non-callable attribute
    pub fn constant(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.namespace
            .members
            .insert(name.to_string(), Member::Constant(value.into()));
        self
    }

    pub fn build(self) -> Namespace {
        self.namespace
    }
}
