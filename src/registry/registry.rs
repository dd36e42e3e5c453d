//! Registry for managing and discovering namespaces

use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::{Arity, Namespace, OutputType};

/// Registry that holds every namespace the dispatcher can resolve
#[derive(Debug, Clone, Default)]
pub struct Registry {
    namespaces: BTreeMap<String, Namespace>,
}

impl Registry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in namespaces
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for namespace in crate::builtins::all_namespaces() {
            registry.register(namespace);
        }
        registry
    }

    /// Registers a namespace, returning the one it replaced
    pub fn register(&mut self, namespace: Namespace) -> Option<Namespace> {
        debug!(
            "Registering namespace {} with {} members",
            namespace.name(),
            namespace.len()
        );
        self.namespaces
            .insert(namespace.name().to_string(), namespace)
    }

    /// Gets a namespace by name
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Lists all registered namespace names
    pub fn names(&self) -> Vec<&str> {
        self.namespaces.keys().map(String::as_str).collect()
    }

    /// Every registered callable, ordered by namespace then name
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        self.namespaces
            .values()
            .flat_map(|namespace| {
                namespace.callables().map(move |callable| {
                    let signature = callable.signature();
                    CatalogEntry {
                        namespace: namespace.name().to_string(),
                        callable: callable.name().to_string(),
                        arity: signature.arity,
                        output: signature.output,
                        description: callable.description().to_string(),
                    }
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// One line of the registry listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub namespace: String,
    pub callable: String,
    pub arity: Arity,
    pub output: OutputType,
    pub description: String,
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({}) -> {}  {}",
            self.namespace, self.callable, self.arity, self.output, self.description
        )
    }
}
