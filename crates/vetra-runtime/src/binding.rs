//! Glue for exposing execution contexts to a host framework.
//!
//! Host frameworks register compiled engines under attribute names on the
//! modules they were extracted from, then look them up at call time. This
//! module is the thin adapter for that pattern: it maps names to contexts
//! and forwards calls. It adds no semantics over `ExecutionContext::execute`,
//! and contexts remain directly callable without it.

use crate::context::ExecutionContext;
use crate::error::Result;
use crate::tensor::Tensor;
use std::collections::HashMap;
use std::sync::Arc;

/// Named registry of execution contexts.
///
/// Contexts are held behind `Arc` so the host side can keep its own handle
/// to a context while it stays registered.
#[derive(Debug, Default)]
pub struct BindingRegistry {
    bindings: HashMap<String, Arc<ExecutionContext>>,
}

impl BindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a context under an attribute name.
    ///
    /// Re-registering a name replaces the previous binding; the old context
    /// stays alive for any holder that still references it.
    pub fn register(&mut self, name: impl Into<String>, context: Arc<ExecutionContext>) {
        self.bindings.insert(name.into(), context);
    }

    /// Look up a context by attribute name.
    pub fn get(&self, name: &str) -> Option<&Arc<ExecutionContext>> {
        self.bindings.get(name)
    }

    /// Remove a binding, returning the context if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<ExecutionContext>> {
        self.bindings.remove(name)
    }

    /// Run a registered engine by name.
    ///
    /// # Errors
    /// Returns an error if no engine is registered under `name` or the
    /// invocation fails.
    pub fn run(&self, name: &str, inputs: &[Tensor]) -> Result<Vec<Tensor>> {
        let context = self
            .bindings
            .get(name)
            .ok_or_else(|| crate::error::RuntimeError::NotRegistered(name.to_string()))?;
        context.execute(inputs)
    }

    /// Number of registered engines.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
