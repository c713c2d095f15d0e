//! Wrapper type bindings reported by generators.
//!
//! The registry is owned by the caller and passed into each pipeline run,
//! so a batch of generations can be checked for clashing wrappers.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// A generated wrapper type bound to its native base type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapperBinding {
    /// Fully qualified wrapper type (e.g., "org.foo.HTTPStatus.NSErrorWrap")
    pub wrapper: String,
    /// Base type the wrapper is bound to
    pub base: String,
}

impl WrapperBinding {
    pub fn new(wrapper: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            wrapper: wrapper.into(),
            base: base.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("wrapper '{0}' is already registered")]
    Duplicate(String),
}

/// Bindings in registration order.
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    bindings: IndexMap<String, WrapperBinding>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding. Registering the same wrapper twice is an error.
    pub fn register(&mut self, binding: WrapperBinding) -> Result<(), RegistryError> {
        self.ensure_free(&binding)?;
        self.bindings.insert(binding.wrapper.clone(), binding);
        Ok(())
    }

    /// Check that `binding` could be registered without registering it.
    pub fn ensure_free(&self, binding: &WrapperBinding) -> Result<(), RegistryError> {
        if self.contains(&binding.wrapper) {
            return Err(RegistryError::Duplicate(binding.wrapper.clone()));
        }
        Ok(())
    }

    pub fn contains(&self, wrapper: &str) -> bool {
        self.bindings.contains_key(wrapper)
    }

    pub fn get(&self, wrapper: &str) -> Option<&WrapperBinding> {
        self.bindings.get(wrapper)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WrapperBinding> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_preserves_order() {
        let mut registry = BindingRegistry::new();
        registry
            .register(WrapperBinding::new("b.B.NSErrorWrap", "NSError"))
            .unwrap();
        registry
            .register(WrapperBinding::new("a.A.NSErrorWrap", "NSError"))
            .unwrap();

        let wrappers: Vec<&str> = registry.iter().map(|b| b.wrapper.as_str()).collect();
        assert_eq!(wrappers, vec!["b.B.NSErrorWrap", "a.A.NSErrorWrap"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = BindingRegistry::new();
        let binding = WrapperBinding::new("a.A.NSErrorWrap", "NSError");
        registry.register(binding.clone()).unwrap();

        assert_eq!(
            registry.register(binding),
            Err(RegistryError::Duplicate("a.A.NSErrorWrap".into()))
        );
        assert_eq!(registry.len(), 1);
    }
}
