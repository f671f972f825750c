//! Parameter scope for function body generation.
//!
//! While a function body is generated, its parameters live in local slots and
//! are read with `LOAD_FAST`. Every other name resolves through the global
//! name table. Function declarations do not nest, so at most one parameter
//! scope is active and scopes never stack.

use corvid_core::{CodegenError, Result};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::intern::next_id;

/// Result of resolving an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarLookup {
    /// Parameter of the current function, by slot.
    Fast(u32),
    /// Global, by name id.
    Name(u32),
}

/// Name to slot table for the function body being generated.
#[derive(Debug, Default)]
pub struct ParamScope {
    /// Parameter name to local slot
    slots: FxHashMap<String, u32>,
    /// Function whose body is being generated
    function: Option<String>,
}

impl ParamScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the body of `function`, giving each parameter its position in
    /// `params` as slot.
    ///
    /// A repeated parameter name ends up with the slot of its last occurrence.
    pub fn enter(&mut self, function: &str, params: &[&str]) -> Result<()> {
        if let Some(outer) = &self.function {
            return Err(CodegenError::NestedFunction {
                outer: outer.clone(),
                inner: function.to_string(),
            });
        }

        self.slots.clear();
        for (position, param) in params.iter().enumerate() {
            self.slots.insert((*param).to_string(), next_id(position)?);
        }
        self.function = Some(function.to_string());

        trace!(
            function,
            params = self.slots.len(),
            "entered function scope"
        );
        Ok(())
    }

    /// Leave the current function body, clearing all parameters.
    pub fn exit(&mut self) {
        if let Some(function) = self.function.take() {
            trace!(function = function.as_str(), "exited function scope");
        }
        self.slots.clear();
    }

    /// Whether `name` is a parameter of the current function.
    pub fn is_param(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Slot of parameter `name`.
    pub fn slot_of(&self, name: &str) -> Option<u32> {
        self.slots.get(name).copied()
    }

    /// Name of the function whose body is being generated.
    pub fn current_function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Number of parameters in scope.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no parameters are in scope.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
