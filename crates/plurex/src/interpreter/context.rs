//! Evaluation context wrapping the caller's variable bindings.

use std::collections::HashMap;
use std::mem;

use crate::interpreter::error::EvalWarning;
use crate::types::Value;

/// Per-call evaluation state.
///
/// Borrows the caller's variables read-only and collects warnings about
/// operands that could not be resolved. Nothing is retained across calls.
pub struct EvalContext<'a> {
    /// Variables available during evaluation.
    params: &'a HashMap<String, Value>,
    /// Warnings collected during evaluation, without duplicates.
    warnings: Vec<EvalWarning>,
}

impl<'a> EvalContext<'a> {
    /// Create a context over the given variables.
    pub fn new(params: &'a HashMap<String, Value>) -> Self {
        Self {
            params,
            warnings: Vec::new(),
        }
    }

    /// Get a variable's value.
    pub fn get_param(&self, name: &str) -> Option<&'a Value> {
        self.params.get(name)
    }

    /// Names of all bound variables, sorted.
    pub fn param_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.params.keys().cloned().collect();
        names.sort();
        names
    }

    /// Add a runtime warning to this context.
    pub fn add_warning(&mut self, warning: EvalWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Drain all collected warnings from this context.
    pub fn take_warnings(&mut self) -> Vec<EvalWarning> {
        mem::take(&mut self.warnings)
    }

    /// Get a reference to collected warnings.
    pub fn warnings(&self) -> &[EvalWarning] {
        &self.warnings
    }
}
