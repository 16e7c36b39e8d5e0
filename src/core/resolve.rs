//! Binding resolution.
//!
//! Turns the [`BindingSpec`]s produced by the adapters into
//! [`TranslationBinding`]s declared in the right scope.

use std::collections::HashMap;

use swc_common::Span;

use crate::core::{
    SourceLocation,
    adapters::{BindingSpec, BindingTarget},
    scope::{ScopeEntry, ScopeTracker, TranslationBinding},
};

/// Declares recognized bindings as the traversal reaches them.
///
/// Bindings aimed at a render-prop function parameter are held back until
/// the traversal enters that function (see [`BindingResolver::take_param_bindings`]).
#[derive(Debug, Default)]
pub struct BindingResolver {
    pending: HashMap<Span, Vec<TranslationBinding>>,
}

impl BindingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding recognized at `location`.
    pub fn register(&mut self, spec: BindingSpec, location: SourceLocation, scopes: &mut ScopeTracker) {
        let binding = TranslationBinding {
            local_name: spec.local_name,
            library: spec.library,
            namespace: spec.namespace,
            prefix: spec.prefix,
            location,
        };

        match spec.target {
            BindingTarget::Scope => {
                log::debug!(
                    "declare `{}` ({}) prefix={:?} at {}",
                    binding.local_name,
                    binding.library,
                    binding.prefix,
                    binding.location
                );
                scopes.declare(binding.local_name.clone(), ScopeEntry::Translation(binding));
            }
            BindingTarget::FunctionScope => {
                log::debug!(
                    "declare `{}` ({}) prefix={:?} in function scope at {}",
                    binding.local_name,
                    binding.library,
                    binding.prefix,
                    binding.location
                );
                scopes.declare_in_function_scope(
                    binding.local_name.clone(),
                    ScopeEntry::Translation(binding),
                );
            }
            BindingTarget::FunctionParam(function_span) => {
                log::debug!(
                    "hold `{}` ({}) for render-prop function at {}",
                    binding.local_name,
                    binding.library,
                    binding.location
                );
                self.pending.entry(function_span).or_default().push(binding);
            }
        }
    }

    /// Bindings waiting for the function with `function_span`, removed from
    /// the pending set.
    pub fn take_param_bindings(&mut self, function_span: Span) -> Vec<TranslationBinding> {
        self.pending.remove(&function_span).unwrap_or_default()
    }

    /// Declare the held bindings of the function being entered in the
    /// current (freshly pushed) scope.
    pub fn declare_param_bindings(&mut self, function_span: Span, scopes: &mut ScopeTracker) {
        for binding in self.take_param_bindings(function_span) {
            scopes.declare(binding.local_name.clone(), ScopeEntry::Translation(binding));
        }
    }
}
