//! Lexical scope tracking for translation bindings.
//!
//! Mirrors the function/block/component nesting of a file so that a call
//! site sees exactly the translation bindings declared in its enclosing
//! scopes, nearest first.

use std::collections::HashMap;

use crate::core::{LibraryKind, SourceLocation};

/// Value of a statically inspected argument (namespace or prefix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticArg {
    /// A literal value, or `None` when the argument is absent, `null`,
    /// `undefined` or an empty string.
    Known(Option<String>),
    /// The argument is an expression that cannot be evaluated statically.
    Dynamic,
}

impl StaticArg {
    pub const NONE: StaticArg = StaticArg::Known(None);

    pub fn known(value: impl Into<String>) -> Self {
        StaticArg::Known(Some(value.into()))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, StaticArg::Dynamic)
    }

    /// The literal value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            StaticArg::Known(value) => value.as_deref(),
            StaticArg::Dynamic => None,
        }
    }
}

/// A local identifier bound to a translation function.
///
/// e.g. `const t = useTranslations("home")` binds `t` with prefix `home`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBinding {
    pub local_name: String,
    pub library: LibraryKind,
    pub namespace: StaticArg,
    pub prefix: StaticArg,
    pub location: SourceLocation,
}

/// What a name refers to within one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeEntry {
    Translation(TranslationBinding),
    /// A parameter or ordinary variable hiding an outer translation binding.
    Shadowed,
}

/// One lexical region: name -> declarations, most recent last.
#[derive(Debug, Default)]
struct Scope {
    entries: HashMap<String, Vec<ScopeEntry>>,
    /// Function bodies and the module: where `var` declarations land.
    is_function: bool,
}

/// Stack of lexical scopes (innermost last).
///
/// # Example
/// ```ignore
/// const t = useTranslations("a");   // scope 0: t -> a
/// function inner() {                // push scope 1
///     const t = useTranslations("b"); // scope 1: t -> b
///     t("key");                     // resolves to "b.key"
/// }                                 // pop scope 1
/// t("key");                         // resolves to "a.key"
/// ```
#[derive(Debug)]
pub struct ScopeTracker {
    scopes: Vec<Scope>,
}

impl Default for ScopeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTracker {
    /// Create a tracker holding only the module scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope {
                is_function: true,
                ..Default::default()
            }],
        }
    }

    /// Push a block-level scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Push the scope of a function body.
    pub fn enter_function_scope(&mut self) {
        self.scopes.push(Scope {
            is_function: true,
            ..Default::default()
        });
    }

    /// Leave the current scope. The module scope is never popped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare `name` in the current scope, superseding earlier declarations
    /// of the same name in this scope.
    pub fn declare(&mut self, name: impl Into<String>, entry: ScopeEntry) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.entries.entry(name.into()).or_default().push(entry);
        }
    }

    /// Declare `name` in the nearest enclosing function (or module) scope,
    /// the way `var` declarations are hoisted out of blocks.
    pub fn declare_in_function_scope(&mut self, name: impl Into<String>, entry: ScopeEntry) {
        if let Some(scope) = self.scopes.iter_mut().rev().find(|scope| scope.is_function) {
            scope.entries.entry(name.into()).or_default().push(entry);
        }
    }

    /// Nearest visible entry for `name`, searching innermost to outermost.
    pub fn lookup(&self, name: &str) -> Option<&ScopeEntry> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.entries.get(name).and_then(|stack| stack.last()))
    }

    /// Nearest visible translation binding for `name`.
    ///
    /// Returns `None` when the name is unbound or shadowed by a plain local.
    pub fn binding(&self, name: &str) -> Option<&TranslationBinding> {
        match self.lookup(name)? {
            ScopeEntry::Translation(binding) => Some(binding),
            ScopeEntry::Shadowed => None,
        }
    }

    /// Whether a translation binding for `name` is currently visible.
    pub fn has_binding(&self, name: &str) -> bool {
        self.binding(name).is_some()
    }
}
