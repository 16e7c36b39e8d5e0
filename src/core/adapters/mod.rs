//! Library adapters.
//!
//! Each adapter knows the syntax one i18n convention uses to create a
//! translation function and to request a key through it. Adapters never
//! touch the scope stack themselves: they turn AST nodes into normalized
//! [`BindingSpec`]s and [`CallSpec`]s that the resolver and the key
//! extractor consume.
//!
//! ## Module Structure
//!
//! - `helpers`: literal/argument inspection shared by all adapters
//! - `i18next`: `i18next.t`, `getFixedT(lng, ns, keyPrefix)`
//! - `use_translation`: `useTranslation(ns, { keyPrefix })`, `<Trans>`
//! - `translation_component`: `<Translation keyPrefix>{(t) => ...}</Translation>`
//! - `next_intl`: `useTranslations(prefix)`, `getTranslations(prefix)`

pub mod helpers;
pub mod i18next;
pub mod next_intl;
pub mod translation_component;
pub mod use_translation;

use enum_dispatch::enum_dispatch;
use swc_common::Span;
use swc_ecma_ast::{
    AssignExpr, AssignOp, AssignTarget, CallExpr, Expr, Ident, ImportDecl, ImportNamedSpecifier,
    JSXElement, JSXOpeningElement, Pat, SimpleAssignTarget, VarDeclarator,
};

use crate::core::{
    CallKind, LibraryKind, StaticArg,
    scope::{ScopeEntry, ScopeTracker},
};

pub use i18next::I18nextAdapter;
pub use next_intl::NextIntlAdapter;
pub use translation_component::TranslationComponentAdapter;
pub use use_translation::UseTranslationAdapter;

/// Name every hook-style library hands out by default.
pub const DEFAULT_FUNCTION_NAMES: &[&str] = &["t"];

/// A node that may declare a translation binding.
#[derive(Debug, Clone, Copy)]
pub enum DeclarationSite<'a> {
    VarDeclarator(&'a VarDeclarator),
    /// Plain `=` assignment to an identifier.
    Assign(&'a AssignExpr),
    /// One named specifier of an import declaration.
    Import {
        decl: &'a ImportDecl,
        specifier: &'a ImportNamedSpecifier,
    },
    JsxElement(&'a JSXElement),
}

/// Left-hand side of a variable declaration or assignment.
#[derive(Debug, Clone, Copy)]
pub enum DeclTarget<'a> {
    Pat(&'a Pat),
    Ident(&'a Ident),
}

impl<'a> DeclarationSite<'a> {
    /// Target and initializer of a declarator or plain assignment.
    pub fn assigned_value(&self) -> Option<(DeclTarget<'a>, &'a Expr)> {
        match self {
            DeclarationSite::VarDeclarator(decl) => {
                let init = decl.init.as_deref()?;
                Some((DeclTarget::Pat(&decl.name), init))
            }
            DeclarationSite::Assign(assign) => {
                if assign.op != AssignOp::Assign {
                    return None;
                }
                match &assign.left {
                    AssignTarget::Simple(SimpleAssignTarget::Ident(binding)) => {
                        Some((DeclTarget::Ident(&binding.id), &assign.right))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            DeclarationSite::VarDeclarator(decl) => decl.span,
            DeclarationSite::Assign(assign) => assign.span,
            DeclarationSite::Import { specifier, .. } => specifier.span,
            DeclarationSite::JsxElement(element) => element.opening.span,
        }
    }
}

/// A node that may request a key.
#[derive(Debug, Clone, Copy)]
pub enum CallSite<'a> {
    Call(&'a CallExpr),
    JsxElement(&'a JSXOpeningElement),
}

/// Where a recognized binding must be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingTarget {
    /// The scope that is current when the declaring node is visited.
    Scope,
    /// The nearest enclosing function scope (`var` declarations).
    FunctionScope,
    /// The scope of the function with this span (render-prop children).
    FunctionParam(Span),
}

/// A recognized translation-binding declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSpec {
    pub local_name: String,
    pub library: LibraryKind,
    pub namespace: StaticArg,
    pub prefix: StaticArg,
    pub span: Span,
    pub target: BindingTarget,
}

impl BindingSpec {
    pub fn new(
        local_name: impl Into<String>,
        library: LibraryKind,
        namespace: StaticArg,
        prefix: StaticArg,
        span: Span,
    ) -> Self {
        Self {
            local_name: local_name.into(),
            library,
            namespace,
            prefix,
            span,
            target: BindingTarget::Scope,
        }
    }
}

/// The key argument of a usage site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyArgument {
    Literal(String),
    Dynamic,
}

/// A recognized key-usage site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSpec {
    /// Identifier shown as the invoker (`t`, `i18next`, `Trans`).
    pub callee: String,
    /// Identifier whose visible binding supplies the prefix, if any.
    pub binding_name: Option<String>,
    pub library: LibraryKind,
    pub kind: CallKind,
    pub key: KeyArgument,
    /// Per-call namespace override (`t("key", { ns: "other" })`, `<Trans ns>`).
    pub namespace: Option<String>,
    pub span: Span,
}

/// Capability every library adapter provides.
#[enum_dispatch]
pub trait LibraryAdapter {
    fn kind(&self) -> LibraryKind;

    /// Recognize a translation-binding declaration at `site`.
    fn match_binding_declaration(&self, site: &DeclarationSite) -> Option<BindingSpec>;

    /// Recognize a key usage at `site`, given the bindings visible there.
    fn match_key_call(&self, site: &CallSite, scopes: &ScopeTracker) -> Option<CallSpec>;
}

#[enum_dispatch(LibraryAdapter)]
#[derive(Debug, Clone, Copy)]
pub enum Adapter {
    I18next(I18nextAdapter),
    UseTranslation(UseTranslationAdapter),
    TranslationComponent(TranslationComponentAdapter),
    NextIntl(NextIntlAdapter),
}

impl From<LibraryKind> for Adapter {
    fn from(kind: LibraryKind) -> Self {
        match kind {
            LibraryKind::I18next => I18nextAdapter.into(),
            LibraryKind::UseTranslation => UseTranslationAdapter.into(),
            LibraryKind::TranslationComponent => TranslationComponentAdapter.into(),
            LibraryKind::NextIntl => NextIntlAdapter.into(),
        }
    }
}

/// Build the adapter list for the enabled libraries, keeping their order
/// and dropping duplicates.
pub fn adapters_for(kinds: &[LibraryKind]) -> Vec<Adapter> {
    let mut seen = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if !seen.contains(kind) {
            seen.push(*kind);
        }
    }
    seen.into_iter().map(Adapter::from).collect()
}

/// Whether an adapter of `kind` may treat a call through `name` as its own.
///
/// A visible translation binding is claimed only by the adapter that created
/// it. An unbound name is claimed when it is one of `default_names`. A name
/// shadowed by a plain local is never claimed.
pub(crate) fn claims_identifier(
    kind: LibraryKind,
    name: &str,
    scopes: &ScopeTracker,
    default_names: &[&str],
) -> bool {
    match scopes.lookup(name) {
        Some(ScopeEntry::Translation(binding)) => binding.library == kind,
        Some(ScopeEntry::Shadowed) => false,
        None => default_names.contains(&name),
    }
}
