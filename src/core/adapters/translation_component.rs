//! Render-prop component convention.
//!
//! ```jsx
//! <Translation keyPrefix="prefix" ns="common">
//!   {(t) => <p>{t("key")}</p>}
//! </Translation>
//! ```
//!
//! The binding lives in the child function's scope only, so the adapter
//! hands the resolver a [`BindingTarget::FunctionParam`] rather than
//! declaring anything where the element itself is visited.

use swc_ecma_ast::Pat;

use crate::core::{
    CallKind, LibraryKind,
    adapters::{
        BindingSpec, BindingTarget, CallSite, CallSpec, DeclarationSite, LibraryAdapter,
        claims_identifier,
        helpers::{
            callee_ident, element_name, jsx_attr_static, key_argument, options_namespace,
            render_prop_function,
        },
    },
    scope::ScopeTracker,
};

const COMPONENT_NAME: &str = "Translation";

#[derive(Debug, Clone, Copy, Default)]
pub struct TranslationComponentAdapter;

impl LibraryAdapter for TranslationComponentAdapter {
    fn kind(&self) -> LibraryKind {
        LibraryKind::TranslationComponent
    }

    fn match_binding_declaration(&self, site: &DeclarationSite) -> Option<BindingSpec> {
        let DeclarationSite::JsxElement(element) = site else {
            return None;
        };
        if element_name(&element.opening) != Some(COMPONENT_NAME) {
            return None;
        }

        let (function_span, param) = render_prop_function(&element.children)?;
        let Pat::Ident(param) = param else {
            return None;
        };

        let mut spec = BindingSpec::new(
            param.id.sym.to_string(),
            self.kind(),
            jsx_attr_static(&element.opening, "ns", true),
            jsx_attr_static(&element.opening, "keyPrefix", false),
            site.span(),
        );
        spec.target = BindingTarget::FunctionParam(function_span);
        Some(spec)
    }

    fn match_key_call(&self, site: &CallSite, scopes: &ScopeTracker) -> Option<CallSpec> {
        let CallSite::Call(call) = site else {
            return None;
        };
        let name = callee_ident(call)?.sym.as_str();
        // Only calls through a render-prop parameter; no default names.
        if !claims_identifier(self.kind(), name, scopes, &[]) {
            return None;
        }
        Some(CallSpec {
            callee: name.to_string(),
            binding_name: Some(name.to_string()),
            library: self.kind(),
            kind: CallKind::Direct,
            key: key_argument(&call.args)?,
            namespace: options_namespace(&call.args, 1),
            span: call.span,
        })
    }
}
