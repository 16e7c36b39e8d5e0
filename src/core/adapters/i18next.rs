//! Plain-function i18next conventions.
//!
//! ```js
//! const t = i18next.t;
//! const { t: tr } = i18next;
//! import { t as tr } from "i18next";
//! const t = i18next.getFixedT(null, null, "prefix");
//! t("key");
//! i18next.t("key");
//! ```

use swc_ecma_ast::{Expr, ModuleExportName};

use crate::core::{
    CallKind, LibraryKind, StaticArg,
    adapters::{
        BindingSpec, CallSite, CallSpec, DEFAULT_FUNCTION_NAMES, DeclarationSite, LibraryAdapter,
        claims_identifier,
        helpers::{
            as_call, callee_ident, callee_member, calls_function, destructured_name, ident_target,
            key_argument, member_of_ident, options_namespace, positional_static, unwrap_paren,
        },
    },
    scope::ScopeTracker,
};

/// Identifiers conventionally holding the i18next instance.
pub const LIBRARY_OBJECTS: &[&str] = &["i18next", "i18n"];

const MODULE_NAME: &str = "i18next";

#[derive(Debug, Clone, Copy, Default)]
pub struct I18nextAdapter;

impl I18nextAdapter {
    fn is_library_object(name: &str) -> bool {
        LIBRARY_OBJECTS.contains(&name)
    }

    /// Namespace and prefix of a translation-function-valued expression:
    /// `i18next.t` or `getFixedT(lng, ns, keyPrefix)`.
    fn function_value(expr: &Expr) -> Option<(StaticArg, StaticArg)> {
        let expr = unwrap_paren(expr);
        if let Some((object, member)) = member_of_ident(expr)
            && Self::is_library_object(object.sym.as_str())
            && member == "t"
        {
            return Some((StaticArg::NONE, StaticArg::NONE));
        }

        let call = as_call(expr)?;
        if !calls_function(call, "getFixedT") {
            return None;
        }
        Some((
            positional_static(&call.args, 1, true),
            positional_static(&call.args, 2, false),
        ))
    }
}

impl LibraryAdapter for I18nextAdapter {
    fn kind(&self) -> LibraryKind {
        LibraryKind::I18next
    }

    fn match_binding_declaration(&self, site: &DeclarationSite) -> Option<BindingSpec> {
        if let DeclarationSite::Import { decl, specifier } = site {
            if decl.src.value.as_str() != Some(MODULE_NAME) {
                return None;
            }
            let imported = match &specifier.imported {
                Some(ModuleExportName::Ident(ident)) => ident.sym.to_string(),
                Some(ModuleExportName::Str(s)) => s.value.to_string_lossy().to_string(),
                None => specifier.local.sym.to_string(),
            };
            if imported != "t" {
                return None;
            }
            return Some(BindingSpec::new(
                specifier.local.sym.to_string(),
                self.kind(),
                StaticArg::NONE,
                StaticArg::NONE,
                site.span(),
            ));
        }

        let (target, init) = site.assigned_value()?;

        // const { t: tr } = i18next
        if let Expr::Ident(object) = unwrap_paren(init)
            && Self::is_library_object(object.sym.as_str())
        {
            let local_name = destructured_name(target, "t")?;
            return Some(BindingSpec::new(
                local_name,
                self.kind(),
                StaticArg::NONE,
                StaticArg::NONE,
                site.span(),
            ));
        }

        let local_name = ident_target(target)?;
        let (namespace, prefix) = Self::function_value(init)?;
        Some(BindingSpec::new(
            local_name,
            self.kind(),
            namespace,
            prefix,
            site.span(),
        ))
    }

    fn match_key_call(&self, site: &CallSite, scopes: &ScopeTracker) -> Option<CallSpec> {
        let CallSite::Call(call) = site else {
            return None;
        };

        if let Some(ident) = callee_ident(call) {
            let name = ident.sym.as_str();
            if !claims_identifier(self.kind(), name, scopes, DEFAULT_FUNCTION_NAMES) {
                return None;
            }
            return Some(CallSpec {
                callee: name.to_string(),
                binding_name: Some(name.to_string()),
                library: self.kind(),
                kind: CallKind::Direct,
                key: key_argument(&call.args)?,
                namespace: options_namespace(&call.args, 1),
                span: call.span,
            });
        }

        // i18next.t("key") on the library object itself
        let (object, member) = callee_member(call)?;
        let object_name = object.sym.as_str();
        if member != "t" || !Self::is_library_object(object_name) || scopes.lookup(object_name).is_some()
        {
            return None;
        }
        Some(CallSpec {
            callee: object_name.to_string(),
            binding_name: None,
            library: self.kind(),
            kind: CallKind::Method(member.to_string()),
            key: key_argument(&call.args)?,
            namespace: options_namespace(&call.args, 1),
            span: call.span,
        })
    }
}
