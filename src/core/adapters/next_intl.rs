//! Hook conventions where the first positional argument is the prefix.
//!
//! ```jsx
//! const t = useTranslations("prefix");
//! const t = await getTranslations("prefix");
//! const t = await getTranslations({ locale, namespace: "prefix" });
//! const { t: t2 } = useTranslations("prefix");
//! t("key"); t.rich("key", { b: (chunks) => <b>{chunks}</b> }); t.raw("key");
//! ```

use swc_ecma_ast::{CallExpr, Expr};

use crate::core::{
    CallKind, LibraryKind, StaticArg,
    adapters::{
        BindingSpec, CallSite, CallSpec, DEFAULT_FUNCTION_NAMES, DeclarationSite, LibraryAdapter,
        claims_identifier,
        helpers::{
            as_call, callee_ident, callee_member, calls_function, destructured_name, ident_target,
            key_argument, option_field, positional_arg, positional_static, spread_hides,
            unwrap_paren,
        },
    },
    scope::ScopeTracker,
};

const HOOK_NAMES: &[&str] = &["useTranslations", "getTranslations"];
const METHODS: &[&str] = &["rich", "markup", "raw", "has"];

#[derive(Debug, Clone, Copy, Default)]
pub struct NextIntlAdapter;

impl NextIntlAdapter {
    fn hook_call(expr: &Expr) -> Option<&CallExpr> {
        as_call(expr).filter(|call| HOOK_NAMES.iter().any(|name| calls_function(call, name)))
    }

    /// Prefix from `("prefix")` or `({ namespace: "prefix" })`.
    fn prefix(call: &CallExpr) -> StaticArg {
        if spread_hides(&call.args, 0) {
            return StaticArg::Dynamic;
        }
        match positional_arg(&call.args, 0).map(unwrap_paren) {
            Some(Expr::Object(_)) => option_field(positional_arg(&call.args, 0), "namespace", false),
            _ => positional_static(&call.args, 0, false),
        }
    }
}

impl LibraryAdapter for NextIntlAdapter {
    fn kind(&self) -> LibraryKind {
        LibraryKind::NextIntl
    }

    fn match_binding_declaration(&self, site: &DeclarationSite) -> Option<BindingSpec> {
        let (target, init) = site.assigned_value()?;
        let call = Self::hook_call(init)?;
        let local_name = ident_target(target).or_else(|| destructured_name(target, "t"))?;
        Some(BindingSpec::new(
            local_name,
            self.kind(),
            StaticArg::NONE,
            Self::prefix(call),
            site.span(),
        ))
    }

    fn match_key_call(&self, site: &CallSite, scopes: &ScopeTracker) -> Option<CallSpec> {
        let CallSite::Call(call) = site else {
            return None;
        };

        let (name, kind) = if let Some(ident) = callee_ident(call) {
            (ident.sym.as_str(), CallKind::Direct)
        } else {
            let (object, member) = callee_member(call)?;
            if !METHODS.contains(&member) {
                return None;
            }
            (object.sym.as_str(), CallKind::Method(member.to_string()))
        };

        if !claims_identifier(self.kind(), name, scopes, DEFAULT_FUNCTION_NAMES) {
            return None;
        }
        Some(CallSpec {
            callee: name.to_string(),
            binding_name: Some(name.to_string()),
            library: self.kind(),
            kind,
            key: key_argument(&call.args)?,
            namespace: None,
            span: call.span,
        })
    }
}
