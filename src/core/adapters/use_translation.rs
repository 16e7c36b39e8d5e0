//! Hook conventions where the prefix comes from a `keyPrefix` option.
//!
//! ```jsx
//! const { t } = useTranslation("translation", { keyPrefix: "prefix" });
//! const { t: t2 } = useTranslation();
//! const [t] = useTranslation();
//! const t = useTranslation().t;
//! t("key");
//! <Trans i18nKey="key" t={t} />
//! ```

use swc_ecma_ast::{CallExpr, Expr, MemberProp};

use crate::core::{
    CallKind, LibraryKind, StaticArg,
    adapters::{
        BindingSpec, CallSite, CallSpec, DEFAULT_FUNCTION_NAMES, DeclarationSite, LibraryAdapter,
        claims_identifier,
        helpers::{
            as_call, callee_ident, callee_member, calls_function, destructured_name,
            element_name, first_array_element, ident_target, jsx_attr, jsx_attr_expr,
            jsx_attr_key, jsx_attr_static, key_argument, option_field, options_namespace,
            positional_arg, positional_static, spread_hides, unwrap_paren,
        },
    },
    scope::ScopeTracker,
};

const HOOK_NAME: &str = "useTranslation";
const TRANS_COMPONENT: &str = "Trans";
const METHODS: &[&str] = &["rich"];

#[derive(Debug, Clone, Copy, Default)]
pub struct UseTranslationAdapter;

impl UseTranslationAdapter {
    fn hook_call(expr: &Expr) -> Option<&CallExpr> {
        as_call(expr).filter(|call| calls_function(call, HOOK_NAME))
    }

    /// Namespace (first argument) and `keyPrefix` (options argument) of a hook call.
    fn hook_args(call: &CallExpr) -> (StaticArg, StaticArg) {
        let namespace = positional_static(&call.args, 0, true);
        let prefix = if spread_hides(&call.args, 1) {
            StaticArg::Dynamic
        } else {
            option_field(positional_arg(&call.args, 1), "keyPrefix", false)
        };
        (namespace, prefix)
    }

    fn match_trans(&self, site: &CallSite) -> Option<CallSpec> {
        let CallSite::JsxElement(opening) = site else {
            return None;
        };
        if element_name(opening) != Some(TRANS_COMPONENT) {
            return None;
        }
        let key = jsx_attr_key(opening, "i18nKey")?;
        let binding_name = jsx_attr(opening, "t")
            .and_then(jsx_attr_expr)
            .and_then(|expr| match unwrap_paren(expr) {
                Expr::Ident(ident) => Some(ident.sym.to_string()),
                _ => None,
            });
        Some(CallSpec {
            callee: TRANS_COMPONENT.to_string(),
            binding_name,
            library: self.kind(),
            kind: CallKind::Component(TRANS_COMPONENT.to_string()),
            key,
            namespace: jsx_attr_static(opening, "ns", true).value().map(String::from),
            span: opening.span,
        })
    }
}

impl LibraryAdapter for UseTranslationAdapter {
    fn kind(&self) -> LibraryKind {
        LibraryKind::UseTranslation
    }

    fn match_binding_declaration(&self, site: &DeclarationSite) -> Option<BindingSpec> {
        let (target, init) = site.assigned_value()?;
        let init = unwrap_paren(init);

        // const t = useTranslation().t
        if let Expr::Member(member) = init
            && let MemberProp::Ident(prop) = &member.prop
            && prop.sym.as_str() == "t"
            && let Some(call) = Self::hook_call(&member.obj)
        {
            let (namespace, prefix) = Self::hook_args(call);
            let local_name = ident_target(target)?;
            return Some(BindingSpec::new(
                local_name,
                self.kind(),
                namespace,
                prefix,
                site.span(),
            ));
        }

        let call = Self::hook_call(init)?;
        let local_name =
            destructured_name(target, "t").or_else(|| first_array_element(target))?;
        let (namespace, prefix) = Self::hook_args(call);
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
            return self.match_trans(site);
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
            namespace: options_namespace(&call.args, 1),
            span: call.span,
        })
    }
}
