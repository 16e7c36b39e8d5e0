//! AST inspection helpers shared by the library adapters.

use swc_common::Span;
use swc_ecma_ast::{
    Callee, CallExpr, Expr, ExprOrSpread, Ident, JSXAttr, JSXAttrName, JSXAttrOrSpread,
    JSXAttrValue, JSXElementName, JSXExpr, JSXOpeningElement, Lit, MemberProp, ObjectLit,
    ObjectPatProp, Pat, Prop, PropName, PropOrSpread,
};

use crate::core::{
    StaticArg,
    adapters::{DeclTarget, KeyArgument},
};

/// Strip parentheses and TypeScript-only wrappers (`as`, `satisfies`, `as const`).
pub fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        Expr::TsAs(ts_as) => unwrap_paren(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_paren(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_paren(&ts_sat.expr),
        Expr::TsNonNull(non_null) => unwrap_paren(&non_null.expr),
        _ => expr,
    }
}

/// Like [`unwrap_paren`], also looking through `await`.
pub fn unwrap_await(expr: &Expr) -> &Expr {
    match unwrap_paren(expr) {
        Expr::Await(await_expr) => unwrap_await(&await_expr.arg),
        other => other,
    }
}

/// Value of a string literal or an expression-free template literal.
pub fn static_string(expr: &Expr) -> Option<String> {
    match unwrap_paren(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|s| s.as_str())
            .map(|s| s.to_string()),
        _ => None,
    }
}

/// `null` or `undefined`.
fn is_nullish(expr: &Expr) -> bool {
    match unwrap_paren(expr) {
        Expr::Lit(Lit::Null(_)) => true,
        Expr::Ident(ident) => ident.sym.as_str() == "undefined",
        _ => false,
    }
}

/// Interpret a prefix argument.
///
/// Absent, nullish and empty-string arguments mean "no prefix".
pub fn prefix_arg(expr: Option<&Expr>) -> StaticArg {
    let Some(expr) = expr else {
        return StaticArg::NONE;
    };
    if is_nullish(expr) {
        return StaticArg::NONE;
    }
    match static_string(expr) {
        Some(value) if value.is_empty() => StaticArg::NONE,
        Some(value) => StaticArg::Known(Some(value)),
        None => StaticArg::Dynamic,
    }
}

/// Interpret a namespace argument.
///
/// Same as [`prefix_arg`], and an array literal contributes its first
/// element (the default namespace).
pub fn namespace_arg(expr: Option<&Expr>) -> StaticArg {
    if let Some(expr) = expr
        && let Expr::Array(array) = unwrap_paren(expr)
    {
        return match array.elems.first() {
            None => StaticArg::NONE,
            Some(Some(ExprOrSpread { spread: None, expr })) => prefix_arg(Some(expr)),
            Some(_) => StaticArg::Dynamic,
        };
    }
    prefix_arg(expr)
}

/// Positional argument `index`, `None` when absent.
pub fn positional_arg(args: &[ExprOrSpread], index: usize) -> Option<&Expr> {
    args.get(index).map(|arg| &*arg.expr)
}

/// Whether a spread argument (`f(...args)`) hides the real position of
/// argument `index`.
pub fn spread_hides(args: &[ExprOrSpread], index: usize) -> bool {
    args.iter().take(index + 1).any(|arg| arg.spread.is_some())
}

/// Interpret positional argument `index` as a prefix or namespace.
pub fn positional_static(args: &[ExprOrSpread], index: usize, as_namespace: bool) -> StaticArg {
    if spread_hides(args, index) {
        return StaticArg::Dynamic;
    }
    let arg = positional_arg(args, index);
    if as_namespace {
        namespace_arg(arg)
    } else {
        prefix_arg(arg)
    }
}

/// The key argument of a translation call. `None` when there are no arguments.
pub fn key_argument(args: &[ExprOrSpread]) -> Option<KeyArgument> {
    let first = args.first()?;
    if first.spread.is_some() {
        return Some(KeyArgument::Dynamic);
    }
    Some(match static_string(&first.expr) {
        Some(key) => KeyArgument::Literal(key),
        None => KeyArgument::Dynamic,
    })
}

/// Per-call namespace override from an options argument: `t("key", { ns: "other" })`.
pub fn options_namespace(args: &[ExprOrSpread], index: usize) -> Option<String> {
    if spread_hides(args, index) {
        return None;
    }
    let Expr::Object(object) = unwrap_paren(positional_arg(args, index)?) else {
        return None;
    };
    match object_field(object, "ns") {
        ObjectField::Found(value) => namespace_arg(Some(value)).value().map(String::from),
        _ => None,
    }
}

/// Static name of an object literal key (`foo:` or `"foo":`).
pub fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// Lookup result for a field in an object literal.
pub enum ObjectField<'a> {
    Found(&'a Expr),
    /// Not present, and the object has no spread that could supply it.
    Missing,
    /// Not present, but a spread element might supply it.
    Unknown,
}

/// Find the value of `field` in an object literal, last one wins.
pub fn object_field<'a>(object: &'a ObjectLit, field: &str) -> ObjectField<'a> {
    let mut result = ObjectField::Missing;
    for prop in &object.props {
        match prop {
            PropOrSpread::Spread(_) => result = ObjectField::Unknown,
            PropOrSpread::Prop(prop) => match &**prop {
                Prop::KeyValue(kv) if prop_name(&kv.key).as_deref() == Some(field) => {
                    result = ObjectField::Found(&kv.value);
                }
                // `{ keyPrefix }` shorthand refers to a variable
                Prop::Shorthand(ident) if ident.sym.as_str() == field => {
                    result = ObjectField::Unknown;
                }
                _ => {}
            },
        }
    }
    result
}

/// Interpret an options argument field holding a prefix/namespace.
///
/// Absent options or nullish options give no value; options that are not an
/// object literal are `Dynamic`.
pub fn option_field(options: Option<&Expr>, field: &str, as_namespace: bool) -> StaticArg {
    let Some(options) = options else {
        return StaticArg::NONE;
    };
    if is_nullish(options) {
        return StaticArg::NONE;
    }
    let Expr::Object(object) = unwrap_paren(options) else {
        return StaticArg::Dynamic;
    };
    match object_field(object, field) {
        ObjectField::Found(value) if as_namespace => namespace_arg(Some(value)),
        ObjectField::Found(value) => prefix_arg(Some(value)),
        ObjectField::Missing => StaticArg::NONE,
        ObjectField::Unknown => StaticArg::Dynamic,
    }
}

/// Callee identifier of `name(...)`.
pub fn callee_ident(call: &CallExpr) -> Option<&Ident> {
    if let Callee::Expr(callee) = &call.callee
        && let Expr::Ident(ident) = unwrap_paren(callee)
    {
        return Some(ident);
    }
    None
}

/// Object identifier and member name of `object.member(...)`.
pub fn callee_member(call: &CallExpr) -> Option<(&Ident, &str)> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    member_of_ident(unwrap_paren(callee))
}

/// Object identifier and member name of `object.member`.
pub fn member_of_ident(expr: &Expr) -> Option<(&Ident, &str)> {
    if let Expr::Member(member) = expr
        && let Expr::Ident(object) = unwrap_paren(&member.obj)
        && let MemberProp::Ident(prop) = &member.prop
    {
        return Some((object, prop.sym.as_str()));
    }
    None
}

/// The call expression `expr` evaluates to, looking through `await`.
pub fn as_call(expr: &Expr) -> Option<&CallExpr> {
    match unwrap_await(expr) {
        Expr::Call(call) => Some(call),
        _ => None,
    }
}

/// Whether `call` invokes the function `name`, directly or as a member
/// of any object (`name(...)`, `obj.name(...)`).
pub fn calls_function(call: &CallExpr, name: &str) -> bool {
    callee_ident(call).is_some_and(|ident| ident.sym.as_str() == name)
        || callee_member(call).is_some_and(|(_, member)| member == name)
}

/// Name declared by a plain identifier target (`const t = ...`, `t = ...`).
pub fn ident_target(target: DeclTarget) -> Option<String> {
    match target {
        DeclTarget::Ident(ident) => Some(ident.sym.to_string()),
        DeclTarget::Pat(Pat::Ident(binding)) => Some(binding.id.sym.to_string()),
        DeclTarget::Pat(_) => None,
    }
}

/// Local name that receives property `key` in an object pattern.
///
/// `{ t }` yields `t`, `{ t: t2 }` yields `t2`, `{ t = fallback }` yields `t`.
pub fn destructured_name(target: DeclTarget, key: &str) -> Option<String> {
    let DeclTarget::Pat(Pat::Object(object)) = target else {
        return None;
    };
    object.props.iter().find_map(|prop| match prop {
        ObjectPatProp::KeyValue(kv) if prop_name(&kv.key).as_deref() == Some(key) => {
            match &*kv.value {
                Pat::Ident(binding) => Some(binding.id.sym.to_string()),
                Pat::Assign(assign) => match &*assign.left {
                    Pat::Ident(binding) => Some(binding.id.sym.to_string()),
                    _ => None,
                },
                _ => None,
            }
        }
        ObjectPatProp::Assign(assign) if assign.key.sym.as_str() == key => {
            Some(assign.key.sym.to_string())
        }
        _ => None,
    })
}

/// Name bound by the first element of an array pattern (`const [t] = ...`).
pub fn first_array_element(target: DeclTarget) -> Option<String> {
    let DeclTarget::Pat(Pat::Array(array)) = target else {
        return None;
    };
    match array.elems.first()? {
        Some(Pat::Ident(binding)) => Some(binding.id.sym.to_string()),
        _ => None,
    }
}

/// Collect every identifier a pattern binds.
pub fn binding_names(pat: &Pat, names: &mut Vec<String>) {
    match pat {
        Pat::Ident(binding) => names.push(binding.id.sym.to_string()),
        Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                binding_names(elem, names);
            }
        }
        Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    ObjectPatProp::KeyValue(kv) => binding_names(&kv.value, names),
                    ObjectPatProp::Assign(assign) => names.push(assign.key.sym.to_string()),
                    ObjectPatProp::Rest(rest) => binding_names(&rest.arg, names),
                }
            }
        }
        Pat::Rest(rest) => binding_names(&rest.arg, names),
        Pat::Assign(assign) => binding_names(&assign.left, names),
        _ => {}
    }
}

/// Element name of `<Name ...>` when it is a plain identifier.
pub fn element_name(opening: &JSXOpeningElement) -> Option<&str> {
    match &opening.name {
        JSXElementName::Ident(ident) => Some(ident.sym.as_str()),
        _ => None,
    }
}

/// Attribute `name` of a JSX element.
pub fn jsx_attr<'a>(opening: &'a JSXOpeningElement, name: &str) -> Option<&'a JSXAttr> {
    opening.attrs.iter().find_map(|attr| match attr {
        JSXAttrOrSpread::JSXAttr(attr)
            if matches!(&attr.name, JSXAttrName::Ident(ident) if ident.sym.as_str() == name) =>
        {
            Some(attr)
        }
        _ => None,
    })
}

/// Expression inside `attr={...}`.
pub fn jsx_attr_expr(attr: &JSXAttr) -> Option<&Expr> {
    if let Some(JSXAttrValue::JSXExprContainer(container)) = &attr.value
        && let JSXExpr::Expr(expr) = &container.expr
    {
        return Some(expr);
    }
    None
}

/// Whether an element carries a spread attribute (`<X {...props} />`).
pub fn has_spread_attr(opening: &JSXOpeningElement) -> bool {
    opening
        .attrs
        .iter()
        .any(|attr| matches!(attr, JSXAttrOrSpread::SpreadElement(_)))
}

/// Static value of attribute `name`: `name="x"`, `name={"x"}` or `name={["x"]}`.
pub fn jsx_attr_static(opening: &JSXOpeningElement, name: &str, as_namespace: bool) -> StaticArg {
    let Some(attr) = jsx_attr(opening, name) else {
        return if has_spread_attr(opening) {
            StaticArg::Dynamic
        } else {
            StaticArg::NONE
        };
    };
    match &attr.value {
        Some(JSXAttrValue::Str(s)) => match s.value.as_str() {
            Some("") | None => StaticArg::NONE,
            Some(value) => StaticArg::known(value),
        },
        Some(JSXAttrValue::JSXExprContainer(_)) => {
            let expr = jsx_attr_expr(attr);
            if expr.is_none() {
                return StaticArg::NONE;
            }
            if as_namespace {
                namespace_arg(expr)
            } else {
                prefix_arg(expr)
            }
        }
        // `<X name />` is `name={true}`
        None => StaticArg::Dynamic,
        Some(_) => StaticArg::Dynamic,
    }
}

/// Key carried by attribute `name`, `None` when the attribute is absent.
pub fn jsx_attr_key(opening: &JSXOpeningElement, name: &str) -> Option<KeyArgument> {
    let attr = jsx_attr(opening, name)?;
    Some(match &attr.value {
        Some(JSXAttrValue::Str(s)) => match s.value.as_str() {
            Some(value) => KeyArgument::Literal(value.to_string()),
            None => KeyArgument::Dynamic,
        },
        _ => match jsx_attr_expr(attr).and_then(static_string) {
            Some(value) => KeyArgument::Literal(value),
            None => KeyArgument::Dynamic,
        },
    })
}

/// Span of the first function passed as a child expression:
/// `<X>{(t) => ...}</X>` or `<X>{function (t) { ... }}</X>`.
///
/// Returns the function span and its first parameter pattern.
pub fn render_prop_function(children: &[swc_ecma_ast::JSXElementChild]) -> Option<(Span, &Pat)> {
    use swc_ecma_ast::JSXElementChild;

    children.iter().find_map(|child| {
        let JSXElementChild::JSXExprContainer(container) = child else {
            return None;
        };
        let JSXExpr::Expr(expr) = &container.expr else {
            return None;
        };
        match unwrap_paren(expr) {
            Expr::Arrow(arrow) => arrow.params.first().map(|param| (arrow.span, param)),
            Expr::Fn(fn_expr) => fn_expr
                .function
                .params
                .first()
                .map(|param| (fn_expr.function.span, &param.pat)),
            _ => None,
        }
    })
}
