//! Key extraction: one [`KeyOccurrence`] per recognized call site.

use crate::core::{
    KeyOccurrence, ResolutionStatus, SourceContext, StaticArg,
    adapters::{CallSpec, KeyArgument},
    scope::ScopeTracker,
};

/// Join a prefix and a raw key. An empty prefix adds no separator.
pub fn compose_key(prefix: &str, raw_key: &str) -> String {
    if prefix.is_empty() {
        raw_key.to_string()
    } else {
        format!("{}.{}", prefix, raw_key)
    }
}

/// Resolve `spec` against the bindings visible in `scopes`.
pub fn extract_key(spec: CallSpec, scopes: &ScopeTracker, context: SourceContext) -> KeyOccurrence {
    let binding = spec
        .binding_name
        .as_deref()
        .and_then(|name| scopes.binding(name));

    let unresolved_prefix =
        binding.is_some_and(|b| b.prefix.is_dynamic() || b.namespace.is_dynamic());
    let namespace = spec
        .namespace
        .or_else(|| binding.and_then(|b| b.namespace.value().map(String::from)));

    let (raw_key, effective_key, status) = match spec.key {
        KeyArgument::Dynamic => (None, None, ResolutionStatus::DynamicKeyUnresolved),
        KeyArgument::Literal(raw) => {
            let (effective, status) = match binding.map(|b| &b.prefix) {
                None | Some(StaticArg::Known(None)) => {
                    (Some(raw.clone()), ResolutionStatus::NoPrefix)
                }
                Some(StaticArg::Known(Some(prefix))) => {
                    (Some(compose_key(prefix, &raw)), ResolutionStatus::Resolved)
                }
                // The raw key is kept; the prefixed form cannot be known.
                Some(StaticArg::Dynamic) => (None, ResolutionStatus::Resolved),
            };
            (Some(raw), effective, status)
        }
    };

    KeyOccurrence {
        raw_key,
        effective_key,
        status,
        unresolved_prefix,
        namespace,
        library: spec.library,
        callee: spec.callee,
        call_kind: spec.kind,
        context,
    }
}
