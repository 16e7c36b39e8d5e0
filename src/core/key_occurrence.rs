//! Key occurrence records emitted by the analyzer.
//!
//! One `KeyOccurrence` is produced per key-usage call site, in document
//! order. It is immutable once emitted.

use serde::{Serialize, Serializer};

use crate::core::{LibraryKind, SourceContext};

/// How the effective key of an occurrence was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionStatus {
    /// A prefix was applied (or the binding carries an unresolved prefix
    /// component, see `KeyOccurrence::unresolved_prefix`).
    Resolved,
    /// No prefix applies: the callee is unbound or the binding has none.
    NoPrefix,
    /// The key argument is not a string literal.
    DynamicKeyUnresolved,
}

impl ResolutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStatus::Resolved => "resolved",
            ResolutionStatus::NoPrefix => "no-prefix",
            ResolutionStatus::DynamicKeyUnresolved => "dynamic-key-unresolved",
        }
    }
}

impl std::fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Syntactic form of the key usage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// `t("key")`
    Direct,
    /// `t.rich("key")`, `i18next.t("key")`: carries the member name.
    Method(String),
    /// `<Trans i18nKey="key" />`: carries the element name.
    Component(String),
}

impl std::fmt::Display for CallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallKind::Direct => write!(f, "direct"),
            CallKind::Method(name) => write!(f, "method:{}", name),
            CallKind::Component(name) => write!(f, "component:{}", name),
        }
    }
}

impl Serialize for CallKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single key usage with its resolved effective key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyOccurrence {
    /// The literal key as written, `None` for dynamic keys.
    pub raw_key: Option<String>,
    /// Prefix-qualified key, `None` when it cannot be computed.
    pub effective_key: Option<String>,
    pub status: ResolutionStatus,
    /// Set when the visible binding has a non-literal prefix or namespace.
    pub unresolved_prefix: bool,
    /// Namespace contributed by the binding (or a per-call `ns` override).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub library: LibraryKind,
    /// Identifier through which the key was requested (`t`, `t2`, `i18next`, `Trans`).
    pub callee: String,
    pub call_kind: CallKind,
    #[serde(flatten)]
    pub context: SourceContext,
}

impl KeyOccurrence {
    pub fn file_path(&self) -> &str {
        self.context.file_path()
    }

    pub fn line(&self) -> usize {
        self.context.line()
    }

    pub fn col(&self) -> usize {
        self.context.col()
    }

    pub fn is_dynamic(&self) -> bool {
        self.status == ResolutionStatus::DynamicKeyUnresolved
    }

    /// Key to show in reports: the effective key when known, otherwise the raw key.
    pub fn display_key(&self) -> Option<&str> {
        self.effective_key.as_deref().or(self.raw_key.as_deref())
    }
}
