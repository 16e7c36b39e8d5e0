use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The i18n API conventions the analyzer understands.
///
/// Each kind is backed by one adapter in `crate::core::adapters`. The
/// configuration order of enabled kinds also decides which adapter claims an
/// unbound `t(...)` call when several could.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryKind {
    /// Plain-function library: `i18next.t`, `getFixedT(lng, ns, keyPrefix)`.
    I18next,
    /// Hook returning `t`, prefix taken from a `keyPrefix` option:
    /// `useTranslation(ns, { keyPrefix })`.
    UseTranslation,
    /// Render-prop component: `<Translation keyPrefix="...">{(t) => ...}</Translation>`.
    TranslationComponent,
    /// Hook whose first positional argument is the prefix:
    /// `useTranslations("prefix")`, `await getTranslations("prefix")`.
    NextIntl,
}

impl LibraryKind {
    pub const ALL: [LibraryKind; 4] = [
        LibraryKind::I18next,
        LibraryKind::UseTranslation,
        LibraryKind::TranslationComponent,
        LibraryKind::NextIntl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryKind::I18next => "i18next",
            LibraryKind::UseTranslation => "use-translation",
            LibraryKind::TranslationComponent => "translation-component",
            LibraryKind::NextIntl => "next-intl",
        }
    }
}

impl std::fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
