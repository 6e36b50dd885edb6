use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::locale::Locale;
use crate::models::locale_context::LocaleContext;
use crate::models::record::TranslationRecord;
use crate::models::translatable_definition::TranslatableDefinition;
use crate::utils::{like_match, text_value};

/// Placeholder value `translated_in` treats as "not translated".
pub const UNTRANSLATED_PLACEHOLDER: &str = "%";

/// # Documentation
/// A composable predicate over an entity's translations.
///
/// `WithTranslation` restricts which translation rows are eager-loaded; every
/// other variant filters primary entities by the translations they have.
/// Scopes evaluate in memory through [`TranslationScope::matches`] and
/// [`TranslationScope::filters_translation`]; storage backends render them to
/// their own query language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TranslationScope {
    /// Eager-load only translations in these locales
    WithTranslation { locales: Vec<Locale> },

    /// Has a translation whose `key` equals `value`, optionally in one locale
    WhereTranslation {
        key: String,
        value: Value,
        locale: Option<Locale>,
    },

    /// Has a translation whose `key` is `LIKE` `pattern`, optionally with a
    /// locale `LIKE` the locale pattern
    WhereTranslationLike {
        key: String,
        pattern: String,
        locale: Option<String>,
    },

    /// Has a translation in `locale`; with a key, that field must differ from `"%"`
    TranslatedIn { locale: Locale, key: Option<String> },

    /// Has at least one translation
    Translated,
}

impl TranslationScope {
    /// Current locale, plus its fallback chain when the definition falls back.
    pub fn with_translation(ctx: &LocaleContext, definition: &TranslatableDefinition) -> Self {
        let mut locales = vec![ctx.locale().clone()];
        if definition.use_translation_fallback() {
            for locale in ctx.fallback_chain() {
                if !locales.contains(locale) {
                    locales.push(locale.clone());
                }
            }
        }
        TranslationScope::WithTranslation { locales }
    }

    pub fn where_translation(
        key: impl Into<String>,
        value: impl Into<Value>,
        locale: Option<Locale>,
    ) -> Self {
        TranslationScope::WhereTranslation {
            key: key.into(),
            value: value.into(),
            locale,
        }
    }

    pub fn where_translation_like(
        key: impl Into<String>,
        pattern: impl Into<String>,
        locale: Option<&str>,
    ) -> Self {
        TranslationScope::WhereTranslationLike {
            key: key.into(),
            pattern: pattern.into(),
            locale: locale.map(str::to_string),
        }
    }

    pub fn translated_in(locale: Locale, key: Option<&str>) -> Self {
        TranslationScope::TranslatedIn {
            locale,
            key: key.map(str::to_string),
        }
    }

    pub fn translated() -> Self {
        TranslationScope::Translated
    }

    /// True for scopes that restrict loaded translations rather than entities.
    pub fn is_eager_load(&self) -> bool {
        matches!(self, TranslationScope::WithTranslation { .. })
    }

    /// Whether an eager load under this scope keeps `translation`.
    pub fn filters_translation<T: TranslationRecord>(&self, translation: &T, locale_key: &str) -> bool {
        match self {
            TranslationScope::WithTranslation { locales } => translation
                .locale_value(locale_key)
                .is_some_and(|l| locales.iter().any(|locale| locale == l)),
            _ => true,
        }
    }

    /// Whether an entity owning `translations` satisfies this scope.
    ///
    /// Values are compared in their text form, so `2024` matches `"2024"`
    /// and `"20%"` the same way a `::text` comparison in SQL does.
    pub fn matches<T: TranslationRecord>(&self, translations: &[T], locale_key: &str) -> bool {
        match self {
            TranslationScope::WithTranslation { .. } => true,
            TranslationScope::Translated => !translations.is_empty(),
            TranslationScope::WhereTranslation { key, value, locale } => {
                let Some(expected) = text_value(value) else {
                    return false;
                };
                translations.iter().any(|t| {
                    t.attribute(key).and_then(text_value).as_deref() == Some(expected.as_str())
                        && locale
                            .as_ref()
                            .map_or(true, |l| t.locale_value(locale_key) == Some(l.as_str()))
                })
            }
            TranslationScope::WhereTranslationLike {
                key,
                pattern,
                locale,
            } => translations.iter().any(|t| {
                t.attribute(key)
                    .and_then(text_value)
                    .is_some_and(|v| like_match(pattern, &v))
                    && locale.as_ref().map_or(true, |l| {
                        t.locale_value(locale_key).is_some_and(|v| like_match(l, v))
                    })
            }),
            TranslationScope::TranslatedIn { locale, key } => translations.iter().any(|t| {
                t.locale_value(locale_key) == Some(locale.as_str())
                    && key.as_ref().map_or(true, |k| {
                        t.attribute(k)
                            .and_then(text_value)
                            .is_some_and(|v| v != UNTRANSLATED_PLACEHOLDER)
                    })
            }),
        }
    }
}
