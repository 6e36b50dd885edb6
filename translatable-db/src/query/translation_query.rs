use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::translation_scope::TranslationScope;
use crate::models::locale::Locale;
use crate::models::locale_context::LocaleContext;
use crate::models::record::TranslationRecord;
use crate::models::translatable_definition::TranslatableDefinition;

/// Conjunction of translation scopes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationQuery {
    scopes: Vec<TranslationScope>,
}

impl TranslationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(mut self, scope: TranslationScope) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn with_translation(self, ctx: &LocaleContext, definition: &TranslatableDefinition) -> Self {
        self.scope(TranslationScope::with_translation(ctx, definition))
    }

    pub fn where_translation(
        self,
        key: impl Into<String>,
        value: impl Into<Value>,
        locale: Option<Locale>,
    ) -> Self {
        self.scope(TranslationScope::where_translation(key, value, locale))
    }

    pub fn where_translation_like(
        self,
        key: impl Into<String>,
        pattern: impl Into<String>,
        locale: Option<&str>,
    ) -> Self {
        self.scope(TranslationScope::where_translation_like(key, pattern, locale))
    }

    pub fn translated_in(self, locale: Locale, key: Option<&str>) -> Self {
        self.scope(TranslationScope::translated_in(locale, key))
    }

    pub fn translated(self) -> Self {
        self.scope(TranslationScope::translated())
    }

    pub fn scopes(&self) -> &[TranslationScope] {
        &self.scopes
    }

    /// The eager-load restriction; the last one wins when several were added.
    pub fn eager_load(&self) -> Option<&TranslationScope> {
        self.scopes.iter().rev().find(|s| s.is_eager_load())
    }

    /// Scopes filtering entities, in the order they were added.
    pub fn filters(&self) -> impl Iterator<Item = &TranslationScope> {
        self.scopes.iter().filter(|s| !s.is_eager_load())
    }

    /// Whether an entity owning `translations` satisfies every scope.
    pub fn matches<T: TranslationRecord>(&self, translations: &[T], locale_key: &str) -> bool {
        self.filters().all(|s| s.matches(translations, locale_key))
    }
}
