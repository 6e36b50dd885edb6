use serde_json::Value;
use tracing::debug;

use super::Translatable;
use crate::models::locale::Locale;
use crate::models::locale_context::LocaleContext;
use crate::models::record::{Record, TranslationRecord};

impl<P: Record, T: TranslationRecord> Translatable<P, T> {
    /// Resolves the translation answering for `locale`.
    ///
    /// `locale` defaults to the context's active locale and `use_fallback` to
    /// the instance flag. An exact match wins; otherwise, with fallback, the
    /// first locale of the fallback chain that has a translation. A locale
    /// without a registered chain has no fallback.
    pub fn get_translation(
        &self,
        ctx: &LocaleContext,
        locale: Option<&Locale>,
        use_fallback: Option<bool>,
    ) -> Option<&T> {
        let locale = locale.unwrap_or(ctx.locale());
        if let Some(translation) = self.translation_by_locale(locale) {
            return Some(translation);
        }
        if !use_fallback.unwrap_or(self.use_translation_fallback) {
            return None;
        }

        let chain = ctx.config().fallback_chain(locale);
        let found = chain
            .iter()
            .find_map(|fallback| self.translation_by_locale(fallback).map(|t| (fallback, t)));
        match found {
            Some((fallback, translation)) => {
                debug!(
                    entity = self.definition.entity_name(),
                    requested = %locale,
                    resolved = %fallback,
                    "Resolved translation through fallback"
                );
                Some(translation)
            }
            None => None,
        }
    }

    /// Alias of [`Self::get_translation`] with an explicit fallback flag.
    pub fn translate(
        &self,
        ctx: &LocaleContext,
        locale: Option<&Locale>,
        with_fallback: bool,
    ) -> Option<&T> {
        self.get_translation(ctx, locale, Some(with_fallback))
    }

    /// The translation for `locale`, or for the first fallback locale that has one.
    pub fn translate_or_default(&self, ctx: &LocaleContext, locale: &Locale) -> Option<&T> {
        self.get_translation(ctx, Some(locale), Some(true))
    }

    /// Alias of [`Self::get_translation_or_new`].
    pub fn translate_or_new(&mut self, locale: &Locale) -> &mut T {
        self.get_translation_or_new(locale)
    }

    /// The translation for exactly `locale`, created in memory if missing.
    pub fn get_translation_or_new(&mut self, locale: &Locale) -> &mut T {
        match self.position_of(locale) {
            Some(i) => &mut self.translations[i],
            None => self.push_new_translation(locale),
        }
    }

    /// Whether a translation exists for exactly `locale` (default: active locale).
    pub fn has_translation(&self, ctx: &LocaleContext, locale: Option<&Locale>) -> bool {
        self.position_of(locale.unwrap_or(ctx.locale())).is_some()
    }

    fn push_new_translation(&mut self, locale: &Locale) -> &mut T {
        let mut translation = T::new_translation(&self.definition);
        translation.set_attribute(
            self.definition.locale_key(),
            Value::String(locale.to_string()),
        );
        debug!(
            entity = self.definition.entity_name(),
            locale = %locale,
            "Created translation"
        );

        let index = self.translations.len();
        self.translations.push(translation);
        &mut self.translations[index]
    }
}
