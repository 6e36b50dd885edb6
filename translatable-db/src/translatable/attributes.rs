use serde_json::Value;

use super::Translatable;
use crate::models::locale::Locale;
use crate::models::locale_context::LocaleContext;
use crate::models::record::{Record, TranslationRecord};
use crate::models::translatable_definition::FieldKind;
use crate::utils::{display_value, is_blank};

impl<P: Record, T: TranslationRecord> Translatable<P, T> {
    /// Reads an attribute in the context's active locale.
    ///
    /// Base attributes come from the entity. Translated attributes come from
    /// the resolved translation; when its value is empty and the instance
    /// falls back, the first non-empty value along the active locale's chain
    /// is returned instead.
    pub fn attribute(&self, ctx: &LocaleContext, key: &str) -> Option<Value> {
        match self.definition.field_kind(key) {
            FieldKind::Base => self.entity.attribute(key).cloned(),
            FieldKind::Translated => {
                let translation = self.get_translation(ctx, None, None)?;
                let value = translation.attribute(key);
                if !is_blank(value) || !self.use_translation_fallback {
                    return value.cloned();
                }
                self.first_fallback_value(ctx, key)
                    .map(|(_, value)| value.clone())
            }
        }
    }

    /// Like [`Self::attribute`], but a value taken from a fallback locale is
    /// prefixed with `"(<locale>) "`.
    pub fn fallback_safe_attribute(&self, ctx: &LocaleContext, key: &str) -> Option<Value> {
        if self.definition.is_translated(key) && self.use_translation_fallback {
            let current = self.translation_by_locale(ctx.locale());
            if is_blank(current.and_then(|t| t.attribute(key))) {
                if let Some((locale, value)) = self.first_fallback_value(ctx, key) {
                    return Some(Value::String(format!("({locale}) {}", display_value(value))));
                }
            }
        }
        self.attribute(ctx, key)
    }

    /// Writes an attribute; translated attributes go to the active locale's
    /// translation, which is created if missing.
    pub fn set_attribute(&mut self, ctx: &LocaleContext, key: &str, value: Value) {
        match self.definition.field_kind(key) {
            FieldKind::Base => self.entity.set_attribute(key, value),
            FieldKind::Translated => self
                .get_translation_or_new(ctx.locale())
                .set_attribute(key, value),
        }
    }

    /// Whether `key` is translated or set on the entity.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.definition.is_translated(key) || self.entity.attribute(key).is_some()
    }

    fn first_fallback_value<'a>(
        &'a self,
        ctx: &'a LocaleContext,
        key: &str,
    ) -> Option<(&'a Locale, &'a Value)> {
        ctx.fallback_chain().iter().find_map(|locale| {
            self.translation_by_locale(locale)
                .and_then(|t| t.attribute(key))
                .filter(|value| !is_blank(Some(*value)))
                .map(|value| (locale, value))
        })
    }
}
