//! Translation resolution for a primary entity and its per-locale records.
//!
//! [`Translatable`] owns an entity together with its translation collection
//! and resolves which translation answers for a locale, falling back along
//! the configured chain when asked to. Reads are synchronous and never touch
//! storage; [`Translatable::save`] and [`Translatable::load`] go through the
//! repository traits.

pub mod attributes;
pub mod fill;
pub mod get_translation;
pub mod persistence;
pub mod to_array;

use std::sync::Arc;
use tracing::warn;

use crate::models::locale::Locale;
use crate::models::record::{Record, TranslationRecord};
use crate::models::translatable_definition::TranslatableDefinition;

/// A primary entity with its translations, at most one per locale.
#[derive(Debug, Clone)]
pub struct Translatable<P, T> {
    entity: P,
    translations: Vec<T>,
    definition: Arc<TranslatableDefinition>,
    use_translation_fallback: bool,
}

impl<P: Record, T: TranslationRecord> Translatable<P, T> {
    /// Wraps an entity without any translations.
    pub fn new(entity: P, definition: Arc<TranslatableDefinition>) -> Self {
        let use_translation_fallback = definition.use_translation_fallback();
        Self {
            entity,
            translations: Vec::new(),
            definition,
            use_translation_fallback,
        }
    }

    /// Wraps an entity with already loaded translations. A second translation
    /// for the same locale is dropped.
    pub fn with_translations(
        entity: P,
        translations: Vec<T>,
        definition: Arc<TranslatableDefinition>,
    ) -> Self {
        let mut translatable = Self::new(entity, definition);
        for translation in translations {
            let duplicate = translation
                .locale_value(translatable.definition.locale_key())
                .is_some_and(|locale| {
                    translatable.translations.iter().any(|t| {
                        t.locale_value(translatable.definition.locale_key()) == Some(locale)
                    })
                });
            if duplicate {
                warn!(
                    entity = translatable.definition.entity_name(),
                    locale = translation.locale_value(translatable.definition.locale_key()),
                    "Dropping duplicate translation"
                );
                continue;
            }
            translatable.translations.push(translation);
        }
        translatable
    }

    pub fn entity(&self) -> &P {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut P {
        &mut self.entity
    }

    pub fn translations(&self) -> &[T] {
        &self.translations
    }

    pub fn definition(&self) -> &TranslatableDefinition {
        &self.definition
    }

    pub fn into_parts(self) -> (P, Vec<T>) {
        (self.entity, self.translations)
    }

    /// Fallback flag used when a call does not say otherwise.
    pub fn use_translation_fallback(&self) -> bool {
        self.use_translation_fallback
    }

    pub fn set_use_translation_fallback(&mut self, use_fallback: bool) {
        self.use_translation_fallback = use_fallback;
    }

    /// Whether the translation has changes besides its locale.
    pub fn is_translation_dirty(&self, translation: &T) -> bool {
        translation_is_dirty(translation, self.definition.locale_key())
    }

    fn position_of(&self, locale: &Locale) -> Option<usize> {
        let locale_key = self.definition.locale_key();
        self.translations
            .iter()
            .position(|t| t.locale_value(locale_key) == Some(locale.as_str()))
    }

    fn translation_by_locale(&self, locale: &Locale) -> Option<&T> {
        self.position_of(locale).map(|i| &self.translations[i])
    }
}

pub(crate) fn translation_is_dirty<T: Record>(translation: &T, locale_key: &str) -> bool {
    let mut dirty = translation.dirty();
    dirty.remove(locale_key);
    !dirty.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordModel;
    use crate::test_utils::{country_definition, translation};
    use serde_json::json;

    #[test]
    fn test_with_translations_drops_duplicate_locales() {
        let definition = country_definition(false);
        let translatable: Translatable<RecordModel, RecordModel> = Translatable::with_translations(
            RecordModel::new("country"),
            vec![
                translation("en", "name", "France"),
                translation("fr", "name", "France"),
                translation("en", "name", "Duplicate"),
            ],
            definition,
        );

        assert_eq!(translatable.translations().len(), 2);
        assert_eq!(translatable.translations()[0].attribute("name"), Some(&json!("France")));
    }

    #[test]
    fn test_fresh_translation_is_not_dirty() {
        let definition = country_definition(false);
        let mut translatable: Translatable<RecordModel, RecordModel> =
            Translatable::new(RecordModel::new("country"), definition);

        let fr = Locale::new("fr").unwrap();
        let created = translatable.get_translation_or_new(&fr).clone();
        assert!(!translatable.is_translation_dirty(&created));

        translatable
            .get_translation_or_new(&fr)
            .set_attribute("name", json!("France"));
        let edited = translatable.translations()[0].clone();
        assert!(translatable.is_translation_dirty(&edited));
    }

    #[test]
    fn test_instance_flag_defaults_from_definition() {
        let translatable: Translatable<RecordModel, RecordModel> =
            Translatable::new(RecordModel::new("country"), country_definition(true));
        assert!(translatable.use_translation_fallback());

        let mut translatable: Translatable<RecordModel, RecordModel> =
            Translatable::new(RecordModel::new("country"), country_definition(false));
        assert!(!translatable.use_translation_fallback());
        translatable.set_use_translation_fallback(true);
        assert!(translatable.use_translation_fallback());
    }
}
