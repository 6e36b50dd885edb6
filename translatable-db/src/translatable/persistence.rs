use std::sync::Arc;
use tracing::{debug, warn};
use translatable_api::TranslatableResult;

use super::{translation_is_dirty, Translatable};
use crate::models::record::{Record, TranslationRecord};
use crate::models::translatable_definition::TranslatableDefinition;
use crate::query::translation_query::TranslationQuery;
use crate::query::translation_scope::TranslationScope;
use crate::repository::find_by_translation_query::FindByTranslationQuery;
use crate::repository::load_translations::LoadTranslations;
use crate::repository::save::Save;

impl<P, T> Translatable<P, T>
where
    P: Record + Send,
    T: TranslationRecord + Send,
{
    /// Loads the translations of `entity`, optionally restricted by an
    /// eager-load scope. An entity without a key has none.
    pub async fn load<S>(
        store: &S,
        entity: P,
        definition: Arc<TranslatableDefinition>,
        scope: Option<&TranslationScope>,
    ) -> TranslatableResult<Self>
    where
        S: LoadTranslations<T> + ?Sized,
    {
        let translations = match entity.key().cloned() {
            Some(key) => store.load_translations(&definition, &key, scope).await?,
            None => Vec::new(),
        };
        Ok(Self::with_translations(entity, translations, definition))
    }

    /// Finds every entity matching `query`, each with its translations
    /// restricted by the query's eager-load scope.
    pub async fn find<S>(
        store: &S,
        definition: Arc<TranslatableDefinition>,
        query: &TranslationQuery,
    ) -> TranslatableResult<Vec<Self>>
    where
        S: FindByTranslationQuery<P> + LoadTranslations<T> + ?Sized,
    {
        let entities = store.find_by_translation_query(&definition, query).await?;
        let mut found = Vec::with_capacity(entities.len());
        for entity in entities {
            found.push(Self::load(store, entity, Arc::clone(&definition), query.eager_load()).await?);
        }
        Ok(found)
    }

    /// Persists the entity and its dirty translations.
    ///
    /// A persisted entity without changes is not written; its translations
    /// are. Otherwise the entity is written first and translations only
    /// follow when that write succeeds. Dirty translations of an entity that
    /// still has no key after its write are not saved and `Ok(false)` is
    /// returned. Not atomic: a failure while writing
    /// translations leaves the entity written.
    pub async fn save<S>(&mut self, store: &S) -> TranslatableResult<bool>
    where
        S: Save<P> + Save<T> + ?Sized,
    {
        if self.entity.exists() && !self.entity.is_dirty() {
            return self.save_translations(store).await;
        }

        if !Save::<P>::save(store, &mut self.entity).await? {
            warn!(
                entity = self.definition.entity_name(),
                "Entity was not saved, skipping translations"
            );
            return Ok(false);
        }
        self.save_translations(store).await
    }

    async fn save_translations<S>(&mut self, store: &S) -> TranslatableResult<bool>
    where
        S: Save<T> + ?Sized,
    {
        let key = self.entity.key().filter(|key| !key.is_null()).cloned();
        let foreign_key = self.definition.foreign_key();
        let locale_key = self.definition.locale_key();

        for translation in self.translations.iter_mut() {
            if !translation_is_dirty(translation, locale_key) {
                continue;
            }
            let Some(key) = key.as_ref() else {
                warn!(
                    entity = self.definition.entity_name(),
                    "Entity has no key, translations were not saved"
                );
                return Ok(false);
            };
            translation.set_attribute(foreign_key, key.clone());
            if !Save::<T>::save(store, translation).await? {
                warn!(
                    entity = self.definition.entity_name(),
                    locale = translation.locale_value(locale_key),
                    "Translation was not saved"
                );
                return Ok(false);
            }
            debug!(
                entity = self.definition.entity_name(),
                locale = translation.locale_value(locale_key),
                "Saved translation"
            );
        }
        Ok(true)
    }
}
