//! Fixtures and an in-memory store for resolver tests.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::error::Error;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::models::{
    Locale, LocaleConfig, LocaleContext, Record, RecordModel, TranslatableDefinition,
};
use crate::query::{TranslationQuery, TranslationScope};
use crate::repository::{FindByTranslationQuery, LoadTranslations, Save};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn locale(s: &str) -> Locale {
    Locale::new(s).unwrap()
}

/// en, fr, de with fr → [en] and de → [fr, en]
pub fn test_config() -> LocaleConfig {
    LocaleConfig::from_json_str(
        r#"{
            "locales": ["en", "fr", "de"],
            "fallback_locales": { "fr": ["en"], "de": ["fr", "en"] }
        }"#,
    )
    .unwrap()
}

pub fn context(active: &str) -> LocaleContext {
    LocaleContext::new(Arc::new(test_config()), locale(active))
}

pub fn country_definition(use_fallback: bool) -> Arc<TranslatableDefinition> {
    Arc::new(
        TranslatableDefinition::builder("Country")
            .base_fields(["code"])
            .translated_attributes(["name", "capital"])
            .use_translation_fallback(use_fallback)
            .build(&test_config())
            .unwrap(),
    )
}

/// A translation as loaded from storage (clean, persisted).
pub fn translation(locale: &str, key: &str, value: &str) -> RecordModel {
    let mut attributes = Map::new();
    attributes.insert("locale".to_string(), json!(locale));
    attributes.insert(key.to_string(), json!(value));
    RecordModel::from_attributes("country_translation", attributes)
}

/// A persisted country entity.
pub fn persisted_country(id: &str, code: &str) -> RecordModel {
    let mut attributes = Map::new();
    attributes.insert("id".to_string(), json!(id));
    attributes.insert("code".to_string(), json!(code));
    RecordModel::from_attributes("country", attributes).with_fillable(["code", "name", "capital"])
}

/// Records every write by table name; can refuse, fail or leave unkeyed
/// writes per table.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<RecordModel>>,
    writes: Mutex<Vec<String>>,
    refuse_table: Option<String>,
    error_table: Option<String>,
    keyless_table: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes to `table` return `Ok(false)`.
    pub fn refusing(table: &str) -> Self {
        Self {
            refuse_table: Some(table.to_string()),
            ..Self::default()
        }
    }

    /// Writes to `table` return an error.
    pub fn failing(table: &str) -> Self {
        Self {
            error_table: Some(table.to_string()),
            ..Self::default()
        }
    }

    /// Writes to `table` succeed without assigning a key.
    pub fn without_keys(table: &str) -> Self {
        Self {
            keyless_table: Some(table.to_string()),
            ..Self::default()
        }
    }

    pub fn insert_row(&self, row: RecordModel) {
        self.rows.lock().unwrap().push(row);
    }

    pub fn rows(&self, table: &str) -> Vec<RecordModel> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.table() == table)
            .cloned()
            .collect()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn write_count(&self, table: &str) -> usize {
        self.writes.lock().unwrap().iter().filter(|t| *t == table).count()
    }

    fn translations_of(&self, definition: &TranslatableDefinition, parent_key: &Value) -> Vec<RecordModel> {
        self.rows(definition.translations_table())
            .into_iter()
            .filter(|t| t.attribute(definition.foreign_key()) == Some(parent_key))
            .collect()
    }
}

#[async_trait]
impl Save<RecordModel> for InMemoryStore {
    async fn save(&self, item: &mut RecordModel) -> Result<bool, Box<dyn Error + Send + Sync>> {
        self.writes.lock().unwrap().push(item.table().to_string());

        if self.error_table.as_deref() == Some(item.table()) {
            return Err(format!("write to {} failed", item.table()).into());
        }
        if self.refuse_table.as_deref() == Some(item.table()) {
            return Ok(false);
        }

        if item.key().is_none() && self.keyless_table.as_deref() != Some(item.table()) {
            let key_name = item.key_name().to_string();
            item.set_attribute(&key_name, json!(Uuid::new_v4().to_string()));
        }
        item.mark_persisted();

        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|r| r.table() == item.table() && r.key() == item.key())
        {
            Some(row) => *row = item.clone(),
            None => rows.push(item.clone()),
        }
        Ok(true)
    }
}

#[async_trait]
impl LoadTranslations<RecordModel> for InMemoryStore {
    async fn load_translations(
        &self,
        definition: &TranslatableDefinition,
        parent_key: &Value,
        scope: Option<&TranslationScope>,
    ) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .translations_of(definition, parent_key)
            .into_iter()
            .filter(|t| scope.map_or(true, |s| s.filters_translation(t, definition.locale_key())))
            .collect())
    }
}

#[async_trait]
impl FindByTranslationQuery<RecordModel> for InMemoryStore {
    async fn find_by_translation_query(
        &self,
        definition: &TranslatableDefinition,
        query: &TranslationQuery,
    ) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .rows(definition.table())
            .into_iter()
            .filter(|entity| {
                let translations = entity
                    .key()
                    .map(|key| self.translations_of(definition, key))
                    .unwrap_or_default();
                query.matches(&translations, definition.locale_key())
            })
            .collect())
    }
}
