use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use translatable_api::{TranslatableError, TranslatableResult};

use super::locale_config::LocaleConfig;
use super::record_model::DEFAULT_KEY_NAME;
use crate::utils::{is_identifier, snake_case};

/// Where an entity attribute is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Stored on the primary entity
    Base,
    /// Stored on the translation record of a locale
    Translated,
}

/// # Documentation
/// Registration of one translatable entity type: which attributes are
/// translated and the naming conventions linking the entity to its
/// translation records.
///
/// Built once per entity type with [`TranslatableDefinition::builder`] and
/// shared between instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatableDefinition {
    entity_name: String,
    table: String,
    key_name: String,
    translated_attributes: Vec<String>,
    fields: HashMap<String, FieldKind>,
    translation_model_name: String,
    translations_table: String,
    foreign_key: String,
    locale_key: String,
    use_translation_fallback: bool,
}

impl TranslatableDefinition {
    pub fn builder(entity_name: impl Into<String>) -> TranslatableDefinitionBuilder {
        TranslatableDefinitionBuilder::new(entity_name)
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Table of the primary entity
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Identity column of the primary entity
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn translated_attributes(&self) -> &[String] {
        &self.translated_attributes
    }

    /// Unregistered attributes are base attributes.
    pub fn field_kind(&self, key: &str) -> FieldKind {
        self.fields.get(key).copied().unwrap_or(FieldKind::Base)
    }

    pub fn is_translated(&self, key: &str) -> bool {
        self.field_kind(key) == FieldKind::Translated
    }

    pub fn translation_model_name(&self) -> &str {
        &self.translation_model_name
    }

    pub fn translations_table(&self) -> &str {
        &self.translations_table
    }

    /// Column on translation records referencing the entity identity
    pub fn foreign_key(&self) -> &str {
        &self.foreign_key
    }

    /// Column on translation records holding the locale
    pub fn locale_key(&self) -> &str {
        &self.locale_key
    }

    /// Default fallback flag for new instances
    pub fn use_translation_fallback(&self) -> bool {
        self.use_translation_fallback
    }
}

#[derive(Debug, Clone)]
pub struct TranslatableDefinitionBuilder {
    entity_name: String,
    table: Option<String>,
    key_name: Option<String>,
    base_fields: Vec<String>,
    translated_attributes: Vec<String>,
    translation_model_name: Option<String>,
    translations_table: Option<String>,
    foreign_key: Option<String>,
    locale_key: Option<String>,
    use_translation_fallback: Option<bool>,
}

impl TranslatableDefinitionBuilder {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            table: None,
            key_name: None,
            base_fields: Vec::new(),
            translated_attributes: Vec::new(),
            translation_model_name: None,
            translations_table: None,
            foreign_key: None,
            locale_key: None,
            use_translation_fallback: None,
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    pub fn base_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn translated_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.translated_attributes
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    pub fn translation_model(mut self, name: impl Into<String>) -> Self {
        self.translation_model_name = Some(name.into());
        self
    }

    pub fn translations_table(mut self, table: impl Into<String>) -> Self {
        self.translations_table = Some(table.into());
        self
    }

    pub fn foreign_key(mut self, key: impl Into<String>) -> Self {
        self.foreign_key = Some(key.into());
        self
    }

    pub fn locale_key(mut self, key: impl Into<String>) -> Self {
        self.locale_key = Some(key.into());
        self
    }

    pub fn use_translation_fallback(mut self, use_fallback: bool) -> Self {
        self.use_translation_fallback = Some(use_fallback);
        self
    }

    /// Resolves naming conventions against `config` and validates the field map.
    pub fn build(self, config: &LocaleConfig) -> TranslatableResult<TranslatableDefinition> {
        let entity_snake = snake_case(&self.entity_name);
        let translation_model_name = self
            .translation_model_name
            .unwrap_or_else(|| format!("{}{}", self.entity_name, config.translation_suffix));
        let translations_table = self
            .translations_table
            .unwrap_or_else(|| snake_case(&translation_model_name));
        let table = self.table.unwrap_or_else(|| entity_snake.clone());
        let key_name = self
            .key_name
            .unwrap_or_else(|| DEFAULT_KEY_NAME.to_string());
        let foreign_key = self
            .foreign_key
            .unwrap_or_else(|| format!("{entity_snake}_{key_name}"));
        let locale_key = self
            .locale_key
            .unwrap_or_else(|| config.locale_key.clone());

        let mut fields = HashMap::new();
        for field in &self.base_fields {
            fields.insert(field.clone(), FieldKind::Base);
        }
        for attribute in &self.translated_attributes {
            if fields.insert(attribute.clone(), FieldKind::Translated).is_some() {
                return Err(TranslatableError::Configuration(format!(
                    "Attribute '{attribute}' of {} is registered twice",
                    self.entity_name
                )));
            }
            if attribute == &locale_key || attribute == &foreign_key {
                return Err(TranslatableError::Configuration(format!(
                    "Attribute '{attribute}' of {} collides with a translation key column",
                    self.entity_name
                )));
            }
        }

        for column in [&table, &key_name, &translations_table, &foreign_key, &locale_key]
            .into_iter()
            .chain(self.translated_attributes.iter())
        {
            if !is_identifier(column) {
                return Err(TranslatableError::Configuration(format!(
                    "'{column}' is not a valid column or table name"
                )));
            }
        }

        Ok(TranslatableDefinition {
            entity_name: self.entity_name,
            table,
            key_name,
            translated_attributes: self.translated_attributes,
            fields,
            translation_model_name,
            translations_table,
            foreign_key,
            locale_key,
            use_translation_fallback: self
                .use_translation_fallback
                .unwrap_or(config.use_fallback),
        })
    }
}
