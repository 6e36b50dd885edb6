use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use translatable_api::{TranslatableError, TranslatableResult};

use super::record::{Record, TranslationRecord};
use super::translatable_definition::TranslatableDefinition;

pub const DEFAULT_KEY_NAME: &str = "id";

/// # Documentation
/// Attribute-bag record backing both primary entities and translations.
///
/// `original` holds the attribute values as last loaded or saved; the
/// difference to `attributes` is the dirty set. Guarding follows the usual
/// active-record rules: a key listed in `fillable` is always fillable, a key
/// listed in `guarded` (or `guarded == ["*"]`) never is, and with an empty
/// `fillable` list every other key not starting with `_` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordModel {
    table: String,
    key_name: String,
    attributes: Map<String, Value>,
    original: Map<String, Value>,
    exists: bool,
    fillable: Vec<String>,
    guarded: Vec<String>,
}

impl RecordModel {
    /// A new, unsaved record for `table`
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key_name: DEFAULT_KEY_NAME.to_string(),
            attributes: Map::new(),
            original: Map::new(),
            exists: false,
            fillable: Vec::new(),
            guarded: Vec::new(),
        }
    }

    /// A record loaded from storage with the given attributes
    pub fn from_attributes(table: impl Into<String>, attributes: Map<String, Value>) -> Self {
        let mut record = Self::new(table);
        record.original = attributes.clone();
        record.attributes = attributes;
        record.exists = true;
        record
    }

    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = key_name.into();
        self
    }

    pub fn with_fillable<I, S>(mut self, fillable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fillable = fillable.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_guarded<I, S>(mut self, guarded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guarded = guarded.into_iter().map(Into::into).collect();
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn original(&self) -> &Map<String, Value> {
        &self.original
    }

    /// Accepts the current attributes as the persisted state.
    pub fn sync_original(&mut self) {
        self.original = self.attributes.clone();
    }

    /// Called by storage after a successful write.
    pub fn mark_persisted(&mut self) {
        self.exists = true;
        self.sync_original();
    }

    fn is_guarded(&self, key: &str) -> bool {
        self.guarded.iter().any(|g| g == key || g == "*")
    }
}

impl Record for RecordModel {
    fn exists(&self) -> bool {
        self.exists
    }

    fn key_name(&self) -> &str {
        &self.key_name
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    fn set_attribute(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    fn dirty(&self) -> Map<String, Value> {
        self.attributes
            .iter()
            .filter(|(key, value)| self.original.get(key.as_str()) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn to_map(&self) -> Map<String, Value> {
        self.attributes.clone()
    }

    fn is_fillable(&self, key: &str) -> bool {
        if self.fillable.iter().any(|f| f == key) {
            return true;
        }
        if self.is_guarded(key) {
            return false;
        }
        self.fillable.is_empty() && !key.starts_with('_')
    }

    fn is_totally_guarded(&self) -> bool {
        self.fillable.is_empty() && self.guarded.len() == 1 && self.guarded[0] == "*"
    }

    fn fill(&mut self, attributes: Map<String, Value>) -> TranslatableResult<()> {
        let totally_guarded = self.is_totally_guarded();
        for (key, value) in attributes {
            if self.is_fillable(&key) {
                self.set_attribute(&key, value);
            } else if totally_guarded {
                return Err(TranslatableError::MassAssignment(key));
            }
        }
        Ok(())
    }
}

impl TranslationRecord for RecordModel {
    fn new_translation(definition: &TranslatableDefinition) -> Self {
        RecordModel::new(definition.translations_table())
    }
}
