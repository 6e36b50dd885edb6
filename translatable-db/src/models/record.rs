use serde_json::{Map, Value};
use translatable_api::TranslatableResult;

use super::translatable_definition::TranslatableDefinition;

/// Trait for persisted records exposing attributes with dirty tracking
pub trait Record {
    /// Whether the record has been persisted
    fn exists(&self) -> bool;

    /// Name of the identity attribute
    fn key_name(&self) -> &str;

    /// Identity value, if one has been assigned
    fn key(&self) -> Option<&Value> {
        self.attribute(self.key_name()).filter(|v| !v.is_null())
    }

    fn attribute(&self, key: &str) -> Option<&Value>;

    fn set_attribute(&mut self, key: &str, value: Value);

    /// Attributes changed since the record was loaded or last saved
    fn dirty(&self) -> Map<String, Value>;

    fn is_dirty(&self) -> bool {
        !self.dirty().is_empty()
    }

    /// Serialized attribute map
    fn to_map(&self) -> Map<String, Value>;

    fn is_fillable(&self, key: &str) -> bool;

    /// True when no attribute at all may be mass-assigned
    fn is_totally_guarded(&self) -> bool;

    /// Mass-assigns attributes subject to the fillable/guarded lists
    fn fill(&mut self, attributes: Map<String, Value>) -> TranslatableResult<()>;
}

/// Trait for records holding one locale's translated attributes
pub trait TranslationRecord: Record {
    /// Creates an empty, unsaved translation record for the given entity type
    fn new_translation(definition: &TranslatableDefinition) -> Self;

    /// Locale identifier stored under `locale_key`
    fn locale_value(&self, locale_key: &str) -> Option<&str> {
        self.attribute(locale_key).and_then(Value::as_str)
    }
}
