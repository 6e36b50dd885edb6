use serde_json::{Map, Value};

use super::Translatable;
use crate::models::locale_context::LocaleContext;
use crate::models::record::{Record, TranslationRecord};

impl<P: Record, T: TranslationRecord> Translatable<P, T> {
    /// The entity's serialized attributes with translated attributes taken
    /// from the active locale's translation. Without such a translation the
    /// entity's own values are left untouched; no fallback is applied.
    pub fn to_array(&self, ctx: &LocaleContext) -> Map<String, Value> {
        let mut attributes = self.entity.to_map();
        if let Some(translation) = self.get_translation(ctx, None, Some(false)) {
            for field in self.definition.translated_attributes() {
                attributes.insert(
                    field.clone(),
                    translation.attribute(field).cloned().unwrap_or(Value::Null),
                );
            }
        }
        attributes
    }
}
