use async_trait::async_trait;
use serde_json::Value;

use crate::models::translatable_definition::TranslatableDefinition;
use crate::query::translation_scope::TranslationScope;

/// Generic repository trait for loading the translations of one entity
///
/// Returns the translation records whose foreign key references the given
/// entity identity, in storage order. An eager-load scope such as
/// [`TranslationScope::WithTranslation`] restricts which translation rows are
/// returned; scopes that filter entities rather than translations are ignored.
///
/// # Type Parameters
/// * `T` - The translation record type
///
/// # Example
/// ```ignore
/// impl LoadTranslations<RecordModel> for RecordRepositoryImpl {
///     async fn load_translations(&self, definition: &TranslatableDefinition, parent_key: &Value, scope: Option<&TranslationScope>) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait LoadTranslations<T: Send>: Send + Sync {
    /// Load the translations of one entity
    ///
    /// # Arguments
    /// * `definition` - The entity type registration (table, foreign key and locale columns)
    /// * `parent_key` - The identity of the owning entity
    /// * `scope` - An optional eager-load restriction
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The loaded translations, possibly empty
    /// * `Err` - An error if the query could not be executed
    async fn load_translations(
        &self,
        definition: &TranslatableDefinition,
        parent_key: &Value,
        scope: Option<&TranslationScope>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
