use async_trait::async_trait;

use crate::models::translatable_definition::TranslatableDefinition;
use crate::query::translation_query::TranslationQuery;

/// Generic repository trait for finding entities by their translations
///
/// Returns every primary entity of the definition's table that satisfies
/// all scopes of the query.
///
/// # Type Parameters
/// * `P` - The primary entity type
///
/// # Example
/// ```ignore
/// impl FindByTranslationQuery<RecordModel> for RecordRepositoryImpl {
///     async fn find_by_translation_query(&self, definition: &TranslatableDefinition, query: &TranslationQuery) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindByTranslationQuery<P: Send>: Send + Sync {
    /// Find the entities matching a translation query
    ///
    /// # Arguments
    /// * `definition` - The entity type registration
    /// * `query` - The composed translation scopes
    ///
    /// # Returns
    /// * `Ok(Vec<P>)` - The matching entities
    /// * `Err` - An error if the query could not be executed
    async fn find_by_translation_query(
        &self,
        definition: &TranslatableDefinition,
        query: &TranslationQuery,
    ) -> Result<Vec<P>, Box<dyn std::error::Error + Send + Sync>>;
}
