use async_trait::async_trait;

/// Generic repository trait for persisting a single record
///
/// This trait provides the per-record create/update call the translatable
/// resolver persists entities and their translations through.
/// Implementations insert records that do not exist yet and update only the
/// dirty attributes of records that do, then mark the record as persisted.
/// New records must have their identity key populated on success.
///
/// # Type Parameters
/// * `T` - The record type being persisted
///
/// # Example
/// ```ignore
/// impl Save<RecordModel> for RecordRepositoryImpl {
///     async fn save(&self, item: &mut RecordModel) -> Result<bool, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Save<T: Send>: Send + Sync {
    /// Persist one record
    ///
    /// # Arguments
    /// * `item` - The record to create or update; updated in place with generated fields
    ///
    /// # Returns
    /// * `Ok(true)` - The record was written
    /// * `Ok(false)` - The backend refused the write
    /// * `Err` - An error if the write could not be executed
    async fn save(&self, item: &mut T) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
