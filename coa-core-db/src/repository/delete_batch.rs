use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for deleting multiple entities in a batch
///
/// All deletes are performed atomically. Ids that do not exist are ignored,
/// so deleting twice is safe.
/// Returns the number of items actually deleted.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl DeleteBatch<Postgres> for CoaTemplateRepositoryImpl {
///     async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait DeleteBatch<DB: Database>: Send + Sync {
    /// Delete multiple items by their IDs
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs of the entities to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items successfully deleted
    /// * `Err` - An error if the deletion could not be executed
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
