use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Repository trait for the "only one default template" rule
#[async_trait]
pub trait ClearDefault<DB: Database>: Send + Sync {
    /// Set `is_default = false` on every template except `keep`
    ///
    /// # Returns
    /// * `Ok(Vec<Uuid>)` - Ids of the templates that were default before the call
    /// * `Err` - An error if the update could not be executed
    async fn clear_default(
        &self,
        keep: Option<Uuid>,
    ) -> Result<Vec<Uuid>, Box<dyn std::error::Error + Send + Sync>>;
}
