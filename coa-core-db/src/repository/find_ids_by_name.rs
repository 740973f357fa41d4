use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Repository trait for exact, case-sensitive template name lookups
#[async_trait]
pub trait FindIdsByName<DB: Database>: Send + Sync {
    /// # Returns
    /// * `Ok(Vec<Uuid>)` - Ids of the templates whose name equals `name`
    /// * `Err` - An error if the query could not be executed
    async fn find_ids_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<Uuid>, Box<dyn std::error::Error + Send + Sync>>;
}
