use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Repository trait for removing every child row of a template at once
#[async_trait]
pub trait DeleteByTemplateId<DB: Database>: Send + Sync {
    /// # Returns
    /// * `Ok(usize)` - The number of rows deleted (0 when there were none)
    /// * `Err` - An error if the deletion could not be executed
    async fn delete_by_template_id(
        &self,
        template_id: Uuid,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
