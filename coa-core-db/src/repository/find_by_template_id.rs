use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Repository trait for listing the child rows of a template
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The child entity type (template rules or template items)
#[async_trait]
pub trait FindByTemplateId<DB: Database, T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(Vec<T>)` - All rows owned by the template, empty if there are none
    /// * `Err` - An error if the query could not be executed
    async fn find_by_template_id(
        &self,
        template_id: Uuid,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
