use coa_core_db::repository::delete_batch::DeleteBatch;
use super::repo_impl::CoaTemplateItemRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl DeleteBatch<Postgres> for CoaTemplateItemRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(r#"DELETE FROM coa_template_items WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() as usize)
    }
}
