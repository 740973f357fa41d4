use coa_core_db::repository::delete_batch::DeleteBatch;
use super::repo_impl::CoaTemplateRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl DeleteBatch<Postgres> for CoaTemplateRepositoryImpl {
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query(r#"DELETE FROM coa_template_idx WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query(r#"DELETE FROM coa_templates WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() as usize)
    }
}
