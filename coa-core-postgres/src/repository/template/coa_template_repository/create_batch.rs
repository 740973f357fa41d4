use coa_core_db::models::coa::CoaTemplateModel;
use coa_core_db::models::index_aware::IndexAware;
use coa_core_db::repository::create_batch::CreateBatch;
use super::repo_impl::CoaTemplateRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

#[async_trait]
impl CreateBatch<Postgres, CoaTemplateModel> for CoaTemplateRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CoaTemplateModel>,
    ) -> Result<Vec<CoaTemplateModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO coa_templates (
                    id, name, description, is_default, is_active, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.description.as_ref().map(|s| s.as_str()))
            .bind(item.is_default)
            .bind(item.is_active)
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&mut *tx)
            .await?;

            let idx = item.to_index();
            sqlx::query(
                r#"
                INSERT INTO coa_template_idx (id, name_hash, is_default)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(idx.id)
            .bind(idx.name_hash)
            .bind(idx.is_default)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
