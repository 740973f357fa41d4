use coa_core_db::models::coa::CoaTemplateModel;
use coa_core_db::models::index_aware::IndexAware;
use coa_core_db::repository::update_batch::UpdateBatch;
use super::repo_impl::CoaTemplateRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

#[async_trait]
impl UpdateBatch<Postgres, CoaTemplateModel> for CoaTemplateRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<CoaTemplateModel>,
    ) -> Result<Vec<CoaTemplateModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            let result = sqlx::query(
                r#"
                UPDATE coa_templates
                SET name = $2, description = $3, is_default = $4, is_active = $5, updated_at = $6
                WHERE id = $1
                "#,
            )
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.description.as_ref().map(|s| s.as_str()))
            .bind(item.is_default)
            .bind(item.is_active)
            .bind(item.updated_at)
            .execute(&mut *tx)
            .await?;
            if result.rows_affected() == 0 {
                return Err(format!("coa_templates: {} not found", item.id).into());
            }

            let idx = item.to_index();
            sqlx::query(r#"UPDATE coa_template_idx SET name_hash = $2, is_default = $3 WHERE id = $1"#)
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
