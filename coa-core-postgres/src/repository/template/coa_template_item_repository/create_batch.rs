use coa_core_db::models::coa::CoaTemplateItemModel;
use coa_core_db::repository::create_batch::CreateBatch;
use super::repo_impl::CoaTemplateItemRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

#[async_trait]
impl CreateBatch<Postgres, CoaTemplateItemModel> for CoaTemplateItemRepositoryImpl {
    /// Inserts all items or none of them
    async fn create_batch(
        &self,
        items: Vec<CoaTemplateItemModel>,
    ) -> Result<Vec<CoaTemplateItemModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO coa_template_items (
                    id, template_id, account_code, account_name,
                    class_id, subclass_id, type_id, subtype_id,
                    normal_balance, is_active, sort_order
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(item.id)
            .bind(item.template_id)
            .bind(item.account_code.as_str())
            .bind(item.account_name.as_str())
            .bind(item.class_id)
            .bind(item.subclass_id)
            .bind(item.type_id)
            .bind(item.subtype_id)
            .bind(item.normal_balance)
            .bind(item.is_active)
            .bind(item.sort_order)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
