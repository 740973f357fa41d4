use coa_core_db::models::coa::CoaTemplateRuleModel;
use coa_core_db::repository::create_batch::CreateBatch;
use super::repo_impl::CoaTemplateRuleRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

#[async_trait]
impl CreateBatch<Postgres, CoaTemplateRuleModel> for CoaTemplateRuleRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CoaTemplateRuleModel>,
    ) -> Result<Vec<CoaTemplateRuleModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO coa_template_rules (
                    id, template_id, tax_type_id, business_type_id, industry_type_id
                )
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(item.id)
            .bind(item.template_id)
            .bind(item.tax_type_id)
            .bind(item.business_type_id)
            .bind(item.industry_type_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
