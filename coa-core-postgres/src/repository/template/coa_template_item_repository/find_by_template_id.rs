use coa_core_db::models::coa::CoaTemplateItemModel;
use coa_core_db::repository::find_by_template_id::FindByTemplateId;
use crate::utils::rows_into;
use super::repo_impl::CoaTemplateItemRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl FindByTemplateId<Postgres, CoaTemplateItemModel> for CoaTemplateItemRepositoryImpl {
    /// Items in display order
    async fn find_by_template_id(
        &self,
        template_id: Uuid,
    ) -> Result<Vec<CoaTemplateItemModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM coa_template_items
            WHERE template_id = $1
            ORDER BY sort_order, account_code
            "#,
        )
        .bind(template_id)
        .fetch_all(&*self.pool)
        .await?;
        rows_into(&rows)
    }
}
