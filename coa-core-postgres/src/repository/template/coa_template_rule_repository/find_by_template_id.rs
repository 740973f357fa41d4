use coa_core_db::models::coa::CoaTemplateRuleModel;
use coa_core_db::repository::find_by_template_id::FindByTemplateId;
use crate::utils::rows_into;
use super::repo_impl::CoaTemplateRuleRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl FindByTemplateId<Postgres, CoaTemplateRuleModel> for CoaTemplateRuleRepositoryImpl {
    async fn find_by_template_id(
        &self,
        template_id: Uuid,
    ) -> Result<Vec<CoaTemplateRuleModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM coa_template_rules WHERE template_id = $1"#)
            .bind(template_id)
            .fetch_all(&*self.pool)
            .await?;
        rows_into(&rows)
    }
}
