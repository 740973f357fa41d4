use coa_core_db::repository::delete_by_template_id::DeleteByTemplateId;
use super::repo_impl::CoaTemplateRuleRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl DeleteByTemplateId<Postgres> for CoaTemplateRuleRepositoryImpl {
    async fn delete_by_template_id(&self, template_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query(r#"DELETE FROM coa_template_rules WHERE template_id = $1"#)
            .bind(template_id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() as usize)
    }
}
