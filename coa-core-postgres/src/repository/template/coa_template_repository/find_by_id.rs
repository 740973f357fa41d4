use coa_core_db::models::coa::CoaTemplateModel;
use coa_core_db::repository::find_by_id::FindById;
use crate::utils::TryFromRow;
use super::repo_impl::CoaTemplateRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl FindById<Postgres, CoaTemplateModel> for CoaTemplateRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CoaTemplateModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(r#"SELECT * FROM coa_templates WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(CoaTemplateModel::try_from_row).transpose()
    }
}
