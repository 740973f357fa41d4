use coa_core_db::models::coa::AccountSubtypeModel;
use coa_core_db::repository::create_batch::CreateBatch;
use super::repo_impl::AccountSubtypeRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

#[async_trait]
impl CreateBatch<Postgres, AccountSubtypeModel> for AccountSubtypeRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<AccountSubtypeModel>,
    ) -> Result<Vec<AccountSubtypeModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO account_subtypes (id, type_id, code, name)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(item.id)
            .bind(item.type_id)
            .bind(item.code)
            .bind(item.name.as_str())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
