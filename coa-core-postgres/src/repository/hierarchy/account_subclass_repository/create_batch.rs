use coa_core_db::models::coa::AccountSubclassModel;
use coa_core_db::repository::create_batch::CreateBatch;
use super::repo_impl::AccountSubclassRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

#[async_trait]
impl CreateBatch<Postgres, AccountSubclassModel> for AccountSubclassRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<AccountSubclassModel>,
    ) -> Result<Vec<AccountSubclassModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO account_subclasses (id, class_id, code, name)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(item.id)
            .bind(item.class_id)
            .bind(item.code)
            .bind(item.name.as_str())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
