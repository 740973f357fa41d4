use coa_core_db::models::coa::AccountClassModel;
use coa_core_db::repository::create_batch::CreateBatch;
use super::repo_impl::AccountClassRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

#[async_trait]
impl CreateBatch<Postgres, AccountClassModel> for AccountClassRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<AccountClassModel>,
    ) -> Result<Vec<AccountClassModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO account_classes (id, code, name, normal_balance)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(item.id)
            .bind(item.code)
            .bind(item.name.as_str())
            .bind(item.normal_balance)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(items)
    }
}
