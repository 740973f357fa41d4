use coa_core_db::models::coa::AccountSubtypeModel;
use coa_core_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use super::repo_impl::AccountSubtypeRepositoryImpl;
use async_trait::async_trait;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl LoadBatch<Postgres, AccountSubtypeModel> for AccountSubtypeRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<AccountSubtypeModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(r#"SELECT * FROM account_subtypes WHERE id = ANY($1)"#)
            .bind(ids)
            .fetch_all(&*self.pool)
            .await?;

        let mut loaded = HashMap::with_capacity(rows.len());
        for row in rows {
            let item = AccountSubtypeModel::try_from_row(&row)?;
            loaded.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| loaded.get(id).cloned()).collect())
    }
}
