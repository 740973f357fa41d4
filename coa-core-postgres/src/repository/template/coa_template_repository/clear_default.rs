use coa_core_db::repository::clear_default::ClearDefault;
use super::repo_impl::CoaTemplateRepositoryImpl;
use async_trait::async_trait;
use sqlx::{Postgres, Row};
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl ClearDefault<Postgres> for CoaTemplateRepositoryImpl {
    async fn clear_default(&self, keep: Option<Uuid>) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query(
            r#"
            UPDATE coa_templates
            SET is_default = FALSE, updated_at = NOW()
            WHERE is_default AND ($1::uuid IS NULL OR id <> $1)
            RETURNING id
            "#,
        )
        .bind(keep)
        .fetch_all(&mut *tx)
        .await?;

        let mut cleared: Vec<Uuid> = Vec::with_capacity(rows.len());
        for row in rows {
            cleared.push(row.try_get("id")?);
        }

        if !cleared.is_empty() {
            sqlx::query(r#"UPDATE coa_template_idx SET is_default = FALSE WHERE id = ANY($1)"#)
                .bind(&cleared)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        Ok(cleared)
    }
}
