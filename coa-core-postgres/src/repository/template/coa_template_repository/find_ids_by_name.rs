use coa_core_db::models::coa::template_name_hash;
use coa_core_db::repository::find_ids_by_name::FindIdsByName;
use super::repo_impl::CoaTemplateRepositoryImpl;
use async_trait::async_trait;
use sqlx::{Postgres, Row};
use std::error::Error;
use uuid::Uuid;

#[async_trait]
impl FindIdsByName<Postgres> for CoaTemplateRepositoryImpl {
    async fn find_ids_by_name(&self, name: &str) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        // The hash narrows the search; the join rules out collisions.
        let rows = sqlx::query(
            r#"
            SELECT i.id
            FROM coa_template_idx i
            JOIN coa_templates t ON t.id = i.id
            WHERE i.name_hash = $1 AND t.name = $2
            "#,
        )
        .bind(template_name_hash(name))
        .bind(name)
        .fetch_all(&*self.pool)
        .await?;

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.try_get("id")?);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use coa_core_db::repository::{CreateBatch, FindIdsByName};
    use serial_test::serial;
    use super::super::test_utils::test_utils::create_test_coa_template;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_ids_by_name_is_case_sensitive() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = &ctx.postgres_repos().coa_template_repository;

        let template = create_test_coa_template("Case Check");
        repo.create_batch(vec![template.clone()]).await?;

        assert_eq!(repo.find_ids_by_name(template.name.as_str()).await?, vec![template.id]);
        let lower = template.name.as_str().to_lowercase();
        assert!(repo.find_ids_by_name(&lower).await?.is_empty());

        Ok(())
    }
}
