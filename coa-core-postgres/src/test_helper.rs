//! Database setup shared by the Postgres tests
//!
//! Tests run against the database named by `DATABASE_URL` and are `#[ignore]`d
//! by default. Rows are not rolled back, so every test creates its own ids and
//! unique template names.

use crate::config::DatabaseConfig;
use crate::postgres_repositories::{PgCoaRepositories, PostgresRepositories};
use crate::repository::hierarchy::account_class_repository::test_utils::test_utils::create_test_account_class;
use crate::repository::hierarchy::account_subclass_repository::test_utils::test_utils::create_test_account_subclass;
use crate::repository::hierarchy::account_subtype_repository::test_utils::test_utils::create_test_account_subtype;
use crate::repository::hierarchy::account_type_repository::test_utils::test_utils::create_test_account_type;
use coa_core_db::models::coa::{
    AccountClassModel, AccountSubclassModel, AccountSubtypeModel, AccountTypeModel,
};
use coa_core_db::repository::{CoaRepositories, CreateBatch};
use sqlx::{PgPool, Postgres};
use std::sync::Arc;

pub struct TestContext {
    pub pool: Arc<PgPool>,
    pub postgres: PostgresRepositories,
    repos: PgCoaRepositories,
}

impl TestContext {
    pub fn postgres_repos(&self) -> &PgCoaRepositories {
        &self.repos
    }

    pub fn coa_repos(&self) -> CoaRepositories<Postgres> {
        self.repos.to_coa_repositories()
    }
}

pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let pool = DatabaseConfig::from_env()?.connect().await?;
    sqlx::migrate!().run(&pool).await?;

    let pool = Arc::new(pool);
    let postgres = PostgresRepositories::new(pool.clone());
    let repos = postgres.create_all_repositories();

    Ok(TestContext {
        pool,
        postgres,
        repos,
    })
}

/// One class / subclass / type / subtype chain stored in the database
pub struct SeededBranch {
    pub class: AccountClassModel,
    pub subclass: AccountSubclassModel,
    pub account_type: AccountTypeModel,
    pub subtype: AccountSubtypeModel,
}

pub async fn seed_branch(
    repos: &PgCoaRepositories,
    codes: [i16; 4],
) -> Result<SeededBranch, Box<dyn std::error::Error + Send + Sync>> {
    let [class_code, subclass_code, type_code, subtype_code] = codes;
    let class = create_test_account_class(class_code);
    let subclass = create_test_account_subclass(class.id, subclass_code);
    let account_type = create_test_account_type(subclass.id, type_code);
    let subtype = create_test_account_subtype(account_type.id, subtype_code);

    repos.account_class_repository.create_batch(vec![class.clone()]).await?;
    repos.account_subclass_repository.create_batch(vec![subclass.clone()]).await?;
    repos.account_type_repository.create_batch(vec![account_type.clone()]).await?;
    repos.account_subtype_repository.create_batch(vec![subtype.clone()]).await?;

    Ok(SeededBranch {
        class,
        subclass,
        account_type,
        subtype,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coa_core_db::repository::LoadBatch;
    use serial_test::serial;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_seed_branch_links_levels() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let branch = seed_branch(ctx.postgres_repos(), [1, 1, 0, 2]).await?;

        let subtypes = ctx
            .postgres_repos()
            .account_subtype_repository
            .load_batch(&[branch.subtype.id])
            .await?;
        let subtype = subtypes[0].as_ref().expect("subtype should exist");
        assert_eq!(subtype.type_id, branch.account_type.id);
        assert_eq!(subtype.code, 2);

        let types = ctx
            .postgres_repos()
            .account_type_repository
            .load_batch(&[branch.account_type.id])
            .await?;
        assert_eq!(types[0].as_ref().map(|t| t.subclass_id), Some(branch.subclass.id));

        Ok(())
    }
}
