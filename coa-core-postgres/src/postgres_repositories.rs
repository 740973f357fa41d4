use coa_core_db::repository::CoaRepositories;
use coa_core_db::services::{CodeLayout, CoaTemplateServiceImpl};
use sqlx::{PgPool, Postgres};
use std::sync::Arc;

use crate::repository::hierarchy::{
    AccountClassRepositoryImpl, AccountSubclassRepositoryImpl, AccountSubtypeRepositoryImpl,
    AccountTypeRepositoryImpl,
};
use crate::repository::template::{
    CoaTemplateItemRepositoryImpl, CoaTemplateRepositoryImpl, CoaTemplateRuleRepositoryImpl,
};

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create every repository over the shared pool
    pub fn create_all_repositories(&self) -> PgCoaRepositories {
        PgCoaRepositories {
            account_class_repository: Arc::new(AccountClassRepositoryImpl::new(self.pool.clone())),
            account_subclass_repository: Arc::new(AccountSubclassRepositoryImpl::new(self.pool.clone())),
            account_type_repository: Arc::new(AccountTypeRepositoryImpl::new(self.pool.clone())),
            account_subtype_repository: Arc::new(AccountSubtypeRepositoryImpl::new(self.pool.clone())),
            coa_template_repository: Arc::new(CoaTemplateRepositoryImpl::new(self.pool.clone())),
            coa_template_rule_repository: Arc::new(CoaTemplateRuleRepositoryImpl::new(self.pool.clone())),
            coa_template_item_repository: Arc::new(CoaTemplateItemRepositoryImpl::new(self.pool.clone())),
        }
    }

    pub fn create_coa_repositories(&self) -> CoaRepositories<Postgres> {
        self.create_all_repositories().to_coa_repositories()
    }

    pub fn create_template_service(&self, layout: CodeLayout) -> CoaTemplateServiceImpl<Postgres> {
        CoaTemplateServiceImpl::new(self.create_coa_repositories(), layout)
    }
}

/// Concrete Postgres repositories
pub struct PgCoaRepositories {
    pub account_class_repository: Arc<AccountClassRepositoryImpl>,
    pub account_subclass_repository: Arc<AccountSubclassRepositoryImpl>,
    pub account_type_repository: Arc<AccountTypeRepositoryImpl>,
    pub account_subtype_repository: Arc<AccountSubtypeRepositoryImpl>,
    pub coa_template_repository: Arc<CoaTemplateRepositoryImpl>,
    pub coa_template_rule_repository: Arc<CoaTemplateRuleRepositoryImpl>,
    pub coa_template_item_repository: Arc<CoaTemplateItemRepositoryImpl>,
}

impl PgCoaRepositories {
    pub fn to_coa_repositories(&self) -> CoaRepositories<Postgres> {
        CoaRepositories {
            account_class_repository: self.account_class_repository.clone(),
            account_subclass_repository: self.account_subclass_repository.clone(),
            account_type_repository: self.account_type_repository.clone(),
            account_subtype_repository: self.account_subtype_repository.clone(),
            coa_template_repository: self.coa_template_repository.clone(),
            coa_template_rule_repository: self.coa_template_rule_repository.clone(),
            coa_template_item_repository: self.coa_template_item_repository.clone(),
        }
    }
}
