use sqlx::Database;
use std::sync::Arc;

use crate::models::coa::{
    AccountClassModel, AccountSubclassModel, AccountSubtypeModel, AccountTypeModel,
    CoaTemplateItemModel, CoaTemplateModel, CoaTemplateRuleModel,
};
use crate::repository::{
    ClearDefault, CreateBatch, DeleteBatch, DeleteByTemplateId, FindById, FindByTemplateId,
    FindIdsByName, LoadBatch, UpdateBatch,
};

/// Collection names as they appear in the record store
pub const ACCOUNT_CLASSES: &str = "account_classes";
pub const ACCOUNT_SUBCLASSES: &str = "account_subclasses";
pub const ACCOUNT_TYPES: &str = "account_types";
pub const ACCOUNT_SUBTYPES: &str = "account_subtypes";
pub const COA_TEMPLATES: &str = "coa_templates";
pub const COA_TEMPLATE_RULES: &str = "coa_template_rules";
pub const COA_TEMPLATE_ITEMS: &str = "coa_template_items";

pub trait AccountClassRepository<DB: Database>:
    LoadBatch<DB, AccountClassModel> + CreateBatch<DB, AccountClassModel>
{
}

impl<DB: Database, R> AccountClassRepository<DB> for R where
    R: LoadBatch<DB, AccountClassModel> + CreateBatch<DB, AccountClassModel>
{
}

pub trait AccountSubclassRepository<DB: Database>:
    LoadBatch<DB, AccountSubclassModel> + CreateBatch<DB, AccountSubclassModel>
{
}

impl<DB: Database, R> AccountSubclassRepository<DB> for R where
    R: LoadBatch<DB, AccountSubclassModel> + CreateBatch<DB, AccountSubclassModel>
{
}

pub trait AccountTypeRepository<DB: Database>:
    LoadBatch<DB, AccountTypeModel> + CreateBatch<DB, AccountTypeModel>
{
}

impl<DB: Database, R> AccountTypeRepository<DB> for R where
    R: LoadBatch<DB, AccountTypeModel> + CreateBatch<DB, AccountTypeModel>
{
}

pub trait AccountSubtypeRepository<DB: Database>:
    LoadBatch<DB, AccountSubtypeModel> + CreateBatch<DB, AccountSubtypeModel>
{
}

impl<DB: Database, R> AccountSubtypeRepository<DB> for R where
    R: LoadBatch<DB, AccountSubtypeModel> + CreateBatch<DB, AccountSubtypeModel>
{
}

pub trait CoaTemplateRepository<DB: Database>:
    FindById<DB, CoaTemplateModel>
    + CreateBatch<DB, CoaTemplateModel>
    + UpdateBatch<DB, CoaTemplateModel>
    + DeleteBatch<DB>
    + FindIdsByName<DB>
    + ClearDefault<DB>
{
}

impl<DB: Database, R> CoaTemplateRepository<DB> for R where
    R: FindById<DB, CoaTemplateModel>
        + CreateBatch<DB, CoaTemplateModel>
        + UpdateBatch<DB, CoaTemplateModel>
        + DeleteBatch<DB>
        + FindIdsByName<DB>
        + ClearDefault<DB>
{
}

pub trait CoaTemplateRuleRepository<DB: Database>:
    CreateBatch<DB, CoaTemplateRuleModel>
    + DeleteBatch<DB>
    + FindByTemplateId<DB, CoaTemplateRuleModel>
    + DeleteByTemplateId<DB>
{
}

impl<DB: Database, R> CoaTemplateRuleRepository<DB> for R where
    R: CreateBatch<DB, CoaTemplateRuleModel>
        + DeleteBatch<DB>
        + FindByTemplateId<DB, CoaTemplateRuleModel>
        + DeleteByTemplateId<DB>
{
}

pub trait CoaTemplateItemRepository<DB: Database>:
    CreateBatch<DB, CoaTemplateItemModel>
    + DeleteBatch<DB>
    + FindByTemplateId<DB, CoaTemplateItemModel>
    + DeleteByTemplateId<DB>
{
}

impl<DB: Database, R> CoaTemplateItemRepository<DB> for R where
    R: CreateBatch<DB, CoaTemplateItemModel>
        + DeleteBatch<DB>
        + FindByTemplateId<DB, CoaTemplateItemModel>
        + DeleteByTemplateId<DB>
{
}

/// Container for every collection the template core reads or writes
pub struct CoaRepositories<DB: Database> {
    pub account_class_repository: Arc<dyn AccountClassRepository<DB>>,
    pub account_subclass_repository: Arc<dyn AccountSubclassRepository<DB>>,
    pub account_type_repository: Arc<dyn AccountTypeRepository<DB>>,
    pub account_subtype_repository: Arc<dyn AccountSubtypeRepository<DB>>,
    pub coa_template_repository: Arc<dyn CoaTemplateRepository<DB>>,
    pub coa_template_rule_repository: Arc<dyn CoaTemplateRuleRepository<DB>>,
    pub coa_template_item_repository: Arc<dyn CoaTemplateItemRepository<DB>>,
}

impl<DB: Database> Clone for CoaRepositories<DB> {
    fn clone(&self) -> Self {
        Self {
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
