pub mod coa_template_item_repository;
pub mod coa_template_repository;
pub mod coa_template_rule_repository;

pub use coa_template_item_repository::CoaTemplateItemRepositoryImpl;
pub use coa_template_repository::CoaTemplateRepositoryImpl;
pub use coa_template_rule_repository::CoaTemplateRuleRepositoryImpl;
