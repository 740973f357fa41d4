pub mod create_batch;
pub mod delete_batch;
pub mod delete_by_template_id;
pub mod find_by_template_id;
pub mod repo_impl;

pub use repo_impl::CoaTemplateRuleRepositoryImpl;
