pub mod clear_default;
pub mod create_batch;
pub mod delete_batch;
pub mod find_by_id;
pub mod find_ids_by_name;
pub mod repo_impl;
pub mod update_batch;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CoaTemplateRepositoryImpl;
