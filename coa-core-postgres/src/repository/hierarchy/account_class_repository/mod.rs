pub mod create_batch;
pub mod load_batch;
pub mod repo_impl;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AccountClassRepositoryImpl;
