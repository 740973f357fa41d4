pub mod find_by_id;
pub mod load_batch;
pub mod create_batch;
pub mod update_batch;
pub mod delete_batch;
pub mod find_by_template_id;
pub mod delete_by_template_id;
pub mod find_ids_by_name;
pub mod clear_default;
pub mod coa_repositories;

// Re-exports
pub use find_by_id::*;
pub use load_batch::*;
pub use create_batch::*;
pub use update_batch::*;
pub use delete_batch::*;
pub use find_by_template_id::*;
pub use delete_by_template_id::*;
pub use find_ids_by_name::*;
pub use clear_default::*;
pub use coa_repositories::*;
