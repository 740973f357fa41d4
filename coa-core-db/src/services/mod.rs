pub mod code_allocator;
pub mod hierarchy_index;
pub mod hierarchy_validator;
pub mod item_processor;
pub mod template_service;

#[cfg(test)]
pub mod test_utils;

pub use code_allocator::*;
pub use hierarchy_index::*;
pub use hierarchy_validator::*;
pub use item_processor::*;
pub use template_service::*;
