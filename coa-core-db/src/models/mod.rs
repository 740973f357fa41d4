pub mod identifiable;
pub mod index;
pub mod index_aware;
pub mod coa;

// Re-exports
pub use identifiable::*;
pub use index::*;
pub use index_aware::*;
pub use coa::*;
