use super::index::Index;

/// Trait for models that maintain a companion index record
pub trait IndexAware {
    /// The associated Index type that this type can be converted to
    type IndexType: Index;

    /// Converts this type to its Index record
    fn to_index(&self) -> Self::IndexType;
}
