use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Level of the four-level account hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HierarchyLevel {
    Class,
    Subclass,
    Type,
    Subtype,
}

impl HierarchyLevel {
    /// The level directly above this one, if any
    pub fn parent(&self) -> Option<HierarchyLevel> {
        match self {
            HierarchyLevel::Class => None,
            HierarchyLevel::Subclass => Some(HierarchyLevel::Class),
            HierarchyLevel::Type => Some(HierarchyLevel::Subclass),
            HierarchyLevel::Subtype => Some(HierarchyLevel::Type),
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HierarchyLevel::Class => write!(f, "class"),
            HierarchyLevel::Subclass => write!(f, "subclass"),
            HierarchyLevel::Type => write!(f, "type"),
            HierarchyLevel::Subtype => write!(f, "subtype"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HierarchyErrorReason {
    NotFound,
    WrongParent,
}

/// A hierarchy reference that does not resolve, or resolves under the wrong parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyError {
    pub level: HierarchyLevel,
    pub id: Uuid,
    /// Id of the already-resolved parent the entity was expected under.
    /// `None` for the class level.
    pub expected_parent: Option<Uuid>,
    pub reason: HierarchyErrorReason,
}

impl HierarchyError {
    pub fn not_found(level: HierarchyLevel, id: Uuid, expected_parent: Option<Uuid>) -> Self {
        Self {
            level,
            id,
            expected_parent,
            reason: HierarchyErrorReason::NotFound,
        }
    }

    pub fn wrong_parent(level: HierarchyLevel, id: Uuid, expected_parent: Uuid) -> Self {
        Self {
            level,
            id,
            expected_parent: Some(expected_parent),
            reason: HierarchyErrorReason::WrongParent,
        }
    }
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = match (self.level.parent(), self.expected_parent) {
            (Some(level), Some(id)) => format!(" under {level} {id}"),
            _ => String::new(),
        };
        match self.reason {
            HierarchyErrorReason::NotFound => {
                write!(f, "{} {} not found{}", self.level, self.id, parent)
            }
            HierarchyErrorReason::WrongParent => {
                write!(f, "{} {} does not belong{}", self.level, self.id, parent)
            }
        }
    }
}

impl std::error::Error for HierarchyError {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeFormatError {
    #[error("Account code '{code}' must be exactly 6 digits")]
    MalformedAccountCode { code: String },

    #[error("Base code '{base_code}' must be exactly {expected_len} digits")]
    MalformedBaseCode { base_code: String, expected_len: usize },

    #[error("{level} code {code} does not fit its declared width of {width} digit(s)")]
    SegmentOverflow {
        level: HierarchyLevel,
        code: i32,
        width: usize,
    },

    #[error("No free sequence left for base code '{base_code}'")]
    SequenceExhausted { base_code: String },

    #[error("Code layout widths {widths:?} must each be at least 1 and sum to {expected_total}")]
    InvalidLayout {
        widths: [usize; 4],
        expected_total: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("A template named '{name}' already exists")]
    DuplicateTemplateName { name: String },

    #[error("Account code {code} declared by item {index} is already used by item {first_index}")]
    DuplicateAccountCode {
        code: String,
        first_index: usize,
        index: usize,
    },
}

/// Failure attached to a single candidate item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error(transparent)]
    CodeFormat(#[from] CodeFormatError),
}

/// Step of a save sequence at which the record store failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveStage {
    LoadHierarchy,
    LookupTemplate,
    InsertHeader,
    UpdateHeader,
    DeleteChildren,
    InsertRules,
    InsertItems,
    DeleteHeader,
}

impl fmt::Display for SaveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SaveStage::LoadHierarchy => "load hierarchy",
            SaveStage::LookupTemplate => "lookup template",
            SaveStage::InsertHeader => "insert header",
            SaveStage::UpdateHeader => "update header",
            SaveStage::DeleteChildren => "delete children",
            SaveStage::InsertRules => "insert rules",
            SaveStage::InsertItems => "insert items",
            SaveStage::DeleteHeader => "delete header",
        };
        write!(f, "{s}")
    }
}

/// A row left behind because its compensating delete failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanedRecord {
    pub collection: String,
    pub id: Uuid,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Store error during {stage}: {message}")]
pub struct StoreError {
    pub stage: SaveStage,
    pub message: String,
    /// The store rejected the write with a uniqueness violation
    pub conflict: bool,
    /// Rows whose compensating delete failed; these need operator follow-up
    pub orphaned: Vec<OrphanedRecord>,
}

impl StoreError {
    pub fn new(stage: SaveStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            conflict: false,
            orphaned: Vec::new(),
        }
    }

    pub fn requires_operator_attention(&self) -> bool {
        !self.orphaned.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Item {index} rejected: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: ItemError,
    },

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Template not found: {0}")]
    TemplateNotFound(Uuid),
}

impl CoreError {
    pub fn item(index: usize, source: impl Into<ItemError>) -> Self {
        CoreError::InvalidItem {
            index,
            source: source.into(),
        }
    }

    /// Index of the offending candidate item, when the error is tied to one
    pub fn item_index(&self) -> Option<usize> {
        match self {
            CoreError::InvalidItem { index, .. } => Some(*index),
            CoreError::Conflict(ConflictError::DuplicateAccountCode { index, .. }) => Some(*index),
            _ => None,
        }
    }

    /// Only store-level uniqueness violations are worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::Store(e) if e.conflict)
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_error_display_names_parent() {
        let subclass_id = Uuid::new_v4();
        let class_id = Uuid::new_v4();
        let err = HierarchyError::wrong_parent(HierarchyLevel::Subclass, subclass_id, class_id);
        let msg = err.to_string();
        assert!(msg.contains(&subclass_id.to_string()));
        assert!(msg.contains(&format!("class {class_id}")));
    }

    #[test]
    fn test_item_index() {
        let err = CoreError::item(
            5,
            HierarchyError::not_found(HierarchyLevel::Class, Uuid::new_v4(), None),
        );
        assert_eq!(err.item_index(), Some(5));
        assert!(!err.is_retryable());

        let err = CoreError::Conflict(ConflictError::DuplicateTemplateName {
            name: "Retail".to_string(),
        });
        assert_eq!(err.item_index(), None);
    }

    #[test]
    fn test_store_conflict_is_retryable() {
        let mut store = StoreError::new(SaveStage::InsertItems, "duplicate key");
        assert!(!CoreError::Store(store.clone()).is_retryable());
        store.conflict = true;
        assert!(CoreError::Store(store).is_retryable());
    }
}
