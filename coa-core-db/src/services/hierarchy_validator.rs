use coa_core_api::{HierarchyError, HierarchyLevel, TemplateItemCandidate};

use crate::models::coa::{AccountClassModel, AccountSubclassModel, AccountSubtypeModel, AccountTypeModel};
use crate::services::code_allocator::CodeLayout;
use crate::services::hierarchy_index::HierarchyIndex;

/// The four entities a candidate item resolved to
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPath<'a> {
    pub class: &'a AccountClassModel,
    pub subclass: &'a AccountSubclassModel,
    pub account_type: &'a AccountTypeModel,
    pub subtype: &'a AccountSubtypeModel,
}

impl ResolvedPath<'_> {
    pub fn base_code(&self, layout: &CodeLayout) -> Result<String, coa_core_api::CodeFormatError> {
        layout.base_code(
            self.class.code,
            self.subclass.code,
            self.account_type.code,
            self.subtype.code,
        )
    }
}

/// Resolve the candidate's class, subclass, type and subtype in that order
///
/// Stops at the first level that is missing or not a child of the level
/// resolved above it.
pub fn validate<'a>(
    index: &'a HierarchyIndex,
    candidate: &TemplateItemCandidate,
) -> Result<ResolvedPath<'a>, HierarchyError> {
    let class = index
        .class(&candidate.class_id)
        .ok_or_else(|| HierarchyError::not_found(HierarchyLevel::Class, candidate.class_id, None))?;

    let subclass = match index.subclass(&candidate.subclass_id) {
        None => {
            return Err(HierarchyError::not_found(
                HierarchyLevel::Subclass,
                candidate.subclass_id,
                Some(class.id),
            ))
        }
        Some(s) if s.class_id != class.id => {
            return Err(HierarchyError::wrong_parent(
                HierarchyLevel::Subclass,
                s.id,
                class.id,
            ))
        }
        Some(s) => s,
    };

    let account_type = match index.account_type(&candidate.type_id) {
        None => {
            return Err(HierarchyError::not_found(
                HierarchyLevel::Type,
                candidate.type_id,
                Some(subclass.id),
            ))
        }
        Some(t) if t.subclass_id != subclass.id => {
            return Err(HierarchyError::wrong_parent(
                HierarchyLevel::Type,
                t.id,
                subclass.id,
            ))
        }
        Some(t) => t,
    };

    let subtype = match index.subtype(&candidate.subtype_id) {
        None => {
            return Err(HierarchyError::not_found(
                HierarchyLevel::Subtype,
                candidate.subtype_id,
                Some(account_type.id),
            ))
        }
        Some(s) if s.type_id != account_type.id => {
            return Err(HierarchyError::wrong_parent(
                HierarchyLevel::Subtype,
                s.id,
                account_type.id,
            ))
        }
        Some(s) => s,
    };

    Ok(ResolvedPath {
        class,
        subclass,
        account_type,
        subtype,
    })
}
