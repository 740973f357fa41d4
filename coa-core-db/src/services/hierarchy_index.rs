use coa_core_api::{HierarchyError, HierarchyLevel};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::coa::{AccountClassModel, AccountSubclassModel, AccountSubtypeModel, AccountTypeModel};

/// Id-keyed view over the four hierarchy collections
///
/// Built fresh for each batch from whatever the store returned. Nothing is
/// cached between batches, so staleness is up to the caller.
#[derive(Debug, Default, Clone)]
pub struct HierarchyIndex {
    classes: HashMap<Uuid, AccountClassModel>,
    subclasses: HashMap<Uuid, AccountSubclassModel>,
    types: HashMap<Uuid, AccountTypeModel>,
    subtypes: HashMap<Uuid, AccountSubtypeModel>,
}

impl HierarchyIndex {
    pub fn new(
        classes: impl IntoIterator<Item = AccountClassModel>,
        subclasses: impl IntoIterator<Item = AccountSubclassModel>,
        types: impl IntoIterator<Item = AccountTypeModel>,
        subtypes: impl IntoIterator<Item = AccountSubtypeModel>,
    ) -> Self {
        Self {
            classes: classes.into_iter().map(|c| (c.id, c)).collect(),
            subclasses: subclasses.into_iter().map(|s| (s.id, s)).collect(),
            types: types.into_iter().map(|t| (t.id, t)).collect(),
            subtypes: subtypes.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn class(&self, id: &Uuid) -> Option<&AccountClassModel> {
        self.classes.get(id)
    }

    pub fn subclass(&self, id: &Uuid) -> Option<&AccountSubclassModel> {
        self.subclasses.get(id)
    }

    pub fn account_type(&self, id: &Uuid) -> Option<&AccountTypeModel> {
        self.types.get(id)
    }

    pub fn subtype(&self, id: &Uuid) -> Option<&AccountSubtypeModel> {
        self.subtypes.get(id)
    }

    /// Parent class of a subclass
    pub fn class_of(&self, subclass_id: &Uuid) -> Result<&AccountClassModel, HierarchyError> {
        let subclass = self
            .subclass(subclass_id)
            .ok_or_else(|| HierarchyError::not_found(HierarchyLevel::Subclass, *subclass_id, None))?;
        self.class(&subclass.class_id)
            .ok_or_else(|| HierarchyError::not_found(HierarchyLevel::Class, subclass.class_id, None))
    }

    /// Parent subclass of a type
    pub fn subclass_of(&self, type_id: &Uuid) -> Result<&AccountSubclassModel, HierarchyError> {
        let account_type = self
            .account_type(type_id)
            .ok_or_else(|| HierarchyError::not_found(HierarchyLevel::Type, *type_id, None))?;
        self.subclass(&account_type.subclass_id).ok_or_else(|| {
            HierarchyError::not_found(HierarchyLevel::Subclass, account_type.subclass_id, None)
        })
    }

    /// Parent type of a subtype
    pub fn type_of(&self, subtype_id: &Uuid) -> Result<&AccountTypeModel, HierarchyError> {
        let subtype = self
            .subtype(subtype_id)
            .ok_or_else(|| HierarchyError::not_found(HierarchyLevel::Subtype, *subtype_id, None))?;
        self.account_type(&subtype.type_id)
            .ok_or_else(|| HierarchyError::not_found(HierarchyLevel::Type, subtype.type_id, None))
    }

    pub fn subclass_belongs_to(&self, subclass_id: &Uuid, class_id: &Uuid) -> bool {
        self.subclass(subclass_id)
            .is_some_and(|s| s.class_id == *class_id && self.classes.contains_key(class_id))
    }

    pub fn type_belongs_to(&self, type_id: &Uuid, subclass_id: &Uuid) -> bool {
        self.account_type(type_id)
            .is_some_and(|t| t.subclass_id == *subclass_id && self.subclasses.contains_key(subclass_id))
    }

    pub fn subtype_belongs_to(&self, subtype_id: &Uuid, type_id: &Uuid) -> bool {
        self.subtype(subtype_id)
            .is_some_and(|s| s.type_id == *type_id && self.types.contains_key(type_id))
    }
}
