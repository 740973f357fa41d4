//! Fixtures and an in-memory record store for exercising the template core
//! without a database.

use async_trait::async_trait;
use coa_core_api::{NormalBalance, TemplateItemCandidate};
use heapless::String as HeaplessString;
use parking_lot::Mutex;
use sqlx::Postgres;
use std::collections::HashSet;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::coa::*;
use crate::models::identifiable::Identifiable;
use crate::repository::*;
use crate::services::hierarchy_index::HierarchyIndex;

/// One complete class / subclass / type / subtype branch
#[derive(Debug, Clone)]
pub struct HierarchyFixture {
    pub class: AccountClassModel,
    pub subclass: AccountSubclassModel,
    pub account_type: AccountTypeModel,
    pub subtype: AccountSubtypeModel,
}

impl HierarchyFixture {
    pub fn new() -> Self {
        Self::with_codes(1, 0, 0, 1)
    }

    pub fn with_codes(class_code: i16, subclass_code: i16, type_code: i16, subtype_code: i16) -> Self {
        let class = AccountClassModel {
            id: Uuid::new_v4(),
            code: class_code,
            name: HeaplessString::try_from("Assets").unwrap(),
            normal_balance: NormalBalance::Debit,
        };
        let subclass = AccountSubclassModel {
            id: Uuid::new_v4(),
            class_id: class.id,
            code: subclass_code,
            name: HeaplessString::try_from("Current Assets").unwrap(),
        };
        let account_type = AccountTypeModel {
            id: Uuid::new_v4(),
            subclass_id: subclass.id,
            code: type_code,
            name: HeaplessString::try_from("Cash and Cash Equivalents").unwrap(),
        };
        let subtype = AccountSubtypeModel {
            id: Uuid::new_v4(),
            type_id: account_type.id,
            code: subtype_code,
            name: HeaplessString::try_from("Cash on Hand").unwrap(),
        };
        Self {
            class,
            subclass,
            account_type,
            subtype,
        }
    }

    pub fn index(&self) -> HierarchyIndex {
        HierarchyIndex::new(
            vec![self.class.clone()],
            vec![self.subclass.clone()],
            vec![self.account_type.clone()],
            vec![self.subtype.clone()],
        )
    }

    pub fn candidate(&self, account_name: &str) -> TemplateItemCandidate {
        TemplateItemCandidate {
            account_name: account_name.to_string(),
            class_id: self.class.id,
            subclass_id: self.subclass.id,
            type_id: self.account_type.id,
            subtype_id: self.subtype.id,
            normal_balance: None,
            is_active: true,
            sort_order: None,
            account_code: None,
        }
    }
}

type CallLog = Arc<Mutex<Vec<String>>>;

/// A single in-memory collection with failure injection and a call log
pub struct InMemoryRepo<T> {
    collection: &'static str,
    rows: Mutex<Vec<T>>,
    failures: Mutex<HashSet<&'static str>>,
    calls: CallLog,
}

impl<T: Clone> InMemoryRepo<T> {
    fn new(collection: &'static str, calls: CallLog) -> Self {
        Self {
            collection,
            rows: Mutex::new(Vec::new()),
            failures: Mutex::new(HashSet::new()),
            calls,
        }
    }

    /// Make every later call of `operation` fail
    pub fn fail_on(&self, operation: &'static str) {
        self.failures.lock().insert(operation);
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.lock().clone()
    }

    pub fn seed(&self, rows: Vec<T>) {
        self.rows.lock().extend(rows);
    }

    fn enter(&self, operation: &'static str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.lock().push(format!("{}.{}", self.collection, operation));
        if self.failures.lock().contains(operation) {
            return Err(format!("{}.{} unavailable", self.collection, operation).into());
        }
        Ok(())
    }
}

#[async_trait]
impl<T> LoadBatch<Postgres, T> for InMemoryRepo<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    async fn load_batch(&self, ids: &[Uuid]) -> Result<Vec<Option<T>>, Box<dyn Error + Send + Sync>> {
        self.enter("load_batch")?;
        let rows = self.rows.lock();
        Ok(ids
            .iter()
            .map(|id| rows.iter().find(|r| r.get_id() == *id).cloned())
            .collect())
    }
}

#[async_trait]
impl<T> FindById<Postgres, T> for InMemoryRepo<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, Box<dyn Error + Send + Sync>> {
        self.enter("find_by_id")?;
        Ok(self.rows.lock().iter().find(|r| r.get_id() == id).cloned())
    }
}

#[async_trait]
impl<T> CreateBatch<Postgres, T> for InMemoryRepo<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    async fn create_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.enter("create_batch")?;
        let mut rows = self.rows.lock();
        if items
            .iter()
            .any(|item| rows.iter().any(|r| r.get_id() == item.get_id()))
        {
            return Err(format!("{}: duplicate id", self.collection).into());
        }
        rows.extend(items.iter().cloned());
        Ok(items)
    }
}

#[async_trait]
impl<T> UpdateBatch<Postgres, T> for InMemoryRepo<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    async fn update_batch(&self, items: Vec<T>) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.enter("update_batch")?;
        let mut rows = self.rows.lock();
        for item in &items {
            let row = rows
                .iter_mut()
                .find(|r| r.get_id() == item.get_id())
                .ok_or_else(|| format!("{}: {} not found", self.collection, item.get_id()))?;
            *row = item.clone();
        }
        Ok(items)
    }
}

#[async_trait]
impl<T> DeleteBatch<Postgres> for InMemoryRepo<T>
where
    T: Identifiable + Clone + Send + Sync,
{
    async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        self.enter("delete_batch")?;
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|r| !ids.contains(&r.get_id()));
        Ok(before - rows.len())
    }
}

#[async_trait]
impl FindIdsByName<Postgres> for InMemoryRepo<CoaTemplateModel> {
    async fn find_ids_by_name(&self, name: &str) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        self.enter("find_ids_by_name")?;
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|t| t.name.as_str() == name)
            .map(|t| t.id)
            .collect())
    }
}

#[async_trait]
impl ClearDefault<Postgres> for InMemoryRepo<CoaTemplateModel> {
    async fn clear_default(&self, keep: Option<Uuid>) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        self.enter("clear_default")?;
        let mut cleared = Vec::new();
        for template in self.rows.lock().iter_mut() {
            if template.is_default && Some(template.id) != keep {
                template.is_default = false;
                cleared.push(template.id);
            }
        }
        Ok(cleared)
    }
}

/// Child rows owned by a template
pub trait TemplateChild {
    fn template_id(&self) -> Uuid;
}

impl TemplateChild for CoaTemplateRuleModel {
    fn template_id(&self) -> Uuid {
        self.template_id
    }
}

impl TemplateChild for CoaTemplateItemModel {
    fn template_id(&self) -> Uuid {
        self.template_id
    }
}

#[async_trait]
impl<T> FindByTemplateId<Postgres, T> for InMemoryRepo<T>
where
    T: TemplateChild + Identifiable + Clone + Send + Sync,
{
    async fn find_by_template_id(&self, template_id: Uuid) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
        self.enter("find_by_template_id")?;
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|r| r.template_id() == template_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl<T> DeleteByTemplateId<Postgres> for InMemoryRepo<T>
where
    T: TemplateChild + Identifiable + Clone + Send + Sync,
{
    async fn delete_by_template_id(&self, template_id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        self.enter("delete_by_template_id")?;
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|r| r.template_id() != template_id);
        Ok(before - rows.len())
    }
}

/// All seven collections backed by memory, sharing one call log
pub struct InMemoryStore {
    pub classes: Arc<InMemoryRepo<AccountClassModel>>,
    pub subclasses: Arc<InMemoryRepo<AccountSubclassModel>>,
    pub types: Arc<InMemoryRepo<AccountTypeModel>>,
    pub subtypes: Arc<InMemoryRepo<AccountSubtypeModel>>,
    pub templates: Arc<InMemoryRepo<CoaTemplateModel>>,
    pub rules: Arc<InMemoryRepo<CoaTemplateRuleModel>>,
    pub items: Arc<InMemoryRepo<CoaTemplateItemModel>>,
    calls: CallLog,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        Self {
            classes: Arc::new(InMemoryRepo::new(ACCOUNT_CLASSES, calls.clone())),
            subclasses: Arc::new(InMemoryRepo::new(ACCOUNT_SUBCLASSES, calls.clone())),
            types: Arc::new(InMemoryRepo::new(ACCOUNT_TYPES, calls.clone())),
            subtypes: Arc::new(InMemoryRepo::new(ACCOUNT_SUBTYPES, calls.clone())),
            templates: Arc::new(InMemoryRepo::new(COA_TEMPLATES, calls.clone())),
            rules: Arc::new(InMemoryRepo::new(COA_TEMPLATE_RULES, calls.clone())),
            items: Arc::new(InMemoryRepo::new(COA_TEMPLATE_ITEMS, calls.clone())),
            calls,
        }
    }

    pub fn seed_hierarchy(&self, fixture: &HierarchyFixture) {
        self.classes.seed(vec![fixture.class.clone()]);
        self.subclasses.seed(vec![fixture.subclass.clone()]);
        self.types.seed(vec![fixture.account_type.clone()]);
        self.subtypes.seed(vec![fixture.subtype.clone()]);
    }

    pub fn repositories(&self) -> CoaRepositories<Postgres> {
        CoaRepositories {
            account_class_repository: self.classes.clone(),
            account_subclass_repository: self.subclasses.clone(),
            account_type_repository: self.types.clone(),
            account_subtype_repository: self.subtypes.clone(),
            coa_template_repository: self.templates.clone(),
            coa_template_rule_repository: self.rules.clone(),
            coa_template_item_repository: self.items.clone(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count_calls(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == call).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}
