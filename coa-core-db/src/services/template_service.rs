use async_trait::async_trait;
use chrono::Utc;
use coa_core_api::{
    CoaTemplateService, ConflictError, CoreError, CoreResult, OrphanedRecord, SaveStage, StoreError,
    TemplateHeader, TemplateItemCandidate, TemplateRules,
};
use sqlx::Database;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

use crate::models::coa::{CoaTemplateItemModel, CoaTemplateModel, CoaTemplateRuleModel};
use crate::repository::{
    ClearDefault, CoaRepositories, CreateBatch, DeleteBatch, DeleteByTemplateId, FindById,
    FindIdsByName, LoadBatch, UpdateBatch, COA_TEMPLATES, COA_TEMPLATE_RULES,
};
use crate::services::code_allocator::CodeLayout;
use crate::services::hierarchy_index::HierarchyIndex;
use crate::services::item_processor::TemplateItemProcessor;

/// Rows of one template, fully validated and ready to write
struct PreparedTemplate {
    header: CoaTemplateModel,
    rule: CoaTemplateRuleModel,
    items: Vec<CoaTemplateItemModel>,
}

/// Persists templates across the header, rule and item collections
///
/// The three collections are written one after another without a shared
/// transaction. When a later write fails, the rows written earlier in the same
/// call are deleted again before the error is returned.
pub struct CoaTemplateServiceImpl<DB: Database> {
    repos: CoaRepositories<DB>,
    layout: CodeLayout,
}

impl<DB: Database> CoaTemplateServiceImpl<DB> {
    pub fn new(repos: CoaRepositories<DB>, layout: CodeLayout) -> Self {
        Self { repos, layout }
    }

    /// Load exactly the hierarchy entities the candidates refer to
    pub async fn load_hierarchy(&self, items: &[TemplateItemCandidate]) -> CoreResult<HierarchyIndex> {
        if items.is_empty() {
            return Ok(HierarchyIndex::default());
        }

        let class_ids = distinct(items.iter().map(|i| i.class_id));
        let subclass_ids = distinct(items.iter().map(|i| i.subclass_id));
        let type_ids = distinct(items.iter().map(|i| i.type_id));
        let subtype_ids = distinct(items.iter().map(|i| i.subtype_id));

        let classes = self
            .repos
            .account_class_repository
            .load_batch(&class_ids)
            .await
            .map_err(|e| store_error(SaveStage::LoadHierarchy, e))?;
        let subclasses = self
            .repos
            .account_subclass_repository
            .load_batch(&subclass_ids)
            .await
            .map_err(|e| store_error(SaveStage::LoadHierarchy, e))?;
        let types = self
            .repos
            .account_type_repository
            .load_batch(&type_ids)
            .await
            .map_err(|e| store_error(SaveStage::LoadHierarchy, e))?;
        let subtypes = self
            .repos
            .account_subtype_repository
            .load_batch(&subtype_ids)
            .await
            .map_err(|e| store_error(SaveStage::LoadHierarchy, e))?;

        Ok(HierarchyIndex::new(
            classes.into_iter().flatten(),
            subclasses.into_iter().flatten(),
            types.into_iter().flatten(),
            subtypes.into_iter().flatten(),
        ))
    }

    async fn ensure_unique_name(&self, name: &str, current: Option<Uuid>) -> CoreResult<()> {
        let ids = self
            .repos
            .coa_template_repository
            .find_ids_by_name(name)
            .await
            .map_err(|e| store_error(SaveStage::LookupTemplate, e))?;
        if ids.iter().any(|id| Some(*id) != current) {
            return Err(ConflictError::DuplicateTemplateName {
                name: name.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Every check that must pass before the first write
    async fn prepare(
        &self,
        template_id: Uuid,
        header: &TemplateHeader,
        rules: &TemplateRules,
        items: &[TemplateItemCandidate],
        existing: Option<&CoaTemplateModel>,
    ) -> CoreResult<PreparedTemplate> {
        header.validate_input()?;
        self.ensure_unique_name(&header.name, existing.map(|t| t.id))
            .await?;

        let index = self.load_hierarchy(items).await?;
        let resolved = TemplateItemProcessor::new(&index, &self.layout).process(items)?;

        let now = Utc::now();
        let header_model = match existing {
            Some(current) => current.apply_header(header, now),
            None => CoaTemplateModel::from_header(template_id, header, now),
        }
        .map_err(CoreError::Validation)?;

        let item_models = resolved
            .iter()
            .enumerate()
            .map(|(index, item)| {
                CoaTemplateItemModel::from_resolved(Uuid::new_v4(), template_id, item)
                    .map_err(|e| CoreError::Validation(format!("item {index}: {e}")))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(PreparedTemplate {
            header: header_model,
            rule: CoaTemplateRuleModel::from_rules(Uuid::new_v4(), template_id, rules),
            items: item_models,
        })
    }

    /// Best effort: a failure is logged and the save carries on
    async fn clear_other_defaults(&self, keep: Option<Uuid>) {
        match self.repos.coa_template_repository.clear_default(keep).await {
            Ok(cleared) if !cleared.is_empty() => {
                tracing::debug!(cleared = ?cleared, "cleared previous default templates");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to clear previous default templates");
            }
        }
    }

    async fn compensate_rule(&self, rule_id: Uuid, err: &mut StoreError) {
        let result = self
            .repos
            .coa_template_rule_repository
            .delete_batch(&[rule_id])
            .await;
        record_compensation(result, COA_TEMPLATE_RULES, rule_id, err);
    }

    async fn compensate_header(&self, template_id: Uuid, err: &mut StoreError) {
        let result = self
            .repos
            .coa_template_repository
            .delete_batch(&[template_id])
            .await;
        record_compensation(result, COA_TEMPLATES, template_id, err);
    }

    async fn find_template(&self, id: Uuid) -> CoreResult<CoaTemplateModel> {
        self.repos
            .coa_template_repository
            .find_by_id(id)
            .await
            .map_err(|e| store_error(SaveStage::LookupTemplate, e))?
            .ok_or(CoreError::TemplateNotFound(id))
    }
}

#[async_trait]
impl<DB: Database> CoaTemplateService for CoaTemplateServiceImpl<DB> {
    async fn create_template(
        &self,
        header: TemplateHeader,
        rules: TemplateRules,
        items: Vec<TemplateItemCandidate>,
    ) -> CoreResult<Uuid> {
        let template_id = Uuid::new_v4();
        let prepared = self
            .prepare(template_id, &header, &rules, &items, None)
            .await?;
        let rule_id = prepared.rule.id;
        let item_count = prepared.items.len();

        if header.is_default {
            self.clear_other_defaults(None).await;
        }

        self.repos
            .coa_template_repository
            .create_batch(vec![prepared.header])
            .await
            .map_err(|e| store_error(SaveStage::InsertHeader, e))?;

        if let Err(e) = self
            .repos
            .coa_template_rule_repository
            .create_batch(vec![prepared.rule])
            .await
        {
            let mut err = store_error(SaveStage::InsertRules, e);
            self.compensate_header(template_id, &mut err).await;
            return Err(err.into());
        }

        if let Err(e) = self
            .repos
            .coa_template_item_repository
            .create_batch(prepared.items)
            .await
        {
            let mut err = store_error(SaveStage::InsertItems, e);
            self.compensate_rule(rule_id, &mut err).await;
            self.compensate_header(template_id, &mut err).await;
            return Err(err.into());
        }

        tracing::info!(
            template_id = %template_id,
            items = item_count,
            unconstrained = rules.is_unconstrained(),
            "created COA template"
        );
        Ok(template_id)
    }

    async fn update_template(
        &self,
        id: Uuid,
        header: TemplateHeader,
        rules: TemplateRules,
        items: Vec<TemplateItemCandidate>,
    ) -> CoreResult<Uuid> {
        let existing = self.find_template(id).await?;
        let prepared = self
            .prepare(id, &header, &rules, &items, Some(&existing))
            .await?;
        let rule_id = prepared.rule.id;
        let item_count = prepared.items.len();

        if header.is_default {
            self.clear_other_defaults(Some(id)).await;
        }

        self.repos
            .coa_template_repository
            .update_batch(vec![prepared.header])
            .await
            .map_err(|e| store_error(SaveStage::UpdateHeader, e))?;

        self.repos
            .coa_template_rule_repository
            .delete_by_template_id(id)
            .await
            .map_err(|e| store_error(SaveStage::DeleteChildren, e))?;
        self.repos
            .coa_template_item_repository
            .delete_by_template_id(id)
            .await
            .map_err(|e| store_error(SaveStage::DeleteChildren, e))?;

        self.repos
            .coa_template_rule_repository
            .create_batch(vec![prepared.rule])
            .await
            .map_err(|e| store_error(SaveStage::InsertRules, e))?;

        if let Err(e) = self
            .repos
            .coa_template_item_repository
            .create_batch(prepared.items)
            .await
        {
            // The header already existed and stays; only the new rules row goes.
            let mut err = store_error(SaveStage::InsertItems, e);
            self.compensate_rule(rule_id, &mut err).await;
            tracing::warn!(template_id = %id, "template left without rules or items after failed update");
            return Err(err.into());
        }

        tracing::info!(
            template_id = %id,
            items = item_count,
            unconstrained = rules.is_unconstrained(),
            "updated COA template"
        );
        Ok(id)
    }

    async fn delete_template(&self, id: Uuid) -> CoreResult<()> {
        self.find_template(id).await?;

        self.repos
            .coa_template_item_repository
            .delete_by_template_id(id)
            .await
            .map_err(|e| store_error(SaveStage::DeleteChildren, e))?;
        self.repos
            .coa_template_rule_repository
            .delete_by_template_id(id)
            .await
            .map_err(|e| store_error(SaveStage::DeleteChildren, e))?;
        self.repos
            .coa_template_repository
            .delete_batch(&[id])
            .await
            .map_err(|e| store_error(SaveStage::DeleteHeader, e))?;

        tracing::info!(template_id = %id, "deleted COA template");
        Ok(())
    }
}

fn distinct(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

/// Wrap a repository failure, flagging unique-constraint violations as conflicts
fn store_error(stage: SaveStage, err: Box<dyn Error + Send + Sync>) -> StoreError {
    let conflict = err
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|e| e.is_unique_violation());
    let mut store = StoreError::new(stage, err.to_string());
    store.conflict = conflict;
    store
}

fn record_compensation(
    result: Result<usize, Box<dyn Error + Send + Sync>>,
    collection: &str,
    id: Uuid,
    err: &mut StoreError,
) {
    if let Err(e) = result {
        tracing::error!(
            collection,
            id = %id,
            stage = ?err.stage,
            error = %e,
            "compensating delete failed, row needs manual cleanup"
        );
        err.orphaned.push(OrphanedRecord {
            collection: collection.to_string(),
            id,
        });
    }
}
