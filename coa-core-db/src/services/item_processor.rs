use coa_core_api::{
    AccountCode, ConflictError, CoreError, CoreResult, ResolvedTemplateItem, TemplateItemCandidate,
};
use std::collections::{HashMap, HashSet};
use validator::Validate;

use crate::services::code_allocator::{allocate, CodeLayout};
use crate::services::hierarchy_index::HierarchyIndex;
use crate::services::hierarchy_validator::validate;

/// Turns submitted candidates into fully resolved template items
///
/// All or nothing: the first invalid candidate aborts the batch and no
/// partial result is returned. Codes are unique within the batch only.
pub struct TemplateItemProcessor<'a> {
    index: &'a HierarchyIndex,
    layout: &'a CodeLayout,
}

impl<'a> TemplateItemProcessor<'a> {
    pub fn new(index: &'a HierarchyIndex, layout: &'a CodeLayout) -> Self {
        Self { index, layout }
    }

    pub fn process(&self, candidates: &[TemplateItemCandidate]) -> CoreResult<Vec<ResolvedTemplateItem>> {
        let explicit = Self::explicit_codes(candidates);
        let mut used_codes: HashSet<String> = explicit
            .iter()
            .filter_map(|code| code.as_ref()?.as_ref().ok())
            .map(|code| code.as_str().to_string())
            .collect();

        let mut resolved = Vec::with_capacity(candidates.len());
        for (index, (candidate, explicit_code)) in candidates.iter().zip(explicit).enumerate() {
            candidate
                .validate()
                .map_err(|e| CoreError::Validation(format!("item {index}: {e}")))?;

            let path = validate(self.index, candidate).map_err(|e| CoreError::item(index, e))?;

            let account_code = match explicit_code {
                Some(code) => code?,
                None => {
                    let base_code = path
                        .base_code(self.layout)
                        .map_err(|e| CoreError::item(index, e))?;
                    let code = allocate(&base_code, &used_codes).map_err(|e| CoreError::item(index, e))?;
                    used_codes.insert(code.clone());
                    AccountCode::parse(&code).map_err(|e| CoreError::item(index, e))?
                }
            };

            resolved.push(ResolvedTemplateItem {
                account_code,
                account_name: candidate.account_name.clone(),
                class_id: candidate.class_id,
                subclass_id: candidate.subclass_id,
                type_id: candidate.type_id,
                subtype_id: candidate.subtype_id,
                normal_balance: candidate.normal_balance.unwrap_or(path.class.normal_balance),
                is_active: candidate.is_active,
                sort_order: candidate.sort_order.unwrap_or(index as i32 + 1),
            });
        }

        tracing::debug!(items = resolved.len(), "resolved template items");
        Ok(resolved)
    }

    /// Parse every pinned code up front so generated codes can avoid pinned
    /// codes that appear later in the list. Failures stay attached to their
    /// index and surface only when the loop reaches that item.
    fn explicit_codes(candidates: &[TemplateItemCandidate]) -> Vec<Option<CoreResult<AccountCode>>> {
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let raw = candidate.account_code.as_deref()?;
                let parsed = AccountCode::parse(raw)
                    .map_err(|e| CoreError::item(index, e))
                    .and_then(|code| match first_seen.get(code.as_str()) {
                        Some(&first_index) => Err(ConflictError::DuplicateAccountCode {
                            code: code.as_str().to_string(),
                            first_index,
                            index,
                        }
                        .into()),
                        None => {
                            first_seen.insert(code.as_str().to_string(), index);
                            Ok(code)
                        }
                    });
                Some(parsed)
            })
            .collect()
    }
}
