use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{TemplateHeader, TemplateItemCandidate, TemplateRules};
use crate::error::CoreResult;

/// Entry points the API layer calls to maintain chart-of-accounts templates
///
/// Implementations validate and allocate every item before the first write,
/// and undo their own partial writes when a later step fails.
#[async_trait]
pub trait CoaTemplateService: Send + Sync {
    /// Create a template with its rules and items
    ///
    /// # Returns
    /// * `Ok(Uuid)` - The id of the new template header
    /// * `Err(CoreError)` - Nothing created by this call is left behind, except
    ///   rows listed in `StoreError::orphaned`
    async fn create_template(
        &self,
        header: TemplateHeader,
        rules: TemplateRules,
        items: Vec<TemplateItemCandidate>,
    ) -> CoreResult<Uuid>;

    /// Update the header in place and replace the rules and items
    ///
    /// If a store write fails after the old children were deleted, the header
    /// is kept and the template may be left without rules or items.
    async fn update_template(
        &self,
        id: Uuid,
        header: TemplateHeader,
        rules: TemplateRules,
        items: Vec<TemplateItemCandidate>,
    ) -> CoreResult<Uuid>;

    /// Delete a template together with its rules and items
    async fn delete_template(&self, id: Uuid) -> CoreResult<()>;
}
