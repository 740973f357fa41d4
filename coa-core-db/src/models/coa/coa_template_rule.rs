use coa_core_api::TemplateRules;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - Applicability rules of a template; `None` means no constraint
/// - Exactly one row per template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoaTemplateRuleModel {
    pub id: Uuid,

    pub template_id: Uuid,

    pub tax_type_id: Option<Uuid>,
    pub business_type_id: Option<Uuid>,
    pub industry_type_id: Option<Uuid>,
}

impl CoaTemplateRuleModel {
    pub fn from_rules(id: Uuid, template_id: Uuid, rules: &TemplateRules) -> Self {
        Self {
            id,
            template_id,
            tax_type_id: rules.tax_type_id,
            business_type_id: rules.business_type_id,
            industry_type_id: rules.industry_type_id,
        }
    }
}

impl Identifiable for CoaTemplateRuleModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
