use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::account_code::AccountCode;
use super::normal_balance::NormalBalance;
use crate::error::{CoreError, CoreResult};

/// Literal the form layer uses for "no constraint" on a rule selector
pub const ANY_RULE_VALUE: &str = "any";

/// Template header as submitted by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TemplateHeader {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub is_default: bool,
    pub is_active: bool,
}

impl TemplateHeader {
    pub fn validate_input(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("name: must not be blank".to_string()));
        }
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

/// Applicability rules of a template. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRules {
    pub tax_type_id: Option<Uuid>,
    pub business_type_id: Option<Uuid>,
    pub industry_type_id: Option<Uuid>,
}

impl TemplateRules {
    /// Builds rules from raw form selections, where `"any"` or an empty value
    /// means no constraint.
    pub fn from_form(
        tax_type: &str,
        business_type: &str,
        industry_type: &str,
    ) -> CoreResult<Self> {
        Ok(Self {
            tax_type_id: parse_rule_selection("tax_type_id", tax_type)?,
            business_type_id: parse_rule_selection("business_type_id", business_type)?,
            industry_type_id: parse_rule_selection("industry_type_id", industry_type)?,
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.tax_type_id.is_none() && self.business_type_id.is_none() && self.industry_type_id.is_none()
    }
}

fn parse_rule_selection(field: &str, value: &str) -> CoreResult<Option<Uuid>> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ANY_RULE_VALUE) {
        return Ok(None);
    }
    Uuid::parse_str(value)
        .map(Some)
        .map_err(|e| CoreError::Validation(format!("{field}: {e}")))
}

/// A line item as submitted, before hierarchy validation and code allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TemplateItemCandidate {
    #[validate(length(min = 1, max = 200))]
    pub account_name: String,
    pub class_id: Uuid,
    pub subclass_id: Uuid,
    pub type_id: Uuid,
    pub subtype_id: Uuid,
    /// Inherited from the account class when absent
    pub normal_balance: Option<NormalBalance>,
    pub is_active: bool,
    /// Defaults to the 1-based position in the submitted list
    pub sort_order: Option<i32>,
    /// Explicit code pinned by the operator; never overwritten
    pub account_code: Option<String>,
}

/// A line item with its hierarchy confirmed and its code assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTemplateItem {
    pub account_code: AccountCode,
    pub account_name: String,
    pub class_id: Uuid,
    pub subclass_id: Uuid,
    pub type_id: Uuid,
    pub subtype_id: Uuid,
    pub normal_balance: NormalBalance,
    pub is_active: bool,
    pub sort_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_from_form_translates_any() {
        let industry = Uuid::new_v4();
        let rules = TemplateRules::from_form("any", "", &industry.to_string()).unwrap();
        assert_eq!(rules.tax_type_id, None);
        assert_eq!(rules.business_type_id, None);
        assert_eq!(rules.industry_type_id, Some(industry));
        assert!(!rules.is_unconstrained());

        assert!(TemplateRules::from_form("ANY", "any", "any")
            .unwrap()
            .is_unconstrained());
    }

    #[test]
    fn test_rules_from_form_rejects_garbage() {
        let err = TemplateRules::from_form("vat", "any", "any").unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.starts_with("tax_type_id")));
    }

    #[test]
    fn test_header_validation() {
        let mut header = TemplateHeader {
            name: "Retail - VAT".to_string(),
            description: None,
            is_default: false,
            is_active: true,
        };
        assert!(header.validate_input().is_ok());

        header.name = "   ".to_string();
        assert!(matches!(header.validate_input(), Err(CoreError::Validation(_))));

        header.name = "x".repeat(101);
        assert!(matches!(header.validate_input(), Err(CoreError::Validation(_))));
    }
}
