use coa_core_api::{NormalBalance, ResolvedTemplateItem};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::coa::coa_template::bounded;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One account line of a template
/// - `account_code` is unique within its template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoaTemplateItemModel {
    pub id: Uuid,

    pub template_id: Uuid,

    pub account_code: HeaplessString<6>,
    pub account_name: HeaplessString<800>,

    pub class_id: Uuid,
    pub subclass_id: Uuid,
    pub type_id: Uuid,
    pub subtype_id: Uuid,

    pub normal_balance: NormalBalance,
    pub is_active: bool,
    pub sort_order: i32,
}

impl CoaTemplateItemModel {
    pub fn from_resolved(
        id: Uuid,
        template_id: Uuid,
        item: &ResolvedTemplateItem,
    ) -> Result<Self, String> {
        Ok(Self {
            id,
            template_id,
            account_code: bounded("account_code", item.account_code.as_str())?,
            account_name: bounded("account_name", &item.account_name)?,
            class_id: item.class_id,
            subclass_id: item.subclass_id,
            type_id: item.type_id,
            subtype_id: item.subtype_id,
            normal_balance: item.normal_balance,
            is_active: item.is_active,
            sort_order: item.sort_order,
        })
    }
}

impl Identifiable for CoaTemplateItemModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
