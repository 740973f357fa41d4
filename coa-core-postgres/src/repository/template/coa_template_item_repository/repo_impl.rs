use coa_core_db::models::coa::CoaTemplateItemModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct CoaTemplateItemRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl CoaTemplateItemRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for CoaTemplateItemModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CoaTemplateItemModel {
            id: row.try_get("id")?,
            template_id: row.try_get("template_id")?,
            account_code: get_heapless_string(row, "account_code")?,
            account_name: get_heapless_string(row, "account_name")?,
            class_id: row.try_get("class_id")?,
            subclass_id: row.try_get("subclass_id")?,
            type_id: row.try_get("type_id")?,
            subtype_id: row.try_get("subtype_id")?,
            normal_balance: row.try_get("normal_balance")?,
            is_active: row.try_get("is_active")?,
            sort_order: row.try_get("sort_order")?,
        })
    }
}
