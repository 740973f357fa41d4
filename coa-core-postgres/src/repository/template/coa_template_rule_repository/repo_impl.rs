use coa_core_db::models::coa::CoaTemplateRuleModel;
use crate::utils::TryFromRow;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct CoaTemplateRuleRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl CoaTemplateRuleRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for CoaTemplateRuleModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CoaTemplateRuleModel {
            id: row.try_get("id")?,
            template_id: row.try_get("template_id")?,
            tax_type_id: row.try_get("tax_type_id")?,
            business_type_id: row.try_get("business_type_id")?,
            industry_type_id: row.try_get("industry_type_id")?,
        })
    }
}
