use coa_core_db::models::coa::{CoaTemplateIdxModel, CoaTemplateModel};
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

/// Template headers, kept in `coa_templates` with a name-hash row in `coa_template_idx`
pub struct CoaTemplateRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl CoaTemplateRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn load_all_coa_template_idx(&self) -> Result<Vec<CoaTemplateIdxModel>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM coa_template_idx")
            .fetch_all(&*self.pool)
            .await?;

        let mut idx_models = Vec::with_capacity(rows.len());
        for row in rows {
            idx_models.push(CoaTemplateIdxModel::try_from_row(&row).map_err(sqlx::Error::Decode)?);
        }
        Ok(idx_models)
    }
}

impl TryFromRow<PgRow> for CoaTemplateModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CoaTemplateModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            description: get_optional_heapless_string(row, "description")?,
            is_default: row.try_get("is_default")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFromRow<PgRow> for CoaTemplateIdxModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CoaTemplateIdxModel {
            id: row.try_get("id")?,
            name_hash: row.try_get("name_hash")?,
            is_default: row.try_get("is_default")?,
        })
    }
}
