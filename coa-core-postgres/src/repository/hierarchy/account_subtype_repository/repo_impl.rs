use coa_core_db::models::coa::AccountSubtypeModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct AccountSubtypeRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AccountSubtypeRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for AccountSubtypeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AccountSubtypeModel {
            id: row.try_get("id")?,
            type_id: row.try_get("type_id")?,
            code: row.try_get("code")?,
            name: get_heapless_string(row, "name")?,
        })
    }
}
