use coa_core_db::models::coa::AccountSubclassModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct AccountSubclassRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AccountSubclassRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for AccountSubclassModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AccountSubclassModel {
            id: row.try_get("id")?,
            class_id: row.try_get("class_id")?,
            code: row.try_get("code")?,
            name: get_heapless_string(row, "name")?,
        })
    }
}
