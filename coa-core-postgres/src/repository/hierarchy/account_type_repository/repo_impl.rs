use coa_core_db::models::coa::AccountTypeModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct AccountTypeRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AccountTypeRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for AccountTypeModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AccountTypeModel {
            id: row.try_get("id")?,
            subclass_id: row.try_get("subclass_id")?,
            code: row.try_get("code")?,
            name: get_heapless_string(row, "name")?,
        })
    }
}
