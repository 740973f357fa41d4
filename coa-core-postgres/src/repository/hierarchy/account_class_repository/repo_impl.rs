use coa_core_db::models::coa::AccountClassModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct AccountClassRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AccountClassRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for AccountClassModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AccountClassModel {
            id: row.try_get("id")?,
            code: row.try_get("code")?,
            name: get_heapless_string(row, "name")?,
            normal_balance: row.try_get("normal_balance")?,
        })
    }
}
