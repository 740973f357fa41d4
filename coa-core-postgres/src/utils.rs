use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// Row-to-model mapping for models whose bounded text columns have no `sqlx` decoder
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

fn bounded<const N: usize>(col_name: &str, value: &str) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    HeaplessString::try_from(value)
        .map_err(|_| format!("Value for column '{col_name}' is too long (max {N} bytes)").into())
}

/// Reads a NOT NULL text column into a `HeaplessString<N>`
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let value: String = row.try_get(col_name)?;
    bounded(col_name, &value)
}

pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let value: Option<String> = row.try_get(col_name)?;
    value.as_deref().map(|v| bounded(col_name, v)).transpose()
}

/// Maps every row, failing on the first one that does not decode
pub fn rows_into<T: TryFromRow<PgRow>>(rows: &[PgRow]) -> Result<Vec<T>, Box<dyn Error + Send + Sync>> {
    rows.iter().map(T::try_from_row).collect()
}
