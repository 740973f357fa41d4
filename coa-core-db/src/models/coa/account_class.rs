use coa_core_api::NormalBalance;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - Top level of the account hierarchy (Assets, Liabilities, Equity, ...)
/// - The normal balance of every account below a class is fixed here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountClassModel {
    pub id: Uuid,
    pub code: i16,
    pub name: HeaplessString<400>,
    pub normal_balance: NormalBalance,
}

impl Identifiable for AccountClassModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
