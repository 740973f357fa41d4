use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - Third level of the account hierarchy, owned by an account subclass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTypeModel {
    pub id: Uuid,

    pub subclass_id: Uuid,

    pub code: i16,
    pub name: HeaplessString<400>,
}

impl Identifiable for AccountTypeModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
