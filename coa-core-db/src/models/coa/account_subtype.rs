use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - Fourth level of the account hierarchy, owned by an account type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSubtypeModel {
    pub id: Uuid,

    pub type_id: Uuid,

    pub code: i16,
    pub name: HeaplessString<400>,
}

impl Identifiable for AccountSubtypeModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
