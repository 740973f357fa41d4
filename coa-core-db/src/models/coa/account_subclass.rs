use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - Second level of the account hierarchy, owned by an account class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSubclassModel {
    pub id: Uuid,

    pub class_id: Uuid,

    pub code: i16,
    pub name: HeaplessString<400>,
}

impl Identifiable for AccountSubclassModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
