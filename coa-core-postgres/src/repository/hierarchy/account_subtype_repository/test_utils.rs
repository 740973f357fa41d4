#[cfg(test)]
pub mod test_utils {
    use coa_core_db::models::coa::AccountSubtypeModel;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn create_test_account_subtype(type_id: Uuid, code: i16) -> AccountSubtypeModel {
        AccountSubtypeModel {
            id: Uuid::new_v4(),
            type_id,
            code,
            name: HeaplessString::try_from("Cash on Hand").unwrap(),
        }
    }
}
