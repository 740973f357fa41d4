#[cfg(test)]
pub mod test_utils {
    use coa_core_db::models::coa::AccountSubclassModel;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn create_test_account_subclass(class_id: Uuid, code: i16) -> AccountSubclassModel {
        AccountSubclassModel {
            id: Uuid::new_v4(),
            class_id,
            code,
            name: HeaplessString::try_from("Current Assets").unwrap(),
        }
    }
}
