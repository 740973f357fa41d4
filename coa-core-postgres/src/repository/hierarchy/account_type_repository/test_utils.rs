#[cfg(test)]
pub mod test_utils {
    use coa_core_db::models::coa::AccountTypeModel;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn create_test_account_type(subclass_id: Uuid, code: i16) -> AccountTypeModel {
        AccountTypeModel {
            id: Uuid::new_v4(),
            subclass_id,
            code,
            name: HeaplessString::try_from("Cash and Cash Equivalents").unwrap(),
        }
    }
}
