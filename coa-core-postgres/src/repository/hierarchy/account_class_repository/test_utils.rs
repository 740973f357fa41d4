#[cfg(test)]
pub mod test_utils {
    use coa_core_api::NormalBalance;
    use coa_core_db::models::coa::AccountClassModel;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    pub fn create_test_account_class(code: i16) -> AccountClassModel {
        let (name, normal_balance) = match code {
            1 => ("Assets", NormalBalance::Debit),
            2 => ("Liabilities", NormalBalance::Credit),
            3 => ("Equity", NormalBalance::Credit),
            4 => ("Revenue", NormalBalance::Credit),
            _ => ("Expenses", NormalBalance::Debit),
        };
        AccountClassModel {
            id: Uuid::new_v4(),
            code,
            name: HeaplessString::try_from(name).unwrap(),
            normal_balance,
        }
    }
}
