#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use coa_core_db::models::coa::CoaTemplateModel;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    /// Template with `name_prefix` made unique by its id
    pub fn create_test_coa_template(name_prefix: &str) -> CoaTemplateModel {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let name = format!("{name_prefix} {}", id.simple());
        CoaTemplateModel {
            id,
            name: HeaplessString::try_from(name.as_str()).unwrap(),
            description: Some(HeaplessString::try_from("Test template").unwrap()),
            is_default: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
