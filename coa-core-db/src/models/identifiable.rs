use uuid::Uuid;

/// Records addressed by a UUID primary key: hierarchy entities, template
/// headers, rules and items
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}
