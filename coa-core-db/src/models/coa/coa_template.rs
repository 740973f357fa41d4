use chrono::{DateTime, Utc};
use coa_core_api::TemplateHeader;
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::models::{Index, IndexAware};
use crate::utils::hash_as_i64;

/// # Documentation
/// - Header of a reusable chart-of-accounts blueprint
/// - `name` is unique across templates (case-sensitive)
/// - At most one template carries `is_default = true`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoaTemplateModel {
    pub id: Uuid,
    pub name: HeaplessString<400>,
    pub description: Option<HeaplessString<2000>>,
    pub is_default: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CoaTemplateModel {
    /// Build a header row from caller input
    pub fn from_header(
        id: Uuid,
        header: &TemplateHeader,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            id,
            name: bounded("name", &header.name)?,
            description: header
                .description
                .as_deref()
                .map(|d| bounded("description", d))
                .transpose()?,
            is_default: header.is_default,
            is_active: header.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply caller input to an existing header, keeping its id and creation time
    pub fn apply_header(&self, header: &TemplateHeader, now: DateTime<Utc>) -> Result<Self, String> {
        let mut updated = Self::from_header(self.id, header, now)?;
        updated.created_at = self.created_at;
        Ok(updated)
    }
}

pub(crate) fn bounded<const N: usize>(field: &str, value: &str) -> Result<HeaplessString<N>, String> {
    HeaplessString::try_from(value)
        .map_err(|_| format!("{field}: value is too long (max {N} bytes)"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoaTemplateIdxModel {
    pub id: Uuid,

    pub name_hash: i64,

    pub is_default: bool,
}

impl Identifiable for CoaTemplateModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl IndexAware for CoaTemplateModel {
    type IndexType = CoaTemplateIdxModel;

    fn to_index(&self) -> Self::IndexType {
        CoaTemplateIdxModel {
            id: self.id,
            name_hash: template_name_hash(self.name.as_str()),
            is_default: self.is_default,
        }
    }
}

/// Hash used to look templates up by exact name
pub fn template_name_hash(name: &str) -> i64 {
    hash_as_i64(&name).unwrap_or(0)
}

impl Identifiable for CoaTemplateIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for CoaTemplateIdxModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(name: &str) -> TemplateHeader {
        TemplateHeader {
            name: name.to_string(),
            description: Some("Sole proprietor, VAT registered".to_string()),
            is_default: true,
            is_active: true,
        }
    }

    #[test]
    fn test_apply_header_keeps_identity() {
        let created = Utc::now();
        let model = CoaTemplateModel::from_header(Uuid::new_v4(), &header("Retail"), created).unwrap();
        let later = created + chrono::Duration::seconds(5);
        let updated = model.apply_header(&header("Retail v2"), later).unwrap();
        assert_eq!(updated.id, model.id);
        assert_eq!(updated.created_at, created);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.name.as_str(), "Retail v2");
    }

    #[test]
    fn test_to_index_hashes_exact_name() {
        let model = CoaTemplateModel::from_header(Uuid::new_v4(), &header("Retail"), Utc::now()).unwrap();
        let idx = model.to_index();
        assert_eq!(idx.name_hash, template_name_hash("Retail"));
        assert_ne!(idx.name_hash, template_name_hash("retail"));
        assert!(idx.is_default);
    }

    #[test]
    fn test_from_header_accepts_multibyte_name_at_char_limit() {
        // 100 chars, 200 bytes
        let name = "ñ".repeat(100);
        let input = header(&name);
        assert!(input.validate_input().is_ok());
        let model = CoaTemplateModel::from_header(Uuid::new_v4(), &input, Utc::now()).unwrap();
        assert_eq!(model.name.as_str(), name);
    }

    #[test]
    fn test_from_header_accepts_multibyte_description_at_char_limit() {
        let mut input = header("Retail");
        input.description = Some("€".repeat(500));
        assert!(input.validate_input().is_ok());
        let model = CoaTemplateModel::from_header(Uuid::new_v4(), &input, Utc::now()).unwrap();
        assert_eq!(model.description.unwrap().chars().count(), 500);
    }

    #[test]
    fn test_from_header_rejects_oversized_name() {
        let name = "a".repeat(401);
        let err = CoaTemplateModel::from_header(Uuid::new_v4(), &header(&name), Utc::now()).unwrap_err();
        assert!(err.starts_with("name"));
    }
}
