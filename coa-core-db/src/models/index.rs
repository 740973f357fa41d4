use super::identifiable::Identifiable;

/// Marker for compact lookup rows such as `coa_template_idx`, which share the
/// id of the record they index
pub trait Index: Identifiable {}
