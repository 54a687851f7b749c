use crate::RelatedEntity;

/// Fields probed for a display name, in precedence order.
pub const ENTITY_NAME_FIELDS: [&str; 6] = ["title", "Title", "subject", "Subject", "name", "Name"];

/// Returns the first usable value among [`ENTITY_NAME_FIELDS`], or `""`.
pub fn resolve_name(entity: &RelatedEntity) -> String {
    ENTITY_NAME_FIELDS
        .iter()
        .find_map(|field| entity.field_text(field))
        .unwrap_or_default()
}
