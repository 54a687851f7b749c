//! Data model for moderation item footers.
//!
//! Defines the read-only snapshots the footer formatter consumes:
//! - [`ContentItem`] : the reviewed item (author, timestamp, related entity, page link)
//! - [`RelatedEntity`] : a reference to another stored entity with arbitrary JSON fields
//! - [`RelationDescriptor`] : how entities of one content type are labelled and linked
//! - [`resolve_name`] : display-name extraction from a related entity
//!
//! All types deserialize from the camelCase JSON the admin API produces.

mod descriptor;
mod item;
mod name;
mod related;

pub use descriptor::RelationDescriptor;
pub use item::{AuthorUser, ContentItem};
pub use name::{resolve_name, ENTITY_NAME_FIELDS};
pub use related::{RelatedEntity, RelatedId};
