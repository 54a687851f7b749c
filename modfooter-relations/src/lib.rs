//! Relation resolution for moderation footers.
//!
//! Given a related entity and the registry of content-type descriptors,
//! decides how the relation is labelled and where it links to:
//! - [`RelationRegistry`] : read-only descriptor lookup keyed by normalized content type
//! - [`RelationResolver`] : produces a [`RelationLink`] (label plus optional admin URL)
//! - [`LinkConfig`] : content-manager root and UID prefix for default admin paths
//!
//! Resolution never fails. Unknown or unmanageable content types degrade
//! to a label without a URL.

pub mod case;
mod config;
mod error;
mod registry;
mod resolver;
pub mod template;

pub use config::LinkConfig;
pub use error::{RelationsError, RelationsResult};
pub use registry::RelationRegistry;
pub use resolver::{resolve_relation, RelationLink, RelationResolver};
