use crate::case::{snake_case, start_case};
use crate::template::{expand_id, with_id_filter};
use crate::{LinkConfig, RelationRegistry};
use modfooter_model::RelatedEntity;
use serde::Serialize;
use tracing::debug;

/// How a relation is shown: a label and, when the admin UI can open
/// the target, a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationLink {
    pub label: String,
    pub url: Option<String>,
}

impl RelationLink {
    fn label_only(label: String) -> Self {
        Self { label, url: None }
    }

    /// Returns true if the relation can be navigated to.
    pub fn is_linked(&self) -> bool {
        self.url.is_some()
    }
}

/// Resolves related entities to admin links.
#[derive(Debug, Clone, Default)]
pub struct RelationResolver {
    config: LinkConfig,
}

impl RelationResolver {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Resolves `related` against `registry`.
    ///
    /// - no related entity: empty label, no URL
    /// - unknown or unmanageable content type: humanized type, no URL
    /// - single-instance type: custom URL verbatim, or the default single-type path
    /// - collection type: custom template with the id substituted, or the
    ///   default collection path, followed by the id filter. The label is the
    ///   descriptor's display field when the entity has it.
    pub fn resolve(
        &self,
        related: Option<&RelatedEntity>,
        registry: &RelationRegistry,
    ) -> RelationLink {
        let Some(related) = related else {
            return RelationLink::default();
        };

        let normalized = snake_case(&related.content_type);
        let type_label = start_case(&related.content_type);

        let descriptor = match registry.get(&normalized) {
            Some(descriptor) if descriptor.is_manageable => descriptor,
            Some(_) => {
                debug!("Content type {} is not manageable, showing label only", normalized);
                return RelationLink::label_only(type_label);
            }
            None => {
                debug!("No relation descriptor for {}, showing label only", normalized);
                return RelationLink::label_only(type_label);
            }
        };

        if descriptor.is_single_instance {
            let url = descriptor
                .url
                .clone()
                .unwrap_or_else(|| self.config.single_type_path(&normalized));
            return RelationLink {
                label: type_label,
                url: Some(url),
            };
        }

        let base = match &descriptor.url {
            Some(template) => expand_id(template, &related.id),
            None => self.config.collection_type_path(&normalized),
        };
        let label = descriptor
            .display_key
            .as_deref()
            .and_then(|key| related.field_text(key))
            .unwrap_or(type_label);

        RelationLink {
            label,
            url: Some(with_id_filter(&base, &related.id)),
        }
    }
}

/// Resolves with the default [`LinkConfig`].
pub fn resolve_relation(
    related: Option<&RelatedEntity>,
    registry: &RelationRegistry,
) -> RelationLink {
    RelationResolver::default().resolve(related, registry)
}
