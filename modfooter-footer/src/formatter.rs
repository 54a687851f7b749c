use crate::datetime::format_timestamp;
use crate::{FooterConfig, FooterResult, FooterView, RelationDisplay};
use chrono::FixedOffset;
use modfooter_model::{resolve_name, ContentItem};
use modfooter_relations::{RelationRegistry, RelationResolver};

/// Builds [`FooterView`]s for content items.
#[derive(Debug, Clone)]
pub struct FooterFormatter {
    resolver: RelationResolver,
    display_offset: FixedOffset,
}

impl Default for FooterFormatter {
    fn default() -> Self {
        Self::new(&FooterConfig::default())
    }
}

impl FooterFormatter {
    pub fn new(config: &FooterConfig) -> Self {
        Self {
            resolver: RelationResolver::new(config.links.clone()),
            display_offset: config.display_offset(),
        }
    }

    /// Formats the footer of `item`.
    pub fn format(
        &self,
        item: &ContentItem,
        registry: &RelationRegistry,
        detailed: bool,
    ) -> FooterView {
        let relation_display = item.related_entity.as_ref().map(|related| {
            let link = self.resolver.resolve(Some(related), registry);
            RelationDisplay {
                type_label: link.label,
                entity_name: resolve_name(related),
                url: link.url,
            }
        });

        FooterView {
            author_line: author_line(item),
            created_at: format_timestamp(&item.created_at, self.display_offset),
            relation_display,
            page_link: item.page_link.clone(),
            detailed,
        }
    }

    /// Parses an item from JSON and formats it.
    pub fn format_json(
        &self,
        item_json: &str,
        registry: &RelationRegistry,
        detailed: bool,
    ) -> FooterResult<FooterView> {
        let item: ContentItem = serde_json::from_str(item_json)?;
        Ok(self.format(&item, registry, detailed))
    }
}

/// The admin user's name wins over the free-text author name.
fn author_line(item: &ContentItem) -> String {
    item.author_user
        .as_ref()
        .map(|user| user.username.clone())
        .or_else(|| item.author_name.clone())
        .unwrap_or_default()
}

/// Formats with the default [`FooterConfig`].
pub fn format_footer(item: &ContentItem, registry: &RelationRegistry, detailed: bool) -> FooterView {
    FooterFormatter::default().format(item, registry, detailed)
}
