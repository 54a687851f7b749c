use crate::RelatedEntity;
use serde::{Deserialize, Serialize};

/// The registered admin user who authored an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorUser {
    pub username: String,
}

/// A reviewed content item as loaded by the admin API.
///
/// Owned by the caller; the footer formatter only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Free-text author name, used when no admin user is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_user: Option<AuthorUser>,
    #[serde(default, alias = "related", skip_serializing_if = "Option::is_none")]
    pub related_entity: Option<RelatedEntity>,
    /// ISO-ish creation timestamp, formatted downstream.
    #[serde(alias = "created_at")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_link: Option<String>,
}

impl ContentItem {
    /// Creates an item with only a creation timestamp.
    #[must_use]
    pub fn new(created_at: impl Into<String>) -> Self {
        Self {
            author_name: None,
            author_user: None,
            related_entity: None,
            created_at: created_at.into(),
            page_link: None,
        }
    }

    #[must_use]
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_author_user(mut self, username: impl Into<String>) -> Self {
        self.author_user = Some(AuthorUser {
            username: username.into(),
        });
        self
    }

    #[must_use]
    pub fn with_related(mut self, related: RelatedEntity) -> Self {
        self.related_entity = Some(related);
        self
    }

    #[must_use]
    pub fn with_page_link(mut self, link: impl Into<String>) -> Self {
        self.page_link = Some(link.into());
        self
    }
}
