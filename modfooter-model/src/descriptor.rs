use serde::{Deserialize, Serialize};

/// Describes how entities of one content type are labelled and linked
/// from the admin UI.
///
/// `global_name` is the normalized (snake_case) content-type key. The
/// legacy field names `isSingle`, `contentManager` and `key` are accepted
/// when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDescriptor {
    pub global_name: String,
    /// Custom route template. May contain an `:id` placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, alias = "isSingle")]
    pub is_single_instance: bool,
    /// Whether the content type can be browsed in the content manager.
    #[serde(default, alias = "contentManager")]
    pub is_manageable: bool,
    /// Field of the related entity used as the link label.
    #[serde(default, alias = "key", skip_serializing_if = "Option::is_none")]
    pub display_key: Option<String>,
}

impl RelationDescriptor {
    fn simple(global_name: &str, is_single_instance: bool) -> Self {
        Self {
            global_name: global_name.into(),
            url: None,
            is_single_instance,
            is_manageable: true,
            display_key: None,
        }
    }

    /// Shorthand for a manageable collection type.
    pub fn collection(global_name: &str) -> Self {
        Self::simple(global_name, false)
    }

    /// Shorthand for a manageable single-instance type.
    pub fn single(global_name: &str) -> Self {
        Self::simple(global_name, true)
    }

    #[must_use]
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_display_key(mut self, key: &str) -> Self {
        self.display_key = Some(key.into());
        self
    }

    /// Marks the type as not reachable through the content manager.
    #[must_use]
    pub fn unmanaged(mut self) -> Self {
        self.is_manageable = false;
        self
    }
}
