use crate::case::kebab_case;
use serde::{Deserialize, Serialize};

/// Where default admin links point to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Mount point of the content manager plugin.
    #[serde(default = "default_content_manager_root")]
    pub content_manager_root: String,
    /// Namespace prefix of application content-type UIDs.
    #[serde(default = "default_uid_prefix")]
    pub uid_prefix: String,
}

fn default_content_manager_root() -> String {
    "/plugins/content-manager".to_string()
}

fn default_uid_prefix() -> String {
    "application".to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            content_manager_root: default_content_manager_root(),
            uid_prefix: default_uid_prefix(),
        }
    }
}

impl LinkConfig {
    /// Namespaced UID of a content type: `application::blog-post.blog-post`.
    pub fn content_type_uid(&self, content_type: &str) -> String {
        let dashed = kebab_case(content_type);
        format!("{}::{dashed}.{dashed}", self.uid_prefix)
    }

    /// Default edit path of a single-instance content type.
    pub fn single_type_path(&self, content_type: &str) -> String {
        format!("{}/singleType/{}", self.root(), self.content_type_uid(content_type))
    }

    /// Default listing path of a collection content type, without query.
    pub fn collection_type_path(&self, content_type: &str) -> String {
        format!("{}/collectionType/{}", self.root(), self.content_type_uid(content_type))
    }

    fn root(&self) -> &str {
        self.content_manager_root.trim_end_matches('/')
    }
}
