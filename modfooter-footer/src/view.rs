use serde::Serialize;

/// The relation part of a footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationDisplay {
    /// Humanized content type, or the descriptor's display field.
    pub type_label: String,
    pub entity_name: String,
    /// Admin URL, when the content type can be opened.
    pub url: Option<String>,
}

impl RelationDisplay {
    /// `"(type_label) entity_name"` in detailed mode, `type_label` otherwise.
    pub fn text(&self, detailed: bool) -> String {
        if detailed {
            format!("({}) {}", self.type_label, self.entity_name)
        } else {
            self.type_label.clone()
        }
    }
}

/// Everything a footer shows, already decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub author_line: String,
    /// Creation time as `DD/MM/YYYY, HH:mm:ss`.
    pub created_at: String,
    pub relation_display: Option<RelationDisplay>,
    pub page_link: Option<String>,
    pub detailed: bool,
}

impl FooterView {
    /// `"<author> @ <created_at>"`.
    pub fn author_caption(&self) -> String {
        format!("{} @ {}", self.author_line, self.created_at)
    }

    /// Relation text in this view's mode.
    pub fn relation_text(&self) -> Option<String> {
        self.relation_display
            .as_ref()
            .map(|relation| relation.text(self.detailed))
    }

    /// Hover text for the compact relation: the entity name, which the
    /// compact text leaves out.
    pub fn relation_tooltip(&self) -> Option<&str> {
        if self.detailed {
            return None;
        }
        self.relation_display
            .as_ref()
            .map(|relation| relation.entity_name.as_str())
            .filter(|name| !name.is_empty())
    }
}
