//! Footer preview: loads an item, a relation registry and an optional
//! config from disk and renders the resulting footer as text.

use anyhow::{Context, Result};
use modfooter_footer::{FooterConfig, FooterFormatter, FooterView};
use modfooter_relations::RelationRegistry;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Inputs of a preview run.
#[derive(Debug, Clone, Default)]
pub struct PreviewRequest {
    pub item: PathBuf,
    pub registry: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub detailed: bool,
}

/// Loads the inputs and formats the footer.
pub fn build_view(request: &PreviewRequest) -> Result<FooterView> {
    let config = match &request.config {
        Some(path) => FooterConfig::load_from(path),
        None => FooterConfig::default(),
    };

    let registry = match &request.registry {
        Some(path) => RelationRegistry::from_json_file(path)
            .with_context(|| format!("failed to load relation registry from {}", path.display()))?,
        None => {
            info!("No relation registry given, relations will not be linked");
            RelationRegistry::default()
        }
    };
    debug!("Registry has {} descriptors", registry.len());

    let item_json = read(&request.item)?;
    let detailed = request.detailed || config.detailed;
    FooterFormatter::new(&config)
        .format_json(&item_json, &registry, detailed)
        .with_context(|| format!("failed to format item {}", request.item.display()))
}

/// Renders a view as pretty JSON followed by the text a footer would show.
pub fn render(view: &FooterView) -> Result<String> {
    let mut out = serde_json::to_string_pretty(view).context("failed to serialize footer view")?;
    out.push('\n');

    writeln!(out, "author:   {}", view.author_caption())?;
    if let Some(text) = view.relation_text() {
        writeln!(out, "relation: {text}")?;
    }
    if let Some(url) = view.relation_display.as_ref().and_then(|r| r.url.as_deref()) {
        writeln!(out, "link:     {url}")?;
    }
    if let Some(tooltip) = view.relation_tooltip() {
        writeln!(out, "tooltip:  {tooltip}")?;
    }
    if let Some(page) = &view.page_link {
        writeln!(out, "page:     {page}")?;
    }
    Ok(out)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
