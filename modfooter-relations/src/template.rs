//! Admin URL building.
//!
//! Custom route templates may reference the related entity through the
//! `:id` placeholder. A placeholder is only recognised as a whole token:
//! `:id` followed by an ASCII letter, digit or `_` (as in `/:identity`)
//! is left untouched. Every recognised occurrence is replaced.
//!
//! Ids are percent-encoded before they are spliced into a path or query.

use modfooter_model::RelatedId;

/// The id placeholder recognised in custom route templates.
pub const ID_PLACEHOLDER: &str = ":id";

/// Substitutes the entity id into every `:id` token of `template`.
pub fn expand_id(template: &str, id: &RelatedId) -> String {
    let raw = id.to_string();
    let encoded = urlencoding::encode(&raw);
    let mut out = String::with_capacity(template.len() + encoded.len());
    let mut rest = template;

    while let Some(pos) = rest.find(ID_PLACEHOLDER) {
        let after = &rest[pos + ID_PLACEHOLDER.len()..];
        out.push_str(&rest[..pos]);
        if after.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_') {
            out.push_str(ID_PLACEHOLDER);
        } else {
            out.push_str(&encoded);
        }
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Appends the content-manager sort and filter parameters that narrow a
/// collection listing down to a single entity:
/// `?_sort=id:ASC&_where[0][id]=<id>`.
///
/// If `base` already has a query string the parameters are joined with `&`.
pub fn with_id_filter(base: &str, id: &RelatedId) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    let raw = id.to_string();
    format!(
        "{base}{sep}_sort=id:ASC&_where[0][id]={}",
        urlencoding::encode(&raw)
    )
}
