use modfooter_model::RelatedId;
use modfooter_relations::template::{expand_id, with_id_filter};
use pretty_assertions::assert_eq;

// ── expand_id ────────────────────────────────────────────────────

#[test]
fn substitutes_placeholder() {
    assert_eq!(expand_id("/reviews/:id", &RelatedId::from(42)), "/reviews/42");
}

#[test]
fn substitutes_every_token() {
    assert_eq!(
        expand_id("/a/:id/b/:id", &RelatedId::from(1)),
        "/a/1/b/1"
    );
}

#[test]
fn ignores_placeholder_prefix_of_longer_name() {
    assert_eq!(
        expand_id("/users/:identity/posts/:id", &RelatedId::from(3)),
        "/users/:identity/posts/3"
    );
    assert_eq!(expand_id("/x/:id_raw", &RelatedId::from(3)), "/x/:id_raw");
}

#[test]
fn placeholder_before_query_or_slash_is_a_token() {
    assert_eq!(
        expand_id("/r/:id?tab=1", &RelatedId::from(5)),
        "/r/5?tab=1"
    );
    assert_eq!(expand_id("/r/:id/edit", &RelatedId::from(5)), "/r/5/edit");
}

#[test]
fn template_without_placeholder_is_unchanged() {
    assert_eq!(expand_id("/static", &RelatedId::from(5)), "/static");
}

#[test]
fn text_ids_are_percent_encoded() {
    assert_eq!(
        expand_id("/r/:id", &RelatedId::from("a b/c")),
        "/r/a%20b%2Fc"
    );
}

// ── with_id_filter ───────────────────────────────────────────────

#[test]
fn appends_sort_and_filter() {
    assert_eq!(
        with_id_filter("/reviews/42", &RelatedId::from(42)),
        "/reviews/42?_sort=id:ASC&_where[0][id]=42"
    );
}

#[test]
fn joins_existing_query_with_ampersand() {
    assert_eq!(
        with_id_filter("/r?tab=1", &RelatedId::from(7)),
        "/r?tab=1&_sort=id:ASC&_where[0][id]=7"
    );
}

#[test]
fn zero_id_still_filters() {
    assert_eq!(
        with_id_filter("/r", &RelatedId::from(0)),
        "/r?_sort=id:ASC&_where[0][id]=0"
    );
}

#[test]
fn empty_text_id_still_filters() {
    assert_eq!(
        with_id_filter("/r", &RelatedId::from("")),
        "/r?_sort=id:ASC&_where[0][id]="
    );
}
