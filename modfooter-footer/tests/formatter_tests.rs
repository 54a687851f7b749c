use modfooter_footer::{format_footer, FooterConfig, FooterError, FooterFormatter, RelationDisplay};
use modfooter_model::{ContentItem, RelatedEntity, RelationDescriptor};
use modfooter_relations::{LinkConfig, RelationRegistry};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn registry() -> RelationRegistry {
    RelationRegistry::new(vec![
        RelationDescriptor::collection("article").with_url("/reviews/:id"),
        RelationDescriptor::single("homepage"),
        RelationDescriptor::collection("audit_log").unmanaged(),
    ])
}

fn item() -> ContentItem {
    ContentItem::new("2021-03-04T10:20:30Z")
}

// ── Author ───────────────────────────────────────────────────────

#[test]
fn author_user_takes_precedence() {
    let view = format_footer(&item().with_author_user("alice").with_author_name("Bob"), &registry(), false);
    assert_eq!(view.author_line, "alice");
}

#[test]
fn author_name_used_without_user() {
    let view = format_footer(&item().with_author_name("Bob"), &registry(), false);
    assert_eq!(view.author_line, "Bob");
}

#[test]
fn missing_author_is_empty() {
    let view = format_footer(&item(), &registry(), false);
    assert_eq!(view.author_line, "");
    assert_eq!(view.author_caption(), " @ 04/03/2021, 10:20:30");
}

// ── Relation ─────────────────────────────────────────────────────

#[test]
fn no_related_entity_means_no_relation_display() {
    let view = format_footer(&item(), &registry(), true);
    assert_eq!(view.relation_display, None);
    assert_eq!(view.relation_text(), None);
}

#[test]
fn linked_relation() {
    let related = RelatedEntity::new(42, "Article").with_field("title", "Hello");
    let view = format_footer(&item().with_related(related), &registry(), true);

    assert_eq!(
        view.relation_display,
        Some(RelationDisplay {
            type_label: "Article".into(),
            entity_name: "Hello".into(),
            url: Some("/reviews/42?_sort=id:ASC&_where[0][id]=42".into()),
        })
    );
    assert_eq!(view.relation_text().as_deref(), Some("(Article) Hello"));
}

#[test]
fn compact_relation_text() {
    let related = RelatedEntity::new(1, "Homepage").with_field("Title", "Home");
    let view = format_footer(&item().with_related(related), &registry(), false);
    assert_eq!(view.relation_text().as_deref(), Some("Homepage"));
    assert_eq!(view.relation_tooltip(), Some("Home"));
}

#[test]
fn unmanaged_relation_has_no_url() {
    let related = RelatedEntity::new(1, "AuditLog").with_field("subject", "Login");
    let display = format_footer(&item().with_related(related), &registry(), true)
        .relation_display
        .unwrap();
    assert_eq!(display.type_label, "Audit Log");
    assert_eq!(display.entity_name, "Login");
    assert_eq!(display.url, None);
}

#[test]
fn unknown_relation_is_label_only() {
    let related = RelatedEntity::new(1, "blog_post");
    let display = format_footer(&item().with_related(related), &registry(), true)
        .relation_display
        .unwrap();
    assert_eq!(display.type_label, "Blog Post");
    assert_eq!(display.entity_name, "");
    assert_eq!(display.url, None);
}

// ── Passthrough ──────────────────────────────────────────────────

#[test]
fn page_link_is_passed_through() {
    let view = format_footer(&item().with_page_link("https://example.com/p?x=1"), &registry(), false);
    assert_eq!(view.page_link.as_deref(), Some("https://example.com/p?x=1"));
}

#[test]
fn created_at_is_formatted() {
    assert_eq!(format_footer(&item(), &registry(), false).created_at, "04/03/2021, 10:20:30");
}

#[test]
fn invalid_created_at_does_not_fail() {
    let view = format_footer(&ContentItem::new("???"), &registry(), false);
    assert_eq!(view.created_at, "Invalid date");
}

#[test]
fn detailed_flag_is_recorded() {
    assert!(format_footer(&item(), &registry(), true).detailed);
    assert!(!format_footer(&item(), &registry(), false).detailed);
}

// ── Configured formatter ─────────────────────────────────────────

#[test]
fn config_drives_links_and_offset() {
    let formatter = FooterFormatter::new(&FooterConfig {
        links: LinkConfig {
            content_manager_root: "/cm".into(),
            uid_prefix: "api".into(),
        },
        utc_offset_minutes: 60,
        detailed: false,
    });
    let related = RelatedEntity::new(1, "Homepage");
    let view = formatter.format(&item().with_related(related), &registry(), false);

    assert_eq!(view.created_at, "04/03/2021, 11:20:30");
    assert_eq!(
        view.relation_display.and_then(|r| r.url).as_deref(),
        Some("/cm/singleType/api::homepage.homepage")
    );
}

#[test]
fn format_json_parses_item() {
    let view = FooterFormatter::default()
        .format_json(
            r#"{
                "authorName": "Bob",
                "related": {"id": 42, "__contentType": "Article", "name": "Post"},
                "created_at": "2021-03-04T10:20:30Z"
            }"#,
            &registry(),
            true,
        )
        .unwrap();
    assert_eq!(view.author_line, "Bob");
    assert_eq!(view.relation_text().as_deref(), Some("(Article) Post"));
}

#[test]
fn format_json_rejects_malformed_item() {
    let err = FooterFormatter::default()
        .format_json(r#"{"authorName": "Bob"}"#, &registry(), false)
        .unwrap_err();
    assert!(matches!(err, FooterError::InvalidItem(_)));
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn formatting_is_pure(
        id in 0i64..1000,
        author in "[a-z]{0,8}",
        content_type in prop::sample::select(vec!["Article", "Homepage", "AuditLog", "Unknown"]),
        detailed in any::<bool>(),
    ) {
        let input = item()
            .with_author_name(author)
            .with_related(RelatedEntity::new(id, content_type).with_field("title", "T"));
        let reg = registry();
        let before = input.clone();

        let first = format_footer(&input, &reg, detailed);
        let second = format_footer(&input, &reg, detailed);

        prop_assert_eq!(first, second);
        prop_assert_eq!(input, before);
    }
}
