mod support;
use support::{count_of, decode_entities, post, render_card, text_of, tracing_init};

#[test]
fn renders_all_parts_of_a_post() {
    tracing_init();
    let html = render_card(post("Hello World", "2020-01-01", "A short intro."));

    assert_eq!(text_of(&html, "list-item-card-glyph").as_deref(), Some("H"));
    assert_eq!(
        text_of(&html, "list-item-card-title").as_deref(),
        Some("Hello World")
    );
    assert_eq!(
        text_of(&html, "list-item-card-date").as_deref(),
        Some("2020-01-01")
    );
    assert_eq!(
        text_of(&html, "list-item-card-intro").as_deref(),
        Some("A short intro.")
    );
}

#[test]
fn renders_multibyte_title_with_empty_date_and_intro() {
    tracing_init();
    let html = render_card(post("日本語", "", ""));

    assert_eq!(text_of(&html, "list-item-card-glyph").as_deref(), Some("日"));
    assert_eq!(
        text_of(&html, "list-item-card-title").as_deref(),
        Some("日本語")
    );
    assert_eq!(text_of(&html, "list-item-card-date").as_deref(), Some(""));
    assert_eq!(text_of(&html, "list-item-card-intro").as_deref(), Some(""));
}

#[test]
fn empty_title_is_rejected_before_rendering() {
    assert_eq!(
        folio_ui::PostSummary::new("", "2020-01-01", "intro"),
        Err(folio_ui::PostSummaryError::EmptyTitle)
    );
}

#[test]
fn rendering_is_idempotent() {
    let input = post("Same", "2021-06-01", "Same input twice");
    assert_eq!(render_card(input.clone()), render_card(input));
}

#[test]
fn glyph_is_decorative() {
    let html = render_card(post("Hidden", "", ""));
    let glyph_at = html.find("data-testid=\"list-item-card-glyph\"").unwrap();
    let tag_start = html[..glyph_at].rfind('<').unwrap();
    let tag_end = glyph_at + html[glyph_at..].find('>').unwrap();
    assert!(html[tag_start..tag_end].contains("aria-hidden=\"true\""));
}

#[test]
fn markup_in_inputs_is_escaped() {
    let html = render_card(post("<b>Bold</b>", "1 < 2", "<script>alert(1)</script>"));

    assert!(!html.contains("<b>"));
    assert!(!html.contains("<script>"));

    let title = text_of(&html, "list-item-card-title").unwrap();
    let date = text_of(&html, "list-item-card-date").unwrap();
    let intro = text_of(&html, "list-item-card-intro").unwrap();
    assert_ne!(title, "<b>Bold</b>");
    assert_eq!(decode_entities(&title), "<b>Bold</b>");
    assert_eq!(decode_entities(&date), "1 < 2");
    assert_eq!(decode_entities(&intro), "<script>alert(1)</script>");
}

#[test]
fn renders_one_card_with_scoped_classes() {
    let html = render_card(post("Classes", "d", "i"));

    assert_eq!(count_of(&html, "list-item-card"), 1);
    for class in [
        "list-item-card__glyph",
        "list-item-card__title",
        "list-item-card__date",
        "list-item-card__intro",
    ] {
        assert!(html.contains(class), "missing {class}");
    }
}
