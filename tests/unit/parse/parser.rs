use super::*;
use crate::eval::states::{node_markup, state_strings};

const SAMPLE: &str = r#"
=== citation ===
(x 1) SANSKRIT

=== sanskrit ===
--- line ---
"yo mAM" {
    "yo"
    "mAM"
}

=== english ===
--- line ---
"he me" {
    "he"
    "me"
}
"#;

#[test]
fn parses_a_minimal_verse() {
    let sloka = parse(SAMPLE).unwrap();
    assert_eq!(sloka.citation().node().text(), "(x 1)");
    assert_eq!(sloka.citation().language(), Language::Sanskrit);
    assert_eq!(sloka.sanskrit().len(), 1);
    assert_eq!(sloka.sanskrit()[0].len(), 1);

    let node = &sloka.sanskrit()[0][0];
    assert_eq!(node.text(), "yo mAM");
    assert_eq!(node.children().len(), 2);
    assert_eq!(node.children()[0].text(), "yo");
    assert_eq!(node.children()[1].text(), "mAM");
}

#[test]
fn parsed_verse_decomposes_to_the_expected_states() {
    let sloka = parse(SAMPLE).unwrap();
    let node = &sloka.sanskrit()[0][0];

    let states = state_strings(node, Language::Sanskrit).unwrap();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0], node_markup(node, Language::Sanskrit).unwrap());
    assert_eq!(
        states[1],
        format!(
            "{} {}",
            node_markup(&node.children()[0], Language::Sanskrit).unwrap(),
            node_markup(&node.children()[1], Language::Sanskrit).unwrap()
        )
    );
    assert!(states[1].contains("यो"));
    assert!(states[1].contains("मां"));
}

#[test]
fn attributes_apply_in_any_order() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
--- line ---
"yo" [who] @YOU
"mAM" @GOD +2

=== english ===
--- line ---
"he" @YOU
"me" @GOD +2
"#;
    let sloka = parse(src).unwrap();
    let line = &sloka.sanskrit()[0];
    assert_eq!(line.len(), 2);
    assert_eq!(line[0].gloss(), Some("who"));
    assert_eq!(line[0].color().as_hex(), "#83C167");

    // delay 2 desugars into two white wrappers over the colored leaf
    let delayed = &line[1];
    assert!(delayed.color().is_white());
    assert_eq!(delayed.children().len(), 1);
    assert_eq!(delayed.children()[0].children().len(), 1);
    assert_eq!(
        delayed.children()[0].children()[0].color().as_hex(),
        "#58C4DD"
    );
}

#[test]
fn citation_language_tag_is_optional() {
    let src = r#"
=== citation ===
(gItA 2.47)

=== sanskrit ===
--- line ---
"yo"

=== english ===
--- line ---
"he"
"#;
    let sloka = parse(src).unwrap();
    assert_eq!(sloka.citation().language(), Language::Sanskrit);
    assert_eq!(sloka.citation().node().text(), "(gItA 2.47)");

    let tagged = src.replace("(gItA 2.47)", "(gItA 2.47) ENGLISH");
    let sloka = parse(&tagged).unwrap();
    assert_eq!(sloka.citation().language(), Language::English);
    assert_eq!(sloka.citation().node().text(), "(gItA 2.47)");
}

#[test]
fn quoted_text_supports_escapes() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
--- line ---
"say \"om\""

=== english ===
--- line ---
"a \\ b"
"#;
    let sloka = parse(src).unwrap();
    assert_eq!(sloka.sanskrit()[0][0].text(), "say \"om\"");
    assert_eq!(sloka.english()[0][0].text(), "a \\ b");
}

#[test]
fn sections_must_appear_in_order() {
    let src = "=== citation ===\n(x 1)\n=== english ===\n--- line ---\n\"he\"\n=== sanskrit ===\n--- line ---\n\"yo\"\n";
    let err = parse(src).unwrap_err();
    assert!(err.to_string().contains("order"));
}

#[test]
fn missing_sections_and_stray_content_are_errors() {
    assert!(parse("").is_err());
    assert!(parse("=== citation ===\n(x 1)\n").is_err());
    assert!(
        parse("stray\n=== citation ===\n(x 1)\n=== sanskrit ===\n=== english ===\n").is_err()
    );
}

#[test]
fn node_outside_a_line_block_is_rejected() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
"yo"

=== english ===
--- line ---
"he"
"#;
    let err = parse(src).unwrap_err();
    assert!(err.to_string().contains("--- line ---"));
}

#[test]
fn empty_line_block_is_rejected() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
--- line ---
--- line ---
"yo"

=== english ===
--- line ---
"he"
"#;
    assert!(parse(src).is_err());
}

#[test]
fn unclosed_child_block_names_the_offset() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
--- line ---
"yo mAM" {
    "yo"

=== english ===
--- line ---
"he me"
"#;
    let err = parse(src).unwrap_err();
    assert!(err.to_string().contains("unclosed child block"));
}

#[test]
fn empty_gloss_is_rejected() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
--- line ---
"yo" []

=== english ===
--- line ---
"he"
"#;
    let err = parse(src).unwrap_err();
    assert!(err.to_string().contains("empty gloss"));
}

#[test]
fn delay_with_children_surfaces_as_construction() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
--- line ---
"yo mAM" +2 {
    "yo"
    "mAM"
}

=== english ===
--- line ---
"he me"
"#;
    assert!(matches!(
        parse(src).unwrap_err(),
        SlokaError::Construction(_)
    ));
}

#[test]
fn mismatched_sections_surface_as_shape_errors() {
    let src = r#"
=== citation ===
(x 1)

=== sanskrit ===
--- line ---
"yo"
"mAM"

=== english ===
--- line ---
"he"
"#;
    assert!(matches!(parse(src).unwrap_err(), SlokaError::Shape(_)));
}

#[test]
fn parses_the_bundled_verse() {
    let src = include_str!("../../../verses/abhinaya_darpana_1.sloka");
    let sloka = parse(src).unwrap();
    assert!(!sloka.sanskrit().is_empty());
    assert_eq!(sloka.sanskrit().len(), sloka.english().len());
}
