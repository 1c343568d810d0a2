use super::*;

#[test]
fn leaf_has_no_children_and_a_stable_label() {
    let a = Node::leaf("yo").unwrap();
    let b = Node::leaf("yo").unwrap();
    assert!(a.children().is_empty());
    assert_eq!(a.label(), b.label());
    assert!(a.label().starts_with("label"));
    assert_ne!(a.label(), Node::leaf("mAM").unwrap().label());
}

#[test]
fn empty_text_is_rejected() {
    assert!(Node::leaf("").is_err());
    assert!(Node::leaf("   ").is_err());
}

#[test]
fn unknown_color_is_rejected() {
    assert!(NodeSpec::new("yo").color("MAUVE").build().is_err());
}

#[test]
fn delay_desugars_to_a_single_child_chain() {
    let node = NodeSpec::new("vAchikam").color("ADJECTIVES").delay(3).build().unwrap();

    // Three wrapper levels in default color, then the colored base leaf.
    let mut cursor = &node;
    for _ in 0..3 {
        assert_eq!(cursor.text(), "vAchikam");
        assert!(cursor.color().is_white());
        assert_eq!(cursor.children().len(), 1);
        cursor = &cursor.children()[0];
    }
    assert_eq!(cursor.text(), "vAchikam");
    assert!(!cursor.color().is_white());
    assert!(cursor.children().is_empty());
}

#[test]
fn delay_with_explicit_children_fails_construction() {
    let spec = NodeSpec::new("yo mAM")
        .delay(2)
        .child(NodeSpec::new("yo"))
        .child(NodeSpec::new("mAM"));
    assert!(matches!(
        spec.build(),
        Err(crate::SlokaError::Construction(_))
    ));
}

#[test]
fn multi_word_auto_split_wraps_each_child_under_its_token() {
    let node = NodeSpec::new("A B")
        .color("VERB")
        .child(NodeSpec::new("X"))
        .child(NodeSpec::new("Y"))
        .build()
        .unwrap();

    assert_eq!(node.text(), "A B");
    assert_eq!(node.children().len(), 2);

    let a = &node.children()[0];
    assert_eq!(a.text(), "A");
    assert_eq!(a.color(), node.color());
    assert_eq!(a.children().len(), 1);
    assert_eq!(a.children()[0].text(), "X");

    let b = &node.children()[1];
    assert_eq!(b.text(), "B");
    assert_eq!(b.children().len(), 1);
    assert_eq!(b.children()[0].text(), "Y");
}

#[test]
fn auto_split_needs_an_exact_token_child_match() {
    // 2 tokens, 1 child: children kept as supplied.
    let node = NodeSpec::new("A B")
        .child(NodeSpec::new("X"))
        .build()
        .unwrap();
    assert_eq!(node.children().len(), 1);
    assert_eq!(node.children()[0].text(), "X");

    // Single token: never split, even with one child.
    let node = NodeSpec::new("AB")
        .child(NodeSpec::new("X"))
        .build()
        .unwrap();
    assert_eq!(node.children()[0].text(), "X");
}

#[test]
fn display_round_trips_the_authoring_shape() {
    let node = NodeSpec::new("yo mAM")
        .child(NodeSpec::new("yo").color("YOU").gloss("who"))
        .child(NodeSpec::new("mAM"))
        .build()
        .unwrap();
    let shown = node.to_string();
    assert!(shown.starts_with("\"yo mAM\" {"));
    assert!(shown.contains("\"yo\" @#83C167 [who]"));
    assert!(shown.contains("\"mAM\""));
}

#[test]
fn language_tags_are_case_sensitive() {
    assert_eq!(Language::from_tag("SANSKRIT"), Some(Language::Sanskrit));
    assert_eq!(Language::from_tag("ENGLISH"), Some(Language::English));
    assert_eq!(Language::from_tag("TRANSLIT"), Some(Language::Translit));
    assert_eq!(Language::from_tag("Sanskrit"), None);
    assert_eq!(Language::from_tag("DEVANAGARI"), None);
}
