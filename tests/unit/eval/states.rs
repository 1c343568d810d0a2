use super::*;
use crate::model::node::NodeSpec;

fn tree(spec: NodeSpec) -> Node {
    spec.build().unwrap()
}

#[test]
fn leaf_yields_exactly_one_state() {
    let node = Node::leaf("yo").unwrap();
    for language in [Language::English, Language::Translit, Language::Sanskrit] {
        let states = text_states(&node, language).unwrap();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].markup, node_markup(&node, language).unwrap());
        assert_eq!(states[0].labels, vec![node.label().to_string()]);
    }
}

#[test]
fn state_count_is_one_plus_deepest_child() {
    let node = tree(
        NodeSpec::new("abc")
            .child(NodeSpec::new("a"))
            .child(
                NodeSpec::new("bc")
                    .child(NodeSpec::new("b"))
                    .child(NodeSpec::new("c")),
            ),
    );
    let states = text_states(&node, Language::English).unwrap();
    // leaf "a" contributes 1, subtree "bc" contributes 2.
    assert_eq!(states.len(), 3);
}

#[test]
fn shallow_children_freeze_at_their_final_state() {
    let shallow = tree(NodeSpec::new("a"));
    let node = tree(
        NodeSpec::new("abc")
            .child(NodeSpec::new("a"))
            .child(
                NodeSpec::new("bc")
                    .child(NodeSpec::new("b"))
                    .child(NodeSpec::new("c")),
            ),
    );
    let states = text_states(&node, Language::English).unwrap();
    let frozen = node_markup(&shallow, Language::English).unwrap();
    // Depth 2 is past the shallow child's own sequence; its final state is
    // repeated verbatim while the deeper sibling keeps unfolding.
    assert!(states[1].markup.starts_with(&frozen));
    assert!(states[2].markup.starts_with(&frozen));
    assert_ne!(states[1].markup, states[2].markup);
}

#[test]
fn composed_states_preserve_child_order() {
    let node = tree(
        NodeSpec::new("abc")
            .child(NodeSpec::new("left"))
            .child(NodeSpec::new("mid"))
            .child(NodeSpec::new("right")),
    );
    let states = text_states(&node, Language::English).unwrap();
    assert_eq!(states[0].markup, node_markup(&node, Language::English).unwrap());

    let parts: Vec<String> = node
        .children()
        .iter()
        .map(|c| node_markup(c, Language::English).unwrap())
        .collect();
    assert_eq!(states[1].markup, parts.join(" "));
    assert_eq!(
        states[1].labels,
        node.children().iter().map(|c| c.label().to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn delay_inserts_identical_pacing_states() {
    let node = tree(NodeSpec::new("vAchikam").delay(3));
    let states = text_states(&node, Language::Translit).unwrap();
    assert_eq!(states.len(), 4);
    for state in &states[1..] {
        assert_eq!(state.markup, states[0].markup);
    }
}

#[test]
fn sanskrit_states_join_devanagari_children_with_spaces() {
    let node = tree(
        NodeSpec::new("yo mAM")
            .child(NodeSpec::new("yo"))
            .child(NodeSpec::new("mAM")),
    );
    let strings = state_strings(&node, Language::Sanskrit).unwrap();
    assert_eq!(strings.len(), 2);

    let yo = &node.children()[0];
    let mam = &node.children()[1];
    assert_eq!(
        strings[1],
        format!(
            "{} {}",
            node_markup(yo, Language::Sanskrit).unwrap(),
            node_markup(mam, Language::Sanskrit).unwrap()
        )
    );
    assert!(strings[1].contains("यो"));
    assert!(strings[1].contains("मां"));
    assert!(strings[1].contains("Jaini"));
}

#[test]
fn translit_states_render_iast_in_the_latin_font() {
    let node = tree(NodeSpec::new("mAM"));
    let markup = node_markup(&node, Language::Translit).unwrap();
    assert!(markup.contains("māṃ"));
    assert!(markup.contains("Junicode"));
    assert!(markup.contains(node.label()));
}
