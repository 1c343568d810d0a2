use super::*;
use crate::SlokaError;
use crate::model::node::Node;

fn line(texts: &[&str]) -> Vec<Node> {
    texts.iter().map(|t| Node::leaf(*t).unwrap()).collect()
}

#[test]
fn matching_shapes_construct() {
    let citation = Citation::new("(x 1)", Language::Sanskrit).unwrap();
    let sloka = Sloka::new(
        citation,
        vec![line(&["yo mAM"]), line(&["tam", "numaH"])],
        vec![line(&["he me"]), line(&["him", "we praise"])],
    )
    .unwrap();
    assert_eq!(sloka.sanskrit().len(), 2);
    assert_eq!(sloka.citation().language(), Language::Sanskrit);
}

#[test]
fn line_count_mismatch_is_rejected() {
    let citation = Citation::new("(x 1)", Language::Sanskrit).unwrap();
    let err = Sloka::new(
        citation,
        vec![line(&["yo mAM"]), line(&["tam"])],
        vec![line(&["he me"])],
    )
    .unwrap_err();
    assert!(matches!(err, SlokaError::Shape(_)));
}

#[test]
fn node_count_mismatch_names_the_line() {
    let citation = Citation::new("(x 1)", Language::English).unwrap();
    let err = Sloka::new(
        citation,
        vec![line(&["yo mAM"]), line(&["tam", "numaH"])],
        vec![line(&["he me"]), line(&["him"])],
    )
    .unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn display_emits_the_source_sections_in_order() {
    let citation = Citation::new("(x 1)", Language::Translit).unwrap();
    let sloka = Sloka::new(citation, vec![line(&["yo"])], vec![line(&["he"])]).unwrap();
    let shown = sloka.to_string();
    let cite = shown.find("=== citation ===").unwrap();
    let sans = shown.find("=== sanskrit ===").unwrap();
    let eng = shown.find("=== english ===").unwrap();
    assert!(cite < sans && sans < eng);
    assert!(shown.contains("(x 1) TRANSLIT"));
    assert!(shown.contains("--- line ---"));
}
