//! State-sequence derivation.
//!
//! For a node tree, derives the ordered list of decomposition states:
//! state 0 is the fully composed rendering of the node's own text, state k
//! the rendering at unfolding depth k. Every state is a complete one-line
//! rendering of the whole subtree, ready for a diff-based text transition.

use crate::foundation::error::SlokaResult;
use crate::markup::typst::{FontVariant, wrap};
use crate::model::node::{Language, Node};
use crate::translit::scheme::{Scheme, transliterate};

/// One decomposition state: a full-line markup rendering plus the ordered
/// label anchors it contains (used downstream for matched-diff planning).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderedState {
    /// Complete one-line markup for this unfolding depth.
    pub markup: String,
    /// Label anchors present in the markup, in reading order.
    pub labels: Vec<String>,
}

/// Render a single node's own text in `language`: transliterate as the
/// target requires and wrap in the font/color/label markup.
pub fn node_markup(node: &Node, language: Language) -> SlokaResult<String> {
    let (text, variant) = match language {
        Language::English => (node.text().to_string(), FontVariant::Latin),
        Language::Translit => (
            transliterate(node.text(), Scheme::Itrans, Scheme::Iast)?,
            FontVariant::Latin,
        ),
        Language::Sanskrit => (
            transliterate(node.text(), Scheme::Itrans, Scheme::Devanagari)?,
            FontVariant::Devanagari,
        ),
    };
    Ok(wrap(&text, node.color().as_hex(), node.label(), variant))
}

/// Derive the full state sequence for `node`.
///
/// A leaf yields exactly one state. A node with children yields
/// `1 + max(child state counts)` states: state k+1 joins the children's
/// states at depth k with single spaces, and a child whose own sequence is
/// shorter repeats its last (most-decomposed) state for all deeper slots —
/// shallow branches freeze while deeper siblings keep unfolding.
pub fn text_states(node: &Node, language: Language) -> SlokaResult<Vec<RenderedState>> {
    let mut states = vec![RenderedState {
        markup: node_markup(node, language)?,
        labels: vec![node.label().to_string()],
    }];

    if node.children().is_empty() {
        return Ok(states);
    }

    let child_states = node
        .children()
        .iter()
        .map(|child| text_states(child, language))
        .collect::<SlokaResult<Vec<_>>>()?;
    let depth = child_states.iter().map(Vec::len).max().unwrap_or(0);

    for i in 0..depth {
        let mut parts = Vec::with_capacity(child_states.len());
        let mut labels = Vec::new();
        for cs in &child_states {
            let state = &cs[i.min(cs.len() - 1)];
            parts.push(state.markup.as_str());
            labels.extend(state.labels.iter().cloned());
        }
        states.push(RenderedState {
            markup: parts.join(" "),
            labels,
        });
    }

    tracing::trace!(
        text = node.text(),
        ?language,
        count = states.len(),
        "derived decomposition states"
    );
    Ok(states)
}

/// The markup strings of [`text_states`], for callers that only need the
/// rendered lines.
pub fn state_strings(node: &Node, language: Language) -> SlokaResult<Vec<String>> {
    Ok(text_states(node, language)?
        .into_iter()
        .map(|s| s.markup)
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/eval/states.rs"]
mod tests;
