use std::fmt;

use crate::foundation::error::{SlokaError, SlokaResult};
use crate::foundation::math::fnv1a64;
use crate::model::palette::Color;

/// A render target for verse text.
///
/// Each target implies a different text transform and font wrapper: English
/// passes source text through, `Translit` transliterates ITRANS to IAST, and
/// `Sanskrit` transliterates ITRANS to Devanagari.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Source-language (English gloss) rendering.
    English,
    /// Phonetic IAST transliteration rendering.
    Translit,
    /// Native Devanagari rendering.
    Sanskrit,
}

impl Language {
    /// Parse an uppercase citation tag (`ENGLISH`, `SANSKRIT`, `TRANSLIT`).
    /// Tags are case-sensitive; anything else is not a tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ENGLISH" => Some(Self::English),
            "SANSKRIT" => Some(Self::Sanskrit),
            "TRANSLIT" => Some(Self::Translit),
            _ => None,
        }
    }
}

/// Derive the stable per-text label anchor for `text`.
///
/// Same text within one process run yields the same label; the 8-digit
/// truncation accepts collisions, which degrade animation matching quality
/// but never correctness (the player falls back to positional matching).
pub(crate) fn text_label(text: &str) -> String {
    format!("label{}", fnv1a64(text.as_bytes()) % 100_000_000)
}

/// A tree vertex representing a unit of text at some decomposition level.
///
/// Children are a strictly finer segmentation of the same content as `text`,
/// in the same left-to-right order. Nodes are immutable once built: construct
/// them through [`NodeSpec::build`], which applies the delay and multi-word
/// auto-split desugarings and resolves colors eagerly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    text: String,
    color: Color,
    gloss: Option<String>,
    label: String,
    children: Vec<Node>,
}

impl Node {
    /// Build a plain leaf with the default color.
    pub fn leaf(text: impl Into<String>) -> SlokaResult<Self> {
        NodeSpec::new(text).build()
    }

    /// Raw transliterated source text (ITRANS-style ASCII).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolved rendering color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Optional short annotation.
    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    /// Stable per-text label anchor, used to correlate this text across
    /// render states.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sub-decomposition in reading order; empty for a leaf.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        write!(f, "{pad}\"{}\"", self.text)?;
        if !self.color.is_white() {
            write!(f, " @{}", self.color.as_hex())?;
        }
        if let Some(gloss) = &self.gloss {
            write!(f, " [{gloss}]")?;
        }
        if !self.children.is_empty() {
            writeln!(f, " {{")?;
            for child in &self.children {
                child.fmt_indented(f, indent + 1)?;
                writeln!(f)?;
            }
            write!(f, "{pad}}}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    /// The DSL-shaped authoring form, suitable for `sloka show`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Unresolved node description, as authored or parsed.
///
/// `build` turns a spec into a [`Node`], applying:
///
/// - **delay sugar**: `delay = n` wraps the leaf in `n` extra single-child
///   levels holding the same text and default color, inserting `n`
///   do-nothing reveal states before real decomposition. A positive delay
///   combined with explicit children is rejected.
/// - **multi-word auto-split**: when `text` has k > 1 whitespace-separated
///   tokens and exactly k children are supplied, each token becomes its own
///   child (inheriting this spec's color) wrapping the corresponding
///   original child.
#[derive(Clone, Debug, Default)]
pub struct NodeSpec {
    /// Raw source text; must be non-empty.
    pub text: String,
    /// Color identifier (palette name or `#RRGGBB`); `None` means default.
    pub color: Option<String>,
    /// Optional gloss annotation.
    pub gloss: Option<String>,
    /// Extra do-nothing reveal levels before decomposition.
    pub delay: u32,
    /// Explicit sub-decomposition.
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Start a spec for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the color identifier.
    pub fn color(mut self, ident: impl Into<String>) -> Self {
        self.color = Some(ident.into());
        self
    }

    /// Set the gloss annotation.
    pub fn gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }

    /// Set the delay count.
    pub fn delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    /// Append a child spec.
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Resolve the spec into an immutable [`Node`] tree.
    pub fn build(self) -> SlokaResult<Node> {
        if self.text.trim().is_empty() {
            return Err(SlokaError::construction("node text must be non-empty"));
        }

        let color = match &self.color {
            Some(ident) => Color::resolve(ident)?,
            None => Color::default(),
        };

        let children = self
            .children
            .into_iter()
            .map(NodeSpec::build)
            .collect::<SlokaResult<Vec<_>>>()?;

        if self.delay > 0 {
            if !children.is_empty() {
                return Err(SlokaError::construction(format!(
                    "node '{}' has delay {} and explicit children; delay only \
                     applies to leaves",
                    self.text, self.delay
                )));
            }
            let mut node = Node {
                text: self.text.clone(),
                color,
                gloss: self.gloss,
                label: text_label(&self.text),
                children: Vec::new(),
            };
            for _ in 0..self.delay {
                node = Node {
                    text: self.text.clone(),
                    color: Color::default(),
                    gloss: None,
                    label: text_label(&self.text),
                    children: vec![node],
                };
            }
            return Ok(node);
        }

        let tokens: Vec<&str> = self.text.split_whitespace().collect();
        let children = if tokens.len() > 1 && tokens.len() == children.len() {
            tokens
                .iter()
                .zip(children)
                .map(|(token, child)| Node {
                    text: (*token).to_string(),
                    color: color.clone(),
                    gloss: None,
                    label: text_label(token),
                    children: vec![child],
                })
                .collect()
        } else {
            children
        };

        Ok(Node {
            label: text_label(&self.text),
            text: self.text,
            color,
            gloss: self.gloss,
            children,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/node.rs"]
mod tests;
