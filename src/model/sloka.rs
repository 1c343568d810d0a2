use std::fmt;

use crate::foundation::error::{SlokaError, SlokaResult};
use crate::model::node::{Language, Node};

/// A short attribution phrase tagged with the language it is rendered in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Citation {
    node: Node,
    language: Language,
}

impl Citation {
    /// Build a citation from raw text and a target rendering language.
    pub fn new(text: impl Into<String>, language: Language) -> SlokaResult<Self> {
        Ok(Self {
            node: Node::leaf(text)?,
            language,
        })
    }

    /// The citation text as a single node.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The language the citation is rendered in.
    pub fn language(&self) -> Language {
        self.language
    }
}

/// A verse: a citation plus paired Sanskrit and English line sets.
///
/// The pairing invariant — equal outer line counts and equal per-line node
/// counts — is enforced eagerly by [`Sloka::new`]. Each Sanskrit node and
/// the English node at the same (line, position) are the translation pair
/// for one sentence-sized unit and are decomposed simultaneously.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sloka {
    citation: Citation,
    sanskrit: Vec<Vec<Node>>,
    english: Vec<Vec<Node>>,
}

impl Sloka {
    /// Build a verse, validating the pairing invariant up front.
    pub fn new(
        citation: Citation,
        sanskrit: Vec<Vec<Node>>,
        english: Vec<Vec<Node>>,
    ) -> SlokaResult<Self> {
        let sloka = Self {
            citation,
            sanskrit,
            english,
        };
        sloka.validate()?;
        Ok(sloka)
    }

    /// Check the pairing invariant.
    ///
    /// `new` enforces it already; deserialized slokas go through this again
    /// before any teaching plan is built.
    pub fn validate(&self) -> SlokaResult<()> {
        if self.sanskrit.len() != self.english.len() {
            return Err(SlokaError::shape(format!(
                "sanskrit has {} lines, english has {}",
                self.sanskrit.len(),
                self.english.len()
            )));
        }
        for (i, (sa, en)) in self.sanskrit.iter().zip(&self.english).enumerate() {
            if sa.len() != en.len() {
                return Err(SlokaError::shape(format!(
                    "line {}: sanskrit has {} nodes, english has {}",
                    i + 1,
                    sa.len(),
                    en.len()
                )));
            }
        }
        Ok(())
    }

    /// The verse citation.
    pub fn citation(&self) -> &Citation {
        &self.citation
    }

    /// Sanskrit lines, each an ordered sequence of nodes.
    pub fn sanskrit(&self) -> &[Vec<Node>] {
        &self.sanskrit
    }

    /// English lines, paired positionally with [`Sloka::sanskrit`].
    pub fn english(&self) -> &[Vec<Node>] {
        &self.english
    }
}

fn fmt_section(f: &mut fmt::Formatter<'_>, lines: &[Vec<Node>]) -> fmt::Result {
    for line in lines {
        writeln!(f, "--- line ---")?;
        for node in line {
            writeln!(f, "{node}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Sloka {
    /// The verse in its DSL-shaped authoring form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== citation ===")?;
        let tag = match self.citation.language() {
            Language::English => "ENGLISH",
            Language::Sanskrit => "SANSKRIT",
            Language::Translit => "TRANSLIT",
        };
        writeln!(f, "{} {}", self.citation.node().text(), tag)?;
        writeln!(f)?;
        writeln!(f, "=== sanskrit ===")?;
        fmt_section(f, &self.sanskrit)?;
        writeln!(f, "=== english ===")?;
        fmt_section(f, &self.english)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/sloka.rs"]
mod tests;
