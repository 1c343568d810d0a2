//! Verse DSL parser.
//!
//! Source layout (sections in fixed order):
//!
//! ```text
//! === citation ===
//! (citation text) OPTIONAL_LANGUAGE_TAG
//!
//! === sanskrit ===
//! --- line ---
//! "text" @color [gloss] +delay { "child" ... }
//!
//! === english ===
//! --- line ---
//! ...
//! ```
//!
//! Attributes are optional and order-independent. Parsing also performs
//! semantic construction: color resolution and the delay / auto-split
//! desugarings run here, so construction errors surface through the same
//! `Result` as syntax errors. Errors carry the absolute byte offset of the
//! offending token.

use std::ops::Range;

use logos::Logos;

use crate::foundation::error::{SlokaError, SlokaResult};
use crate::model::node::{Language, Node, NodeSpec};
use crate::model::sloka::{Citation, Sloka};
use crate::parse::lexer::Token;

const CITATION_MARKER: &str = "=== citation ===";
const SANSKRIT_MARKER: &str = "=== sanskrit ===";
const ENGLISH_MARKER: &str = "=== english ===";

/// Parse a verse source string into a validated [`Sloka`].
pub fn parse(source: &str) -> SlokaResult<Sloka> {
    let sections = split_sections(source)?;
    let citation = parse_citation(sections.citation)?;
    let sanskrit = parse_section(sections.sanskrit, sections.sanskrit_offset)?;
    let english = parse_section(sections.english, sections.english_offset)?;
    Sloka::new(citation, sanskrit, english)
}

struct Sections<'a> {
    citation: &'a str,
    sanskrit: &'a str,
    sanskrit_offset: usize,
    english: &'a str,
    english_offset: usize,
}

fn split_sections(source: &str) -> SlokaResult<Sections<'_>> {
    let cite_at = source
        .find(CITATION_MARKER)
        .ok_or_else(|| SlokaError::parse(format!("missing '{CITATION_MARKER}' section")))?;
    if !source[..cite_at].trim().is_empty() {
        return Err(SlokaError::parse(format!(
            "unexpected content before '{CITATION_MARKER}'"
        )));
    }
    let sans_at = source
        .find(SANSKRIT_MARKER)
        .ok_or_else(|| SlokaError::parse(format!("missing '{SANSKRIT_MARKER}' section")))?;
    let eng_at = source
        .find(ENGLISH_MARKER)
        .ok_or_else(|| SlokaError::parse(format!("missing '{ENGLISH_MARKER}' section")))?;
    if !(cite_at < sans_at && sans_at < eng_at) {
        return Err(SlokaError::parse(
            "sections must appear in order: citation, sanskrit, english",
        ));
    }

    let sanskrit_offset = sans_at + SANSKRIT_MARKER.len();
    let english_offset = eng_at + ENGLISH_MARKER.len();
    Ok(Sections {
        citation: &source[cite_at + CITATION_MARKER.len()..sans_at],
        sanskrit: &source[sanskrit_offset..eng_at],
        sanskrit_offset,
        english: &source[english_offset..],
        english_offset,
    })
}

/// Citation body: one non-empty line; a trailing all-uppercase token naming
/// a known language is consumed as the citation's language tag, and the
/// default target is the native script.
fn parse_citation(body: &str) -> SlokaResult<Citation> {
    let lines: Vec<&str> = body.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let line = match lines.as_slice() {
        [] => return Err(SlokaError::parse("citation section is empty")),
        [line] => *line,
        _ => return Err(SlokaError::parse("citation must be a single line")),
    };

    if let Some((text, tag)) = line.rsplit_once(char::is_whitespace)
        && let Some(language) = Language::from_tag(tag)
    {
        return Citation::new(text.trim_end(), language);
    }
    Citation::new(line, Language::Sanskrit)
}

struct Tokens {
    items: Vec<(Token, Range<usize>)>,
    pos: usize,
    base: usize,
}

impl Tokens {
    fn lex(src: &str, base: usize) -> SlokaResult<Self> {
        let mut items = Vec::new();
        for (result, span) in Token::lexer(src).spanned() {
            match result {
                Ok(token) => items.push((token, span)),
                Err(()) => {
                    return Err(SlokaError::parse(format!(
                        "unrecognized token {:?} at byte {}",
                        &src[span.clone()],
                        base + span.start
                    )));
                }
            }
        }
        Ok(Self {
            items,
            pos: 0,
            base,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.items.get(self.pos).map(|(t, _)| t)
    }

    fn next(&mut self) -> Option<(Token, Range<usize>)> {
        let item = self.items.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Absolute byte offset of the current token, for error messages.
    fn offset(&self) -> usize {
        self.items
            .get(self.pos)
            .or_else(|| self.items.last())
            .map_or(self.base, |(_, span)| self.base + span.start)
    }
}

fn parse_section(src: &str, base: usize) -> SlokaResult<Vec<Vec<Node>>> {
    let mut tokens = Tokens::lex(src, base)?;
    if tokens.peek() != Some(&Token::LineMarker) {
        return Err(SlokaError::parse(format!(
            "expected '--- line ---' at byte {}",
            tokens.offset()
        )));
    }

    let mut lines = Vec::new();
    while tokens.eat(&Token::LineMarker) {
        let mut nodes = Vec::new();
        while matches!(tokens.peek(), Some(Token::Quoted(_))) {
            nodes.push(parse_node(&mut tokens)?.build()?);
        }
        if nodes.is_empty() {
            return Err(SlokaError::parse(format!(
                "line block without nodes at byte {}",
                tokens.offset()
            )));
        }
        lines.push(nodes);
    }

    if tokens.peek().is_some() {
        return Err(SlokaError::parse(format!(
            "unexpected token at byte {}",
            tokens.offset()
        )));
    }
    Ok(lines)
}

fn parse_node(tokens: &mut Tokens) -> SlokaResult<NodeSpec> {
    let Some((Token::Quoted(raw), span)) = tokens.next() else {
        return Err(SlokaError::parse(format!(
            "expected quoted node text at byte {}",
            tokens.offset()
        )));
    };
    let mut spec = NodeSpec::new(unescape(&raw, tokens.base + span.start)?);

    loop {
        match tokens.peek() {
            Some(Token::Color(_)) => {
                let Some((Token::Color(ident), _)) = tokens.next() else {
                    unreachable!("peeked a color token");
                };
                spec.color = Some(ident);
            }
            Some(Token::Gloss(_)) => {
                let Some((Token::Gloss(gloss), span)) = tokens.next() else {
                    unreachable!("peeked a gloss token");
                };
                if gloss.trim().is_empty() {
                    return Err(SlokaError::parse(format!(
                        "empty gloss at byte {}",
                        tokens.base + span.start
                    )));
                }
                spec.gloss = Some(gloss);
            }
            Some(Token::Delay(_)) => {
                let Some((Token::Delay(delay), _)) = tokens.next() else {
                    unreachable!("peeked a delay token");
                };
                spec.delay = delay;
            }
            _ => break,
        }
    }

    if tokens.eat(&Token::OpenBrace) {
        while matches!(tokens.peek(), Some(Token::Quoted(_))) {
            spec.children.push(parse_node(tokens)?);
        }
        if !tokens.eat(&Token::CloseBrace) {
            return Err(SlokaError::parse(format!(
                "unclosed child block at byte {}",
                tokens.offset()
            )));
        }
    }

    Ok(spec)
}

/// Resolve the two supported escapes, `\"` and `\\`; anything else is a
/// parse error.
fn unescape(raw: &str, at: usize) -> SlokaResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                other => {
                    return Err(SlokaError::parse(format!(
                        "unsupported escape '\\{}' in string at byte {at}",
                        other.map(String::from).unwrap_or_default()
                    )));
                }
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/parse/parser.rs"]
mod tests;
