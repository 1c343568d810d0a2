//! Token definition for the verse DSL node sections.
//!
//! The citation section is free text and is split off before lexing; only
//! the `sanskrit` / `english` node sections go through this lexer.
//! Whitespace between tokens is insignificant.

use logos::Logos;

/// One token of a node section.
#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `--- line ---` block marker.
    #[token("--- line ---")]
    LineMarker,

    /// Double-quoted node text; the payload is the raw inner slice, still
    /// carrying its escape sequences.
    #[regex(r#""(?:[^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Quoted(String),

    /// `@identifier` or `@#RRGGBB` color attribute.
    #[regex(r"@[A-Za-z_#][A-Za-z0-9_.#]*", |lex| lex.slice()[1..].to_string())]
    Color(String),

    /// `[gloss text]` attribute; payload excludes the brackets.
    #[regex(r"\[[^\]]*\]", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Gloss(String),

    /// `+digits` delay attribute.
    #[regex(r"\+[0-9]+", |lex| lex.slice()[1..].parse::<u32>().ok())]
    Delay(u32),

    /// Start of a nested child block.
    #[token("{")]
    OpenBrace,

    /// End of a nested child block.
    #[token("}")]
    CloseBrace,
}
