//! ITRANS transliteration.
//!
//! All node text is authored in ITRANS-style ASCII. This module converts it
//! to IAST (token substitution) or Devanagari (syllable assembly with
//! virama/matra handling). Characters outside the scheme pass through
//! unchanged, so mixed text like `(abhinayadarpaNe 1)` renders sensibly; the
//! only hard failure is a dangling `~` or `^` that cannot begin any scheme
//! token, which indicates malformed ITRANS rather than foreign text.

use crate::foundation::error::{SlokaError, SlokaResult};

/// A transliteration scheme endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// ASCII ITRANS romanization (the authoring encoding).
    Itrans,
    /// Diacritic Latin (IAST).
    Iast,
    /// Native Devanagari script.
    Devanagari,
}

struct Vowel {
    itrans: &'static str,
    iast: &'static str,
    independent: &'static str,
    matra: &'static str,
}

struct Mapping {
    itrans: &'static str,
    iast: &'static str,
    deva: &'static str,
}

const VOWELS: &[Vowel] = &[
    Vowel { itrans: "a", iast: "a", independent: "अ", matra: "" },
    Vowel { itrans: "A", iast: "ā", independent: "आ", matra: "ा" },
    Vowel { itrans: "aa", iast: "ā", independent: "आ", matra: "ा" },
    Vowel { itrans: "i", iast: "i", independent: "इ", matra: "ि" },
    Vowel { itrans: "I", iast: "ī", independent: "ई", matra: "ी" },
    Vowel { itrans: "ii", iast: "ī", independent: "ई", matra: "ी" },
    Vowel { itrans: "u", iast: "u", independent: "उ", matra: "ु" },
    Vowel { itrans: "U", iast: "ū", independent: "ऊ", matra: "ू" },
    Vowel { itrans: "uu", iast: "ū", independent: "ऊ", matra: "ू" },
    Vowel { itrans: "R^i", iast: "ṛ", independent: "ऋ", matra: "ृ" },
    Vowel { itrans: "RRi", iast: "ṛ", independent: "ऋ", matra: "ृ" },
    Vowel { itrans: "R^I", iast: "ṝ", independent: "ॠ", matra: "ॄ" },
    Vowel { itrans: "RRI", iast: "ṝ", independent: "ॠ", matra: "ॄ" },
    Vowel { itrans: "L^i", iast: "ḷ", independent: "ऌ", matra: "ॢ" },
    Vowel { itrans: "LLi", iast: "ḷ", independent: "ऌ", matra: "ॢ" },
    Vowel { itrans: "L^I", iast: "ḹ", independent: "ॡ", matra: "ॣ" },
    Vowel { itrans: "LLI", iast: "ḹ", independent: "ॡ", matra: "ॣ" },
    Vowel { itrans: "e", iast: "e", independent: "ए", matra: "े" },
    Vowel { itrans: "ai", iast: "ai", independent: "ऐ", matra: "ै" },
    Vowel { itrans: "o", iast: "o", independent: "ओ", matra: "ो" },
    Vowel { itrans: "au", iast: "au", independent: "औ", matra: "ौ" },
];

const CONSONANTS: &[Mapping] = &[
    Mapping { itrans: "k", iast: "k", deva: "क" },
    Mapping { itrans: "kh", iast: "kh", deva: "ख" },
    Mapping { itrans: "g", iast: "g", deva: "ग" },
    Mapping { itrans: "gh", iast: "gh", deva: "घ" },
    Mapping { itrans: "~N", iast: "ṅ", deva: "ङ" },
    Mapping { itrans: "ch", iast: "c", deva: "च" },
    Mapping { itrans: "Ch", iast: "ch", deva: "छ" },
    Mapping { itrans: "j", iast: "j", deva: "ज" },
    Mapping { itrans: "jh", iast: "jh", deva: "झ" },
    Mapping { itrans: "~n", iast: "ñ", deva: "ञ" },
    Mapping { itrans: "T", iast: "ṭ", deva: "ट" },
    Mapping { itrans: "Th", iast: "ṭh", deva: "ठ" },
    Mapping { itrans: "D", iast: "ḍ", deva: "ड" },
    Mapping { itrans: "Dh", iast: "ḍh", deva: "ढ" },
    Mapping { itrans: "N", iast: "ṇ", deva: "ण" },
    Mapping { itrans: "t", iast: "t", deva: "त" },
    Mapping { itrans: "th", iast: "th", deva: "थ" },
    Mapping { itrans: "d", iast: "d", deva: "द" },
    Mapping { itrans: "dh", iast: "dh", deva: "ध" },
    Mapping { itrans: "n", iast: "n", deva: "न" },
    Mapping { itrans: "p", iast: "p", deva: "प" },
    Mapping { itrans: "ph", iast: "ph", deva: "फ" },
    Mapping { itrans: "b", iast: "b", deva: "ब" },
    Mapping { itrans: "bh", iast: "bh", deva: "भ" },
    Mapping { itrans: "m", iast: "m", deva: "म" },
    Mapping { itrans: "y", iast: "y", deva: "य" },
    Mapping { itrans: "r", iast: "r", deva: "र" },
    Mapping { itrans: "l", iast: "l", deva: "ल" },
    Mapping { itrans: "v", iast: "v", deva: "व" },
    Mapping { itrans: "sh", iast: "ś", deva: "श" },
    Mapping { itrans: "Sh", iast: "ṣ", deva: "ष" },
    Mapping { itrans: "shh", iast: "ṣ", deva: "ष" },
    Mapping { itrans: "s", iast: "s", deva: "स" },
    Mapping { itrans: "h", iast: "h", deva: "ह" },
    Mapping { itrans: "L", iast: "ḷ", deva: "ळ" },
    // kSh as a single unit; the cluster also falls out of k + Sh naturally.
    Mapping { itrans: "x", iast: "kṣ", deva: "क्ष" },
];

const SIGNS: &[Mapping] = &[
    Mapping { itrans: "M", iast: "ṃ", deva: "ं" },
    Mapping { itrans: "H", iast: "ḥ", deva: "ः" },
    Mapping { itrans: "~M", iast: "m̐", deva: "ँ" },
];

const SYMBOLS: &[Mapping] = &[
    Mapping { itrans: "0", iast: "0", deva: "०" },
    Mapping { itrans: "1", iast: "1", deva: "१" },
    Mapping { itrans: "2", iast: "2", deva: "२" },
    Mapping { itrans: "3", iast: "3", deva: "३" },
    Mapping { itrans: "4", iast: "4", deva: "४" },
    Mapping { itrans: "5", iast: "5", deva: "५" },
    Mapping { itrans: "6", iast: "6", deva: "६" },
    Mapping { itrans: "7", iast: "7", deva: "७" },
    Mapping { itrans: "8", iast: "8", deva: "८" },
    Mapping { itrans: "9", iast: "9", deva: "९" },
    // Verse punctuation: both the ITRANS bars and the bare-dot shorthand the
    // verse files use map to danda in native script.
    Mapping { itrans: "..", iast: "..", deva: "॥" },
    Mapping { itrans: ".a", iast: "'", deva: "ऽ" },
    Mapping { itrans: ".", iast: ".", deva: "।" },
    Mapping { itrans: "||", iast: "||", deva: "॥" },
    Mapping { itrans: "|", iast: "|", deva: "।" },
];

const VIRAMA: &str = "्";

enum Token<'a> {
    Vowel(&'a Vowel),
    Consonant(&'a Mapping),
    Sign(&'a Mapping),
    Symbol(&'a Mapping),
}

/// Longest-match lookup against all scheme tables at the head of `rest`.
fn match_token(rest: &str) -> Option<(usize, Token<'_>)> {
    let mut best: Option<(usize, Token<'static>)> = None;
    let mut consider = |len: usize, token: Token<'static>| {
        if best.as_ref().is_none_or(|(best_len, _)| len > *best_len) {
            best = Some((len, token));
        }
    };
    for v in VOWELS {
        if rest.starts_with(v.itrans) {
            consider(v.itrans.len(), Token::Vowel(v));
        }
    }
    for c in CONSONANTS {
        if rest.starts_with(c.itrans) {
            consider(c.itrans.len(), Token::Consonant(c));
        }
    }
    for s in SIGNS {
        if rest.starts_with(s.itrans) {
            consider(s.itrans.len(), Token::Sign(s));
        }
    }
    for s in SYMBOLS {
        if rest.starts_with(s.itrans) {
            consider(s.itrans.len(), Token::Symbol(s));
        }
    }
    best
}

/// Transliterate `text` between schemes.
///
/// Only ITRANS sources are supported; the identity conversion is free.
pub fn transliterate(text: &str, from: Scheme, to: Scheme) -> SlokaResult<String> {
    match (from, to) {
        (Scheme::Itrans, Scheme::Itrans) => Ok(text.to_string()),
        (Scheme::Itrans, Scheme::Iast) => itrans_to_iast(text),
        (Scheme::Itrans, Scheme::Devanagari) => itrans_to_devanagari(text),
        (from, to) => Err(SlokaError::translit(format!(
            "unsupported conversion {from:?} -> {to:?}"
        ))),
    }
}

fn bad_marker(text: &str, pos: usize, c: char) -> SlokaError {
    SlokaError::translit(format!(
        "dangling '{c}' at byte {pos} in {text:?} is not valid ITRANS"
    ))
}

fn itrans_to_iast(text: &str) -> SlokaResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some((len, token)) = match_token(rest) {
            out.push_str(match token {
                Token::Vowel(v) => v.iast,
                Token::Consonant(m) | Token::Sign(m) | Token::Symbol(m) => m.iast,
            });
            rest = &rest[len..];
        } else {
            let c = rest.chars().next().unwrap_or_default();
            if c == '~' || c == '^' {
                return Err(bad_marker(text, text.len() - rest.len(), c));
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    Ok(out)
}

fn itrans_to_devanagari(text: &str) -> SlokaResult<String> {
    let mut out = String::with_capacity(text.len() * 3);
    // A consonant awaits its vowel; the next token decides between a matra,
    // an explicit virama, or the implicit 'a'.
    let mut pending_consonant = false;
    let mut rest = text;
    while !rest.is_empty() {
        if let Some((len, token)) = match_token(rest) {
            match token {
                Token::Vowel(v) => {
                    if pending_consonant {
                        out.push_str(v.matra);
                    } else {
                        out.push_str(v.independent);
                    }
                    pending_consonant = false;
                }
                Token::Consonant(m) => {
                    if pending_consonant {
                        out.push_str(VIRAMA);
                    }
                    out.push_str(m.deva);
                    pending_consonant = true;
                }
                Token::Sign(m) | Token::Symbol(m) => {
                    if pending_consonant {
                        out.push_str(VIRAMA);
                        pending_consonant = false;
                    }
                    out.push_str(m.deva);
                }
            }
            rest = &rest[len..];
        } else {
            let c = rest.chars().next().unwrap_or_default();
            if c == '~' || c == '^' {
                return Err(bad_marker(text, text.len() - rest.len(), c));
            }
            if pending_consonant {
                out.push_str(VIRAMA);
                pending_consonant = false;
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    if pending_consonant {
        out.push_str(VIRAMA);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/translit/scheme.rs"]
mod tests;
