use crate::foundation::error::{SlokaError, SlokaResult};

/// A resolved rendering color, stored as a normalized `#RRGGBB` hex string.
///
/// Colors are resolved once at construction time and carried by value: a
/// [`crate::Node`] stores its own color, never a reference into the palette.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Color(String);

/// The fixed palette, keyed by semantic role and by base color name.
///
/// Role names map grammatical function to hue (a verb is pink everywhere,
/// a negation is red everywhere), which is what keeps multi-verse material
/// visually consistent.
const PALETTE: &[(&str, &str)] = &[
    // semantic roles
    ("GOD", "#58C4DD"),
    ("VERB", "#D147BD"),
    ("YOU", "#83C167"),
    ("PARTICLES", "#FF862F"),
    ("NEGATION", "#FC6255"),
    ("OBJECTS", "#FFFF00"),
    ("ADJECTIVES", "#5CD0B3"),
    // base colors
    ("WHITE", "#FFFFFF"),
    ("BLACK", "#000000"),
    ("BLUE", "#58C4DD"),
    ("TEAL", "#5CD0B3"),
    ("GREEN", "#83C167"),
    ("YELLOW", "#FFFF00"),
    ("GOLD", "#F0AC5F"),
    ("ORANGE", "#FF862F"),
    ("RED", "#FC6255"),
    ("PINK", "#D147BD"),
    ("PURPLE", "#9A72AC"),
    ("GREY", "#888888"),
];

impl Color {
    /// The default (neutral) color.
    pub fn white() -> Self {
        Self("#FFFFFF".to_string())
    }

    /// Resolve a color identifier: either a palette name (`VERB`, `RED`) or
    /// a literal `#RRGGBB` value. Unknown names and malformed literals are
    /// construction errors.
    pub fn resolve(ident: &str) -> SlokaResult<Self> {
        if let Some(hex) = ident.strip_prefix('#') {
            if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Ok(Self(format!("#{}", hex.to_ascii_uppercase())));
            }
            return Err(SlokaError::construction(format!(
                "malformed color literal '{ident}' (expected #RRGGBB)"
            )));
        }
        PALETTE
            .iter()
            .find(|(name, _)| *name == ident)
            .map(|(_, hex)| Self((*hex).to_string()))
            .ok_or_else(|| SlokaError::construction(format!("unknown color '{ident}'")))
    }

    /// The normalized `#RRGGBB` form, as embedded in markup.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Whether this is the default color.
    pub fn is_white(&self) -> bool {
        self.0 == "#FFFFFF"
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}
