/// Font selection for a markup fragment.
///
/// The two variants differ only in declared font family; color, stroke and
/// label-anchor syntax are identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontVariant {
    /// Latin / IAST text ("Junicode").
    Latin,
    /// Native Devanagari text ("Jaini").
    Devanagari,
}

impl FontVariant {
    fn family(self) -> &'static str {
        match self {
            Self::Latin => "Junicode",
            Self::Devanagari => "Jaini",
        }
    }
}

/// Wrap `text` in a Typst `#text` call carrying the resolved color and the
/// per-text label anchor used by matched-diff transitions.
///
/// Pure string templating; the Typst compiler itself is the player's concern.
pub fn wrap(text: &str, color_hex: &str, label: &str, variant: FontVariant) -> String {
    format!(
        "#text(font: \"{}\", stroke: none, fill: rgb(\"{}\"))[{}] <{}>",
        variant.family(),
        color_hex,
        text,
        label
    )
}
