/// Convenience result type used across the crate.
pub type SlokaResult<T> = Result<T, SlokaError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every failure is fatal to the verse run: there are no retries and no
/// partial plans. A [`SlokaError`] produced anywhere in the pipeline aborts
/// before any teaching plan is handed to the player.
#[derive(thiserror::Error, Debug)]
pub enum SlokaError {
    /// Malformed verse source (bad quoting, unknown tokens, invalid nesting).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid node construction (empty text, unknown color, delay with
    /// explicit children).
    #[error("construction error: {0}")]
    Construction(String),

    /// Sanskrit/English line or node-count mismatch in a sloka.
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// Input that is not valid romanized scheme text.
    #[error("transliteration error: {0}")]
    Translit(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlokaError {
    /// Build a [`SlokaError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SlokaError::Construction`] value.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Build a [`SlokaError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`SlokaError::Translit`] value.
    pub fn translit(msg: impl Into<String>) -> Self {
        Self::Translit(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
