/// Convenience result type used across bingocard.
pub type BingoResult<T> = Result<T, BingoError>;

/// Top-level error taxonomy used by card-building APIs.
#[derive(thiserror::Error, Debug)]
pub enum BingoError {
    /// Invalid card or style data, rejected before any drawing happens.
    #[error("validation error: {0}")]
    Validation(String),

    /// A font resource could not be opened or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization failed (surface limits, pixel buffer mismatches).
    #[error("render error: {0}")]
    Render(String),

    /// The finished image could not be written.
    #[error("output error: {0}")]
    Output(String),

    /// Errors when serializing or deserializing card descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BingoError {
    /// Build a [`BingoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BingoError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`BingoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BingoError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Build a [`BingoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
