/// Convenience result type used across stonkline.
pub type StonkResult<T> = Result<T, StonkError>;

/// Top-level error taxonomy for everything around the geometry core.
///
/// The curve routines themselves are infallible; these errors come from configuration,
/// serialization and rendering.
#[derive(thiserror::Error, Debug)]
pub enum StonkError {
    /// Invalid user-provided canvas or generator parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration or drawings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while building or rasterizing SVG output.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StonkError {
    /// Build a [`StonkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StonkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`StonkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
