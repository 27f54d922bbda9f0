/// Convenience result alias used across the crate.
pub type FrameshowResult<T> = Result<T, FrameshowError>;

/// Top-level error type for selection, rasterization, composition and linking.
#[derive(thiserror::Error, Debug)]
pub enum FrameshowError {
    /// Invalid document, options, or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame could not be turned into image bytes.
    #[error("rasterization error: {0}")]
    Rasterization(String),

    /// A host primitive rejected a request (unknown node, wrong node kind, ...).
    #[error("host error: {0}")]
    Host(String),

    /// A navigation target does not resolve on the active page.
    #[error("link resolution error: {0}")]
    LinkResolution(String),

    /// JSON encode/decode failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure with preserved source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameshowError {
    /// Build [`FrameshowError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`FrameshowError::Rasterization`].
    pub fn rasterization(msg: impl Into<String>) -> Self {
        Self::Rasterization(msg.into())
    }

    /// Build [`FrameshowError::Host`].
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build [`FrameshowError::LinkResolution`].
    pub fn link_resolution(msg: impl Into<String>) -> Self {
        Self::LinkResolution(msg.into())
    }

    /// Build [`FrameshowError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
