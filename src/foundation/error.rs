/// Result of every fallible render, layout and config operation.
pub type HalftoneResult<T> = Result<T, HalftoneError>;

/// Ways a render can fail. Every variant is raised before any document bytes are written.
#[derive(thiserror::Error, Debug)]
pub enum HalftoneError {
    /// Rejected geometry: non-positive or non-finite canvas or radius, a canvas smaller than one
    /// row or column, or a lattice above [`crate::MAX_CIRCLES`] dots. Also raised by the bridge
    /// for mistyped arguments and by `RenderConfig::from_path` when the file cannot be opened.
    #[error("validation error: {0}")]
    Validation(String),

    /// A row radius that came out non-finite or negative while laying out circles
    /// (`Lattice::circles`).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Malformed render config JSON (`RenderConfig::from_reader`).
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure writing a finished document (`render_to_writer`, `render_to_file`).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem setup around output, such as creating the parent directory.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HalftoneError {
    /// Build a [`HalftoneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HalftoneError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`HalftoneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
