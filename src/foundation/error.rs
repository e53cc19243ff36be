/// Convenience result type used across the crate.
pub type HanziResult<T> = Result<T, HanziError>;

/// Error taxonomy for loading, parsing and configuration.
///
/// The animation engine itself never fails; these errors come from the adapters around it.
#[derive(thiserror::Error, Debug)]
pub enum HanziError {
    /// Invalid settings or canvas parameters.
    #[error("config error: {0}")]
    Config(String),

    /// A stroke data record that cannot be used.
    #[error("stroke data error: {0}")]
    Data(String),

    /// SVG path data that does not describe a drawable outline.
    #[error("path error: {0}")]
    Path(String),

    /// Errors when serializing or deserializing JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem or reader failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HanziError {
    /// Build a [`HanziError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HanziError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`HanziError::Path`] value.
    pub fn path(msg: impl Into<String>) -> Self {
        Self::Path(msg.into())
    }

    /// Build a [`HanziError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for HanziError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
