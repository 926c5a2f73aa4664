use thiserror::Error;

/// Errors raised while constructing or persisting a build descriptor.
///
/// Lookups never error: a missing declaration site or an unresolvable
/// property reference is a `None`/verbatim value by design.
#[derive(Debug, Error)]
pub enum PomError {
    /// Input is not well-formed XML.
    #[error("malformed build descriptor: {0}")]
    Parse(String),

    /// Input parsed but contained no root element (e.g. a bare file path
    /// handed to the content parser).
    #[error("build descriptor has no root element")]
    NoRoot,

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize build descriptor: {0}")]
    Serialize(String),
}

impl PomError {
    /// True for failures of the content parse itself, the signal that an
    /// auto-detected input should be retried as a file path.
    pub fn is_structural(&self) -> bool {
        matches!(self, PomError::Parse(_) | PomError::NoRoot)
    }
}
