use miette::Diagnostic;
use thiserror::Error;

/// Result type for resolution and building (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Fatal resolution errors. The resolver never returns a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("alias '{alias}' is ambiguous with '{other}': {reason}")]
    #[diagnostic(
        code(trellis::ambiguous_key),
        help("rename one of the aliases so that they produce different accessors")
    )]
    AmbiguousKey {
        alias: String,
        other: String,
        reason: String,
    },

    #[error("alias '{alias}' has an invalid segment '{segment}': {reason}")]
    #[diagnostic(
        code(trellis::invalid_identifier),
        help("aliases must start with a letter, segments need at least one ASCII letter or digit and must not contain whitespace or be a reserved accessor name")
    )]
    InvalidIdentifier {
        alias: String,
        segment: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn ambiguous(
        alias: impl Into<String>,
        other: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Self::AmbiguousKey {
            alias: alias.into(),
            other: other.into(),
            reason: reason.into(),
        })
    }

    pub(crate) fn invalid(
        alias: impl Into<String>,
        segment: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Self::InvalidIdentifier {
            alias: alias.into(),
            segment: segment.into(),
            reason: reason.into(),
        })
    }

    /// The alias the error is reported against.
    pub fn alias(&self) -> &str {
        match self {
            Self::AmbiguousKey { alias, .. } | Self::InvalidIdentifier { alias, .. } => alias,
        }
    }
}
