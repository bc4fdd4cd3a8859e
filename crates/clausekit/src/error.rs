//! Error types for clausekit

use thiserror::Error;

/// Result type alias for builder operations
pub type BuildResult<T> = Result<T, BuilderError>;

/// Errors raised while declaring clauses.
///
/// Every error is raised before the builder is mutated, so a failed call
/// leaves the accumulated clauses exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// A required identifier, condition or code string was blank, or
    /// parallel inputs had different lengths.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The call was made in the wrong order (e.g. a JOIN before any FROM).
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// An element of a composite operation failed.
    #[error("{operation} failed at element {index}")]
    Composite {
        operation: &'static str,
        index: usize,
        #[source]
        source: Box<BuilderError>,
    },
}

impl BuilderError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Wrap an element failure of a composite operation
    pub fn composite(operation: &'static str, index: usize, source: BuilderError) -> Self {
        Self::Composite {
            operation,
            index,
            source: Box::new(source),
        }
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a precondition error
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Check if this is a composite error
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite { .. })
    }

    /// The innermost error, unwrapping any composite layers.
    pub fn root_cause(&self) -> &BuilderError {
        match self {
            Self::Composite { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Reject blank (empty or whitespace-only) input.
pub(crate) fn ensure_non_blank(
    operation: &'static str,
    argument: &'static str,
    value: &str,
) -> BuildResult<()> {
    if value.trim().is_empty() {
        let err =
            BuilderError::invalid_argument(format!("{operation}: `{argument}` must not be blank"));
        crate::trace::rejected(operation, &err);
        return Err(err);
    }
    Ok(())
}
