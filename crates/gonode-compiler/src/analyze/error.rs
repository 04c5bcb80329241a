use crate::diagnostics::Span;

/// Errors that abort extraction of a whole source file.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The file is not valid Go.
    #[error("syntax error: {message}")]
    Parse { message: String, span: Span },

    /// A parameter or result type cannot cross the boundary.
    #[error("unsupported type `{ty}` in `{function}`")]
    UnsupportedType {
        function: String,
        ty: String,
        span: Span,
    },

    /// An exported function declares more than one result.
    #[error("`{function}` returns {count} values, exported functions may return at most one")]
    MultipleReturnValues {
        function: String,
        count: usize,
        span: Span,
    },
}

impl ExtractError {
    pub fn span(&self) -> Span {
        match self {
            ExtractError::Parse { span, .. }
            | ExtractError::UnsupportedType { span, .. }
            | ExtractError::MultipleReturnValues { span, .. } => *span,
        }
    }

    /// Declaration that caused the error, if it got that far.
    pub fn function(&self) -> Option<&str> {
        match self {
            ExtractError::Parse { .. } => None,
            ExtractError::UnsupportedType { function, .. }
            | ExtractError::MultipleReturnValues { function, .. } => Some(function),
        }
    }

    /// Short annotation placed under the offending source.
    pub fn label(&self) -> &'static str {
        match self {
            ExtractError::Parse { .. } => "here",
            ExtractError::UnsupportedType { .. } => "not supported across the boundary",
            ExtractError::MultipleReturnValues { .. } => "declared results",
        }
    }
}
