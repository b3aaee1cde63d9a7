//! Match-check errors.
//!
//! The checker has a single domain error: a match construct that fails to
//! cover its scrutinee type, reported once per construct with a rendered
//! witness. Accumulating errors across constructs is the pipeline's job,
//! not this crate's. The depth-limit variant is an internal resource bound,
//! not a property of the user's program logic.

use std::fmt;

use serde::Serialize;

use reed_common::Span;

/// An error produced by checking one match construct.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum MatchError {
    /// The rules do not cover every value of the scrutinee type. `witness`
    /// is the rendered text of one uncovered value.
    NonExhaustiveMatch { witness: String, span: Span },
    /// Pattern nesting exceeded the checker's recursion bound.
    PatternDepthExceeded { span: Span },
}

impl MatchError {
    /// The source span of the offending match construct.
    pub fn span(&self) -> Span {
        match self {
            MatchError::NonExhaustiveMatch { span, .. }
            | MatchError::PatternDepthExceeded { span } => *span,
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NonExhaustiveMatch { witness, .. } => {
                write!(f, "non-exhaustive match: `{}` is not covered", witness)
            }
            MatchError::PatternDepthExceeded { .. } => {
                write!(f, "patterns are nested too deeply to analyze")
            }
        }
    }
}

impl std::error::Error for MatchError {}
