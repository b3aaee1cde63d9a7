//! Pattern-match exhaustiveness analysis for the Reed compiler.
//!
//! Given one `case` construct's rule patterns -- already type-checked, with
//! enum identities resolved -- this crate decides whether the rules cover
//! every possible value of the scrutinee's type. If they do not, it
//! produces a concrete counter-example value (a witness) for the
//! diagnostic: `Some(false)`, `(true, _)`, `None`.
//!
//! The algorithm is the usefulness construction from Maranget's "Warnings
//! for Pattern Matching" (2007), run in witness-building form: a matrix of
//! pattern rows is repeatedly narrowed by specialization (commit to one
//! constructor, expand its arguments into columns) or by the default matrix
//! (keep only rows that match without looking), until either some rule
//! survives with no columns left, or an uncovered value has been assembled.
//!
//! Scalar domains (integers, floats, strings, chars) are deliberately
//! treated as infinite: no set of literals exhausts them, only a wildcard
//! or binding does.
//!
//! # Architecture
//!
//! - [`pat`]: typed pattern input, produced by the front end
//! - [`registry`]: read-only enum declaration table
//! - [`ctor`]: the closed constructor vocabulary and witness rendering
//! - [`classify`]: patterns to constructors
//! - [`matrix`]: the pattern matrix and its two transformations
//! - [`signature`]: completeness of an observed constructor set
//! - [`exhaustiveness`]: the recursive engine and witness reconstruction
//! - [`error`] / [`diagnostics`]: the per-construct error and its rendering

pub mod classify;
pub mod ctor;
pub mod diagnostics;
pub mod error;
pub mod exhaustiveness;
pub mod matrix;
pub mod pat;
pub mod registry;
pub mod signature;

use reed_common::Span;

use crate::error::MatchError;
use crate::exhaustiveness::{exceeds_depth_limit, find_witness};
use crate::matrix::PatMatrix;
use crate::pat::Pat;
use crate::registry::EnumRegistry;

/// Check one match construct for exhaustiveness.
///
/// `rules` are the rule patterns in source order; `span` locates the whole
/// construct for diagnostics; `registry` is the frozen enum table. Returns
/// `Ok(())` when every value of the scrutinee type is matched, otherwise
/// the error carrying the first uncovered value, rendered.
///
/// This is the sole entry point: the pipeline calls it once per match
/// construct and folds the results into its own error accumulation.
pub fn check_match(
    rules: &[Pat],
    span: Span,
    registry: &EnumRegistry,
) -> Result<(), MatchError> {
    // Reject over-deep rules before anything walks them recursively;
    // classification and row cloning both descend one stack frame per
    // nesting level.
    if rules.iter().any(exceeds_depth_limit) {
        return Err(MatchError::PatternDepthExceeded { span });
    }
    let matrix = PatMatrix::from_rules(rules);
    match find_witness(&matrix, 1, registry) {
        Err(_) => Err(MatchError::PatternDepthExceeded { span }),
        Ok(None) => Ok(()),
        Ok(Some(witness)) => {
            debug_assert_eq!(witness.len(), 1, "top-level witness width must be 1");
            Err(MatchError::NonExhaustiveMatch {
                witness: witness[0].to_string(),
                span,
            })
        }
    }
}
