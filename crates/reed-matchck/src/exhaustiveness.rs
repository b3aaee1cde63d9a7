//! The exhaustiveness engine (Maranget's algorithm, witness-building form).
//!
//! `find_witness` decides whether a pattern matrix covers every value of the
//! scrutinee positions, and if not, reconstructs one concrete uncovered
//! value. The recursion shrinks the problem through exactly two moves: when
//! the head column's signature is complete, specialize on each observed
//! constructor; when it is not, any value of a missing constructor can only
//! be caught by the irrefutable rows, so recurse on the default matrix.
//! Witnesses are built bottom-up as the recursion unwinds, one constructor
//! per open column.

use crate::ctor::Ctor;
use crate::matrix::PatMatrix;
use crate::pat::Pat;
use crate::registry::EnumRegistry;
use crate::signature::missing_ctors;

/// Upper bound on recursion depth, i.e. on the nesting depth of the
/// patterns under analysis. Source programs sit nowhere near this; hitting
/// it is reported rather than silently truncated.
pub const MAX_PATTERN_DEPTH: usize = 512;

/// The pattern nesting exceeded [`MAX_PATTERN_DEPTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimitExceeded;

/// Whether `pat` nests deeper than [`MAX_PATTERN_DEPTH`].
///
/// Measured with an explicit worklist, never the native stack: this runs
/// before classification or cloning, both of which recurse per nesting
/// level and must not be handed a pattern they cannot traverse.
pub fn exceeds_depth_limit(pat: &Pat) -> bool {
    let mut worklist = vec![(pat, 1usize)];
    while let Some((p, depth)) = worklist.pop() {
        if depth > MAX_PATTERN_DEPTH {
            return true;
        }
        match p {
            Pat::Tag { payload, .. } => worklist.push((payload, depth + 1)),
            Pat::Tuple(elems) => {
                worklist.extend(elems.iter().map(|e| (e, depth + 1)));
            }
            _ => {}
        }
    }
    false
}

/// Decide exhaustiveness of `matrix` over `width` open columns.
///
/// `Ok(None)` means every value is matched by some row. `Ok(Some(w))`
/// carries a witness: `w.len() == width`, one constructor per open column,
/// together encoding one concrete value no row matches. The witness is
/// deterministic -- branches are explored in head enumeration order and
/// missing constructors reported in domain order.
pub fn find_witness(
    matrix: &PatMatrix,
    width: usize,
    registry: &EnumRegistry,
) -> Result<Option<Vec<Ctor>>, DepthLimitExceeded> {
    find_witness_at(matrix, width, registry, 0)
}

fn find_witness_at(
    matrix: &PatMatrix,
    width: usize,
    registry: &EnumRegistry,
    depth: usize,
) -> Result<Option<Vec<Ctor>>, DepthLimitExceeded> {
    if depth > MAX_PATTERN_DEPTH {
        return Err(DepthLimitExceeded);
    }

    // No columns left: any surviving row matches outright; no surviving row
    // means nothing covers this point, witnessed by the empty vector.
    if width == 0 {
        return Ok(if matrix.row_count() > 0 {
            None
        } else {
            Some(Vec::new())
        });
    }

    let heads = matrix.head_ctors(registry);
    let missing = missing_ctors(&heads, registry);

    if missing.is_empty() {
        // Complete signature: every value starts with one of the observed
        // constructors, so the match is exhaustive iff every branch is.
        for ctor in &heads {
            let specialized = matrix.specialize(ctor, registry);
            let sub_width = ctor.arity() + width - 1;
            if let Some(tail) =
                find_witness_at(&specialized, sub_width, registry, depth + 1)?
            {
                return Ok(Some(rebuild_witness(ctor, tail, width)));
            }
        }
        Ok(None)
    } else {
        // Incomplete signature: values of a missing constructor fall
        // through to the irrefutable rows alone.
        match find_witness_at(&matrix.default_matrix(), width - 1, registry, depth + 1)? {
            None => Ok(None),
            Some(tail) => {
                let witness = if heads.is_empty() {
                    // No concrete constructor was ever listed in this
                    // column, so any value at all is a witness head.
                    let mut w = Vec::with_capacity(width);
                    w.push(Ctor::Wildcard);
                    w.extend(tail);
                    w
                } else {
                    rebuild_witness(&missing[0], tail, width)
                };
                Ok(Some(witness))
            }
        }
    }
}

/// Prepend `ctor` (with its arguments folded back out of `tail`) onto the
/// remaining witness columns.
fn rebuild_witness(ctor: &Ctor, tail: Vec<Ctor>, width: usize) -> Vec<Ctor> {
    let (head, rest) = rebuild_pattern(ctor, tail);
    let mut witness = Vec::with_capacity(width);
    witness.push(head);
    witness.extend(rest);
    witness
}

/// Fold a flat witness tail back into nested shape under `ctor`.
///
/// A composite constructor consumes its first `arity` tail elements as
/// arguments; if the tail runs short (the branch for a missing constructor
/// was never explored to its full arity) the remaining slots are padded
/// with wildcards. Leaf constructors pass through, consuming nothing.
pub fn rebuild_pattern(ctor: &Ctor, mut tail: Vec<Ctor>) -> (Ctor, Vec<Ctor>) {
    match ctor {
        Ctor::Tuple(elems) => {
            let args = take_args(&mut tail, elems.len());
            (Ctor::Tuple(args), tail)
        }
        Ctor::EnumCase {
            case,
            enum_id,
            arity,
            ..
        } => {
            let args = take_args(&mut tail, *arity);
            (
                Ctor::EnumCase {
                    case: case.clone(),
                    enum_id: enum_id.clone(),
                    arity: *arity,
                    args,
                },
                tail,
            )
        }
        leaf => (leaf.clone(), tail),
    }
}

/// Remove the first `count` elements of `tail` as constructor arguments,
/// padding with wildcards on shortfall.
fn take_args(tail: &mut Vec<Ctor>, count: usize) -> Vec<Ctor> {
    let take = count.min(tail.len());
    let mut args: Vec<Ctor> = tail.drain(..take).collect();
    args.resize(count, Ctor::Wildcard);
    args
}
