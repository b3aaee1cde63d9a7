//! Typed patterns as seen by the match checker.
//!
//! These are produced by the front end after name resolution and type
//! checking: tags carry their resolved enum identity, literals carry their
//! inferred numeric kind, and arities are already consistent with the
//! declarations in the [`EnumRegistry`](crate::registry::EnumRegistry).
//! The checker only reads them.

use serde::Serialize;

use crate::registry::EnumId;

/// The inferred kind of a numeric literal pattern.
///
/// Kinds are never unified with each other: a well-typed match mixes
/// literals of exactly one kind per column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NumKind {
    BigInt,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

/// A type-checked pattern from a match rule's left-hand side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Pat {
    /// `_` -- matches anything, binds nothing.
    Wildcard,
    /// A variable binding. Matches anything; the name is irrelevant here.
    Var(String),
    /// The unit literal `()`.
    Unit,
    /// `true` or `false`.
    Bool(bool),
    /// A numeric literal with its inferred kind. The text is kept verbatim
    /// for diagnostics; the checker never interprets the value.
    Num { value: String, kind: NumKind },
    /// A string literal.
    Str(String),
    /// A character literal.
    Char(char),
    /// An enum case applied to its payload pattern. A payload-less case
    /// carries [`Pat::Unit`].
    Tag {
        enum_id: EnumId,
        case: String,
        payload: Box<Pat>,
    },
    /// A tuple of sub-patterns.
    Tuple(Vec<Pat>),
}

impl Pat {
    /// Whether this pattern matches every value of its type without
    /// inspecting it (`_` or a variable binding).
    pub fn is_irrefutable(&self) -> bool {
        matches!(self, Pat::Wildcard | Pat::Var(_))
    }
}

/// The derived destructor would recurse once per nesting level through the
/// `Tag` payload chain, so a pathologically deep pattern could overflow the
/// native stack on drop. Detach children onto an explicit worklist instead.
impl Drop for Pat {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_children(self, &mut detached);
        while let Some(mut pat) = detached.pop() {
            detach_children(&mut pat, &mut detached);
        }
    }
}

fn detach_children(pat: &mut Pat, out: &mut Vec<Pat>) {
    match pat {
        Pat::Tag { payload, .. } => {
            out.push(std::mem::replace(payload.as_mut(), Pat::Wildcard));
        }
        Pat::Tuple(elems) => out.append(elems),
        _ => {}
    }
}
