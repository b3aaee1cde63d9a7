//! The constructor vocabulary of the match checker.
//!
//! Every pattern, and every value a pattern could fail to cover, is modeled
//! as a constructor: a shape with a fixed number of argument slots. The set
//! is closed; exhaustive matches over [`Ctor`] below are themselves checked
//! by rustc, which is exactly the property this crate implements for Reed.

use std::fmt;
use std::mem;

use serde::Serialize;

use crate::registry::EnumId;

/// A constructor: the outermost shape of a pattern or witness value.
///
/// The scalar variants (`BigInt` through `Char`) stand for the whole class
/// of literals of that kind, not any particular value. They only ever occur
/// at the head of a matrix column; a witness for an uncovered scalar is
/// always [`Ctor::Wildcard`], because no finite literal set exhausts an
/// infinite domain.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Ctor {
    True,
    False,
    Unit,
    Tuple(Vec<Ctor>),
    BigInt,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Str,
    Char,
    /// Matches anything; arity 0. Never part of a signature -- it appears
    /// only as a witness placeholder or as the classification of an
    /// irrefutable pattern.
    Wildcard,
    /// A named enum case. `args` is either empty (not yet reconstructed)
    /// or exactly `arity` long.
    EnumCase {
        case: String,
        enum_id: EnumId,
        arity: usize,
        args: Vec<Ctor>,
    },
}

impl Ctor {
    /// Number of argument columns this constructor contributes when a
    /// matrix is specialized on it.
    pub fn arity(&self) -> usize {
        match self {
            Ctor::Tuple(args) => args.len(),
            Ctor::EnumCase { arity, .. } => *arity,
            _ => 0,
        }
    }

    /// Whether `self` and `other` denote the same constructor.
    ///
    /// Enum cases compare by (case, enum id); argument contents are witness
    /// payload, not identity. Everything else compares by variant alone:
    /// two `Int64` literal heads are the same constructor regardless of
    /// value, and literal classes of different kinds are never unified.
    pub fn same_ctor(&self, other: &Ctor) -> bool {
        match (self, other) {
            (
                Ctor::EnumCase {
                    case: a,
                    enum_id: a_id,
                    ..
                },
                Ctor::EnumCase {
                    case: b,
                    enum_id: b_id,
                    ..
                },
            ) => a == b && a_id == b_id,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

/// Witness rendering: the text shown in a non-exhaustiveness diagnostic.
impl fmt::Display for Ctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ctor::True => write!(f, "true"),
            Ctor::False => write!(f, "false"),
            Ctor::Unit => write!(f, "()"),
            Ctor::Tuple(args) => {
                write!(f, "(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", a)?;
                }
                write!(f, ")")
            }
            // A scalar class in witness position stands for "some literal
            // of this kind"; print it as a hole, like a wildcard.
            Ctor::BigInt
            | Ctor::Int8
            | Ctor::Int16
            | Ctor::Int32
            | Ctor::Int64
            | Ctor::Float32
            | Ctor::Float64
            | Ctor::Str
            | Ctor::Char
            | Ctor::Wildcard => write!(f, "_"),
            Ctor::EnumCase { case, args, .. } => {
                if args.is_empty() {
                    write!(f, "{}", case)
                } else {
                    write!(f, "{}(", case)?;
                    for (i, a) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", a)?;
                    }
                    write!(f, ")")
                }
            }
        }
    }
}
