//! Signature completeness: which constructors are still missing.
//!
//! Given the constructors observed at the head of a matrix, decide whether
//! they form a complete signature for their type, and if not, enumerate the
//! missing ones. The enumeration order is stable -- `true` before `false`,
//! enum cases in declaration order -- so witness choice is deterministic.

use crate::ctor::Ctor;
use crate::registry::EnumRegistry;

/// The constructors of the head column's domain not present in `heads`.
///
/// Empty result means the signature is complete. The domain is read off the
/// first observed head (well-typed input keeps a column homogeneous):
///
/// - booleans need both literals;
/// - unit and tuples have a single shape, complete once observed;
/// - enums are checked against their declared case list;
/// - scalar literal domains are infinite -- no literal set completes them,
///   so the only "missing constructor" ever reported is a wildcard.
///
/// An empty head set also reports `[Wildcard]`: nothing has been observed,
/// so nothing is covered.
pub fn missing_ctors(heads: &[Ctor], registry: &EnumRegistry) -> Vec<Ctor> {
    let Some(first) = heads.first() else {
        return vec![Ctor::Wildcard];
    };
    match first {
        Ctor::True | Ctor::False => [Ctor::True, Ctor::False]
            .into_iter()
            .filter(|c| !observed(heads, c))
            .collect(),
        Ctor::Unit => Vec::new(),
        // A tuple type has exactly one constructor shape; completeness of
        // its elements is the engine's job via specialization.
        Ctor::Tuple(_) => Vec::new(),
        Ctor::EnumCase { enum_id, .. } => match registry.cases_of(enum_id) {
            Some(cases) => cases
                .iter()
                .map(|c| Ctor::EnumCase {
                    case: c.name.clone(),
                    enum_id: enum_id.clone(),
                    arity: c.arity,
                    args: Vec::new(),
                })
                .filter(|c| !observed(heads, c))
                .collect(),
            None => {
                // Undeclared enum in head position means earlier phases
                // failed us; treat the domain as uncoverable by literals.
                debug_assert!(false, "enum `{enum_id}` not in registry");
                vec![Ctor::Wildcard]
            }
        },
        Ctor::BigInt
        | Ctor::Int8
        | Ctor::Int16
        | Ctor::Int32
        | Ctor::Int64
        | Ctor::Float32
        | Ctor::Float64
        | Ctor::Str
        | Ctor::Char => vec![Ctor::Wildcard],
        Ctor::Wildcard => {
            // head_ctors never yields wildcards.
            debug_assert!(false, "wildcard can not be a signature member");
            vec![Ctor::Wildcard]
        }
    }
}

fn observed(heads: &[Ctor], ctor: &Ctor) -> bool {
    heads.iter().any(|h| h.same_ctor(ctor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CaseDef, EnumId, Payload};

    fn registry() -> EnumRegistry {
        let mut reg = EnumRegistry::new();
        reg.define(
            EnumId::new("Option"),
            vec![
                CaseDef::new("Some", Payload::Single),
                CaseDef::new("None", Payload::Unit),
            ],
        );
        reg
    }

    fn some_head() -> Ctor {
        Ctor::EnumCase {
            case: "Some".into(),
            enum_id: EnumId::new("Option"),
            arity: 1,
            args: vec![Ctor::True],
        }
    }

    #[test]
    fn empty_heads_report_wildcard() {
        assert_eq!(missing_ctors(&[], &registry()), vec![Ctor::Wildcard]);
    }

    #[test]
    fn bool_needs_both_literals() {
        let reg = registry();
        assert_eq!(missing_ctors(&[Ctor::True], &reg), vec![Ctor::False]);
        assert_eq!(missing_ctors(&[Ctor::False], &reg), vec![Ctor::True]);
        assert!(missing_ctors(&[Ctor::True, Ctor::False], &reg).is_empty());
    }

    #[test]
    fn unit_and_tuple_complete_once_seen() {
        let reg = registry();
        assert!(missing_ctors(&[Ctor::Unit], &reg).is_empty());
        assert!(missing_ctors(&[Ctor::Tuple(vec![Ctor::Wildcard])], &reg).is_empty());
    }

    #[test]
    fn enum_missing_cases_in_declaration_order() {
        let reg = registry();
        let missing = missing_ctors(&[some_head()], &reg);
        assert_eq!(missing.len(), 1);
        match &missing[0] {
            Ctor::EnumCase { case, arity, args, .. } => {
                assert_eq!(case, "None");
                assert_eq!(*arity, 0);
                assert!(args.is_empty());
            }
            other => panic!("expected enum case, got {other:?}"),
        }
    }

    #[test]
    fn enum_complete_when_all_cases_seen() {
        let reg = registry();
        let none_head = Ctor::EnumCase {
            case: "None".into(),
            enum_id: EnumId::new("Option"),
            arity: 0,
            args: vec![],
        };
        assert!(missing_ctors(&[some_head(), none_head], &reg).is_empty());
    }

    #[test]
    fn scalar_literals_never_complete() {
        let reg = registry();
        for head in [Ctor::BigInt, Ctor::Int32, Ctor::Float64, Ctor::Str, Ctor::Char] {
            assert_eq!(missing_ctors(&[head], &reg), vec![Ctor::Wildcard]);
        }
    }
}
