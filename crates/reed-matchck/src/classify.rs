//! Mapping typed patterns onto constructors.
//!
//! `classify` gives every pattern node its head constructor, recursing into
//! tuple elements and tag payloads. Variable bindings classify as wildcards:
//! they match anything and pin down no constructor.

use crate::ctor::Ctor;
use crate::pat::{NumKind, Pat};
use crate::registry::EnumRegistry;

/// Classify a well-typed pattern into its constructor.
///
/// Total over well-typed input. Tag arity is taken from the enum's
/// declaration, so a wildcard payload over a tuple-payload case still
/// projects to the declared number of argument slots.
pub fn classify(pat: &Pat, registry: &EnumRegistry) -> Ctor {
    match pat {
        Pat::Wildcard | Pat::Var(_) => Ctor::Wildcard,
        Pat::Unit => Ctor::Unit,
        Pat::Bool(true) => Ctor::True,
        Pat::Bool(false) => Ctor::False,
        Pat::Num { kind, .. } => match kind {
            NumKind::BigInt => Ctor::BigInt,
            NumKind::Int8 => Ctor::Int8,
            NumKind::Int16 => Ctor::Int16,
            NumKind::Int32 => Ctor::Int32,
            NumKind::Int64 => Ctor::Int64,
            NumKind::Float32 => Ctor::Float32,
            NumKind::Float64 => Ctor::Float64,
        },
        Pat::Str(_) => Ctor::Str,
        Pat::Char(_) => Ctor::Char,
        Pat::Tuple(elems) => {
            Ctor::Tuple(elems.iter().map(|e| classify(e, registry)).collect())
        }
        Pat::Tag {
            enum_id,
            case,
            payload,
        } => {
            let arity = registry.case_arity(enum_id, case).unwrap_or_else(|| {
                // A tag naming an undeclared case cannot survive type
                // checking; fall back to the payload's surface shape.
                debug_assert!(false, "unknown case `{case}` of enum `{enum_id}`");
                shape_arity(payload)
            });
            let args = expand_payload(payload, arity)
                .iter()
                .map(|p| classify(p, registry))
                .collect();
            Ctor::EnumCase {
                case: case.clone(),
                enum_id: enum_id.clone(),
                arity,
                args,
            }
        }
    }
}

/// Project a tag's payload pattern into `arity` argument columns.
///
/// Unit payloads contribute no columns, tuple payloads one per element, a
/// single payload one. An irrefutable payload stands in for every slot.
/// Shared between classification and matrix specialization so both agree
/// on column counts.
pub(crate) fn expand_payload(payload: &Pat, arity: usize) -> Vec<Pat> {
    match payload {
        Pat::Wildcard | Pat::Var(_) => vec![Pat::Wildcard; arity],
        Pat::Unit if arity == 0 => Vec::new(),
        Pat::Tuple(elems) if elems.len() == arity => elems.clone(),
        single => {
            debug_assert_eq!(
                arity, 1,
                "payload shape disagrees with declared arity {arity}"
            );
            vec![single.clone()]
        }
    }
}

/// Arity derived from a payload pattern's surface shape alone. Only used
/// when the declaration lookup fails on malformed input.
fn shape_arity(payload: &Pat) -> usize {
    match payload {
        Pat::Unit => 0,
        Pat::Tuple(elems) => elems.len(),
        _ => 1,
    }
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
        reg.define(
            EnumId::new("Shape"),
            vec![
                CaseDef::new("Rect", Payload::Tuple(2)),
                CaseDef::new("Point", Payload::Unit),
            ],
        );
        reg
    }

    fn tag(enum_name: &str, case: &str, payload: Pat) -> Pat {
        Pat::Tag {
            enum_id: EnumId::new(enum_name),
            case: case.to_string(),
            payload: Box::new(payload),
        }
    }

    #[test]
    fn irrefutable_patterns_are_wildcards() {
        let reg = registry();
        assert_eq!(classify(&Pat::Wildcard, &reg), Ctor::Wildcard);
        assert_eq!(classify(&Pat::Var("x".into()), &reg), Ctor::Wildcard);
    }

    #[test]
    fn literals_map_one_to_one() {
        let reg = registry();
        assert_eq!(classify(&Pat::Bool(true), &reg), Ctor::True);
        assert_eq!(classify(&Pat::Bool(false), &reg), Ctor::False);
        assert_eq!(classify(&Pat::Unit, &reg), Ctor::Unit);
        assert_eq!(classify(&Pat::Str("hi".into()), &reg), Ctor::Str);
        assert_eq!(classify(&Pat::Char('a'), &reg), Ctor::Char);
        assert_eq!(
            classify(
                &Pat::Num {
                    value: "42".into(),
                    kind: NumKind::Int32,
                },
                &reg,
            ),
            Ctor::Int32
        );
    }

    #[test]
    fn tuple_recurses_into_elements() {
        let reg = registry();
        let pat = Pat::Tuple(vec![Pat::Bool(true), Pat::Wildcard]);
        assert_eq!(
            classify(&pat, &reg),
            Ctor::Tuple(vec![Ctor::True, Ctor::Wildcard])
        );
    }

    #[test]
    fn unit_payload_case_has_no_args() {
        let reg = registry();
        let ctor = classify(&tag("Option", "None", Pat::Unit), &reg);
        assert_eq!(
            ctor,
            Ctor::EnumCase {
                case: "None".into(),
                enum_id: EnumId::new("Option"),
                arity: 0,
                args: vec![],
            }
        );
    }

    #[test]
    fn single_payload_becomes_one_arg() {
        let reg = registry();
        let ctor = classify(&tag("Option", "Some", Pat::Bool(true)), &reg);
        assert_eq!(ctor.arity(), 1);
        match ctor {
            Ctor::EnumCase { args, .. } => assert_eq!(args, vec![Ctor::True]),
            other => panic!("expected enum case, got {other:?}"),
        }
    }

    #[test]
    fn tuple_payload_projects_to_declared_width() {
        let reg = registry();
        let pat = tag(
            "Shape",
            "Rect",
            Pat::Tuple(vec![Pat::Wildcard, Pat::Bool(false)]),
        );
        let ctor = classify(&pat, &reg);
        assert_eq!(ctor.arity(), 2);
        match ctor {
            Ctor::EnumCase { args, .. } => {
                assert_eq!(args, vec![Ctor::Wildcard, Ctor::False]);
            }
            other => panic!("expected enum case, got {other:?}"),
        }
    }

    #[test]
    fn wildcard_payload_fills_every_slot() {
        let reg = registry();
        let ctor = classify(&tag("Shape", "Rect", Pat::Wildcard), &reg);
        assert_eq!(ctor.arity(), 2);
        match ctor {
            Ctor::EnumCase { args, .. } => {
                assert_eq!(args, vec![Ctor::Wildcard, Ctor::Wildcard]);
            }
            other => panic!("expected enum case, got {other:?}"),
        }
    }
}
