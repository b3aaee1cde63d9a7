//! The pattern matrix and its two shrinking transformations.
//!
//! A matrix holds one row per match rule, each row one pattern per open
//! scrutinee position. The engine shrinks it in exactly two ways:
//! specialization (commit to one concrete constructor, expanding its
//! arguments into new columns) and the default matrix (keep only rows that
//! match without inspecting the head at all). Both preserve row order.

use crate::classify::{classify, expand_payload};
use crate::ctor::Ctor;
use crate::pat::Pat;
use crate::registry::EnumRegistry;

/// An ordered matrix of pattern rows, all of equal width.
#[derive(Clone, Debug)]
pub struct PatMatrix {
    rows: Vec<Vec<Pat>>,
}

impl PatMatrix {
    pub fn new(rows: Vec<Vec<Pat>>) -> Self {
        debug_assert!(
            rows.windows(2).all(|w| w[0].len() == w[1].len()),
            "all matrix rows must share one width"
        );
        PatMatrix { rows }
    }

    /// Build the initial one-column matrix from a match's rule patterns.
    pub fn from_rules(rules: &[Pat]) -> Self {
        PatMatrix {
            rows: rules.iter().map(|p| vec![p.clone()]).collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Pat>] {
        &self.rows
    }

    /// The distinct concrete constructors observed at the head column, in
    /// row order. Irrefutable heads contribute nothing to the signature.
    pub fn head_ctors(&self, registry: &EnumRegistry) -> Vec<Ctor> {
        let mut heads: Vec<Ctor> = Vec::new();
        for row in &self.rows {
            let Some(head) = row.first() else { continue };
            if head.is_irrefutable() {
                continue;
            }
            let ctor = classify(head, registry);
            if !heads.iter().any(|seen| seen.same_ctor(&ctor)) {
                heads.push(ctor);
            }
        }
        heads
    }

    /// Narrow to the rows consistent with `ctor`, expanding its arguments
    /// into new leading columns. The result is `arity(ctor) - 1` columns
    /// wider than `self`.
    pub fn specialize(&self, ctor: &Ctor, registry: &EnumRegistry) -> PatMatrix {
        let mut rows = Vec::new();
        for row in &self.rows {
            let Some((head, tail)) = row.split_first() else {
                continue;
            };
            match head {
                // An irrefutable head is consistent with every constructor:
                // stand a wildcard in for each argument slot.
                Pat::Wildcard | Pat::Var(_) => {
                    let mut new_row = vec![Pat::Wildcard; ctor.arity()];
                    new_row.extend_from_slice(tail);
                    rows.push(new_row);
                }
                Pat::Tag {
                    enum_id,
                    case,
                    payload,
                } => {
                    if let Ctor::EnumCase {
                        case: want_case,
                        enum_id: want_id,
                        arity,
                        ..
                    } = ctor
                    {
                        if case == want_case && enum_id == want_id {
                            let mut new_row = expand_payload(payload, *arity);
                            new_row.extend_from_slice(tail);
                            rows.push(new_row);
                        }
                    }
                }
                Pat::Tuple(elems) => {
                    if matches!(ctor, Ctor::Tuple(_)) {
                        let mut new_row = elems.clone();
                        new_row.extend_from_slice(tail);
                        rows.push(new_row);
                    }
                }
                // Leaf literals: arity 0, so a retained row just loses its
                // head column. Scalar literal classes compare value-blind,
                // but scalar constructors are never specialized on (their
                // signature is never complete).
                leaf => {
                    if classify(leaf, registry).same_ctor(ctor) {
                        rows.push(tail.to_vec());
                    }
                }
            }
        }
        PatMatrix::new(rows)
    }

    /// Narrow to the rows whose head is irrefutable, dropping the head
    /// column. The result is one column narrower than `self`.
    pub fn default_matrix(&self) -> PatMatrix {
        let rows = self
            .rows
            .iter()
            .filter_map(|row| {
                let (head, tail) = row.split_first()?;
                head.is_irrefutable().then(|| tail.to_vec())
            })
            .collect();
        PatMatrix::new(rows)
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
        reg
    }

    fn tag(case: &str, payload: Pat) -> Pat {
        Pat::Tag {
            enum_id: EnumId::new("Option"),
            case: case.to_string(),
            payload: Box::new(payload),
        }
    }

    fn some_ctor() -> Ctor {
        Ctor::EnumCase {
            case: "Some".into(),
            enum_id: EnumId::new("Option"),
            arity: 1,
            args: vec![],
        }
    }

    #[test]
    fn head_ctors_skip_wildcards_and_dedup() {
        let reg = registry();
        let m = PatMatrix::from_rules(&[
            Pat::Bool(true),
            Pat::Wildcard,
            Pat::Bool(true),
            Pat::Bool(false),
        ]);
        assert_eq!(m.head_ctors(&reg), vec![Ctor::True, Ctor::False]);
    }

    #[test]
    fn head_ctors_collapse_literal_classes() {
        let reg = registry();
        let int = |v: &str| Pat::Num {
            value: v.into(),
            kind: crate::pat::NumKind::Int64,
        };
        let m = PatMatrix::from_rules(&[int("0"), int("1"), int("2")]);
        assert_eq!(m.head_ctors(&reg), vec![Ctor::Int64]);
    }

    #[test]
    fn specialize_keeps_matching_tags_and_wildcards() {
        let reg = registry();
        let m = PatMatrix::from_rules(&[
            tag("Some", Pat::Bool(true)),
            tag("None", Pat::Unit),
            Pat::Wildcard,
        ]);
        let spec = m.specialize(&some_ctor(), &reg);
        // Some(true) -> [true]; None dropped; _ -> [_].
        assert_eq!(
            spec.rows(),
            &[vec![Pat::Bool(true)], vec![Pat::Wildcard]]
        );
    }

    #[test]
    fn specialize_expands_tuple_elements() {
        let reg = registry();
        let m = PatMatrix::from_rules(&[
            Pat::Tuple(vec![Pat::Bool(true), Pat::Bool(false)]),
            Pat::Wildcard,
        ]);
        let shape = Ctor::Tuple(vec![Ctor::True, Ctor::False]);
        let spec = m.specialize(&shape, &reg);
        assert_eq!(
            spec.rows(),
            &[
                vec![Pat::Bool(true), Pat::Bool(false)],
                vec![Pat::Wildcard, Pat::Wildcard],
            ]
        );
    }

    #[test]
    fn specialize_drops_leaf_mismatches() {
        let reg = registry();
        let m = PatMatrix::from_rules(&[Pat::Bool(true), Pat::Bool(false)]);
        let spec = m.specialize(&Ctor::True, &reg);
        assert_eq!(spec.rows(), &[Vec::<Pat>::new()]);
    }

    #[test]
    fn default_matrix_keeps_only_irrefutable_heads() {
        let m = PatMatrix::new(vec![
            vec![Pat::Bool(true), Pat::Unit],
            vec![Pat::Wildcard, Pat::Bool(false)],
            vec![Pat::Var("x".into()), Pat::Bool(true)],
        ]);
        let def = m.default_matrix();
        assert_eq!(
            def.rows(),
            &[vec![Pat::Bool(false)], vec![Pat::Bool(true)]]
        );
    }
}
