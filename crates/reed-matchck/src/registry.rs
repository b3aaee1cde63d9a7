//! Read-only enum declaration table.
//!
//! The registry is populated by earlier pipeline phases (one entry per enum
//! declaration, cases in declaration order) and frozen before any match is
//! checked. Declaration order matters: it decides which missing case a
//! non-exhaustiveness witness reports first.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Identity of an enum declaration.
///
/// Two tag patterns denote cases of the same enum iff their ids are equal.
/// The id wraps the enum's fully-resolved name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EnumId(String);

impl EnumId {
    pub fn new(name: impl Into<String>) -> Self {
        EnumId(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The declared payload shape of an enum case.
///
/// Determines how many pattern columns the case contributes when a match
/// discriminates on it: a unit payload contributes none, an N-tuple payload
/// contributes one per element, and any other payload type is a single
/// column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Payload {
    /// No payload (`Color.Red`).
    Unit,
    /// A tuple payload of the given width (`Shape.Rect(Float, Float)`).
    Tuple(usize),
    /// Any single non-tuple payload (`Option.Some(a)`).
    Single,
}

impl Payload {
    /// Number of pattern columns this payload projects to.
    pub fn arity(self) -> usize {
        match self {
            Payload::Unit => 0,
            Payload::Tuple(n) => n,
            Payload::Single => 1,
        }
    }
}

/// One declared case of an enum: its name and projected arity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseDef {
    pub name: String,
    pub arity: usize,
}

impl CaseDef {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        CaseDef {
            name: name.into(),
            arity: payload.arity(),
        }
    }
}

/// All enum declarations visible to the checker.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    defs: FxHashMap<EnumId, Vec<CaseDef>>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enum's cases, in declaration order. Called only while
    /// the table is being populated, before checking starts.
    pub fn define(&mut self, id: EnumId, cases: Vec<CaseDef>) {
        self.defs.insert(id, cases);
    }

    /// The declared cases of an enum, in declaration order.
    pub fn cases_of(&self, id: &EnumId) -> Option<&[CaseDef]> {
        self.defs.get(id).map(|cases| cases.as_slice())
    }

    /// The projected arity of one case of an enum.
    pub fn case_arity(&self, id: &EnumId, case: &str) -> Option<usize> {
        self.cases_of(id)?
            .iter()
            .find(|c| c.name == case)
            .map(|c| c.arity)
    }
}
