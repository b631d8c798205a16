//! Clause operators.

use std::cmp::Ordering;

/// How a clause compares a monster field with its value.
///
/// Which operators can ever match depends on the field's shape:
///
/// | Field | Operators |
/// |-------|-----------|
/// | name, element label | `Eq`, `Ne`, `StartsWith`, `EndsWith`, `Contains`, `Regex` |
/// | stats, thresholds, per-HP ratios | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` |
/// | property, race, size, class | `Eq`, `Ne`, `In` |
/// | boss | `Eq`, `Ne`, `Is` |
///
/// Any other pairing is accepted when building a query and simply never
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    StartsWith,
    EndsWith,
    Contains,
    Regex,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Code is one of a set.
    In,
    /// Same as `Eq`; reads better on flags (`boss is true`).
    Is,
}

impl Op {
    /// Folds `Is` into `Eq`.
    pub(crate) fn canonical(self) -> Op {
        match self {
            Op::Is => Op::Eq,
            op => op,
        }
    }

    /// Whether `field.cmp(value)` coming out as `ordering` satisfies this
    /// operator. Text and set operators never hold.
    pub(crate) fn holds(self, ordering: Ordering) -> bool {
        match self.canonical() {
            Op::Eq => ordering.is_eq(),
            Op::Ne => ordering.is_ne(),
            Op::Gt => ordering.is_gt(),
            Op::Gte => ordering.is_ge(),
            Op::Lt => ordering.is_lt(),
            Op::Lte => ordering.is_le(),
            _ => false,
        }
    }
}
