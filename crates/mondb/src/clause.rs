//! Clause types for query predicates.
//!
//! A [`Clause`] is a single filter predicate: a field name, an operator,
//! and a comparison value.

use regex::Regex;

use crate::codes::{Classification, Property, Race, Size};
use crate::op::Op;
use crate::value::{Number, Value};

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use mondb::{Clause, Monster, Op, Property, Value};
///
/// let clause = Clause::new(Monster::PROPERTY, Op::Eq, Property::Neutral3);
/// assert!(clause.matches(&Value::Code(60)));
/// assert!(!clause.matches(&Value::Code(20)));
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Type mismatches and missing fields never match, whatever the operator.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(pattern), Value::String(s)) => self.match_text(s, pattern),
            (ClauseValue::Regex(regex), Value::String(s)) => {
                self.op == Op::Regex && regex.is_match(s)
            }
            (ClauseValue::Number(wanted), Value::Number(actual)) => actual
                .compare(*wanted)
                .is_some_and(|ordering| self.op.holds(ordering)),
            (ClauseValue::Code(wanted), Value::Code(actual)) => {
                self.match_identity(actual == wanted)
            }
            (ClauseValue::CodeSet(set), Value::Code(actual)) => {
                self.op == Op::In && set.contains(actual)
            }
            (ClauseValue::Bool(wanted), Value::Bool(actual)) => {
                self.match_identity(actual == wanted)
            }
            _ => false,
        }
    }

    fn match_text(&self, field: &str, pattern: &str) -> bool {
        match self.op {
            Op::Eq | Op::Is => field == pattern,
            Op::Ne => field != pattern,
            Op::StartsWith => field.starts_with(pattern),
            Op::EndsWith => field.ends_with(pattern),
            Op::Contains => field.contains(pattern),
            _ => false,
        }
    }

    // Codes and flags have no order, only equality.
    fn match_identity(&self, equal: bool) -> bool {
        match self.op.canonical() {
            Op::Eq => equal,
            Op::Ne => !equal,
            _ => false,
        }
    }
}

/// Owned value stored in a clause.
#[derive(Debug, Clone)]
pub enum ClauseValue {
    /// String value.
    String(String),
    /// Numeric value.
    Number(Number),
    /// Single feed code.
    Code(i32),
    /// Set of feed codes (for `In`).
    CodeSet(Vec<i32>),
    /// Boolean value.
    Bool(bool),
    /// Compiled regular expression.
    Regex(Regex),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<Regex> for ClauseValue {
    fn from(r: Regex) -> Self {
        ClauseValue::Regex(r)
    }
}

impl From<i32> for ClauseValue {
    fn from(n: i32) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<Vec<i32>> for ClauseValue {
    fn from(v: Vec<i32>) -> Self {
        ClauseValue::CodeSet(v)
    }
}

impl From<Property> for ClauseValue {
    fn from(p: Property) -> Self {
        ClauseValue::Code(p.code())
    }
}

impl From<Race> for ClauseValue {
    fn from(r: Race) -> Self {
        ClauseValue::Code(r.code())
    }
}

impl From<Size> for ClauseValue {
    fn from(s: Size) -> Self {
        ClauseValue::Code(s.code())
    }
}

impl From<Classification> for ClauseValue {
    fn from(c: Classification) -> Self {
        ClauseValue::Code(c.code())
    }
}
