//! Field values handed to clauses.
//!
//! Monster fields come in four shapes: text (name, element label), integer
//! stats, per-HP ratios, and feed codes (property, race, size, class). A
//! [`Value`] carries one of them, borrowed from the record where it can be.

use std::cmp::Ordering;

/// The value of one monster field, as seen by a clause.
///
/// ```
/// use mondb::{Monster, Number, Queryable, Value};
///
/// let mut alarm = Monster::default();
/// alarm.name = "Alarm".into();
/// alarm.stats.level = 58;
///
/// assert_eq!(alarm.field_value(Monster::NAME), Value::String("Alarm"));
/// assert_eq!(alarm.field_value(Monster::LEVEL), Value::Number(Number::Int(58)));
/// assert_eq!(alarm.field_value(Monster::PROPERTY), Value::Code(0));
/// assert_eq!(alarm.field_value(Monster::BASE_EXP_PER_HP), Value::None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    /// A feed code, compared by identity only.
    Code(i32),
    Bool(bool),
    /// Unknown field, or a metric with no value (per-HP ratio at zero HP).
    None,
}

/// An integer stat or a floating point ratio.
///
/// Comparisons between the two are exact: an `i64` stat is never rounded
/// through `f64` before comparing against a ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Ratio(f64),
}

impl Number {
    /// Compares two numbers. `None` when a NaN ratio is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Ratio(a), Number::Ratio(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Ratio(b)) => int_vs_ratio(a, b),
            (Number::Ratio(a), Number::Int(b)) => int_vs_ratio(b, a).map(Ordering::reverse),
        }
    }
}

// 2^63, the first f64 above every i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn int_vs_ratio(int: i64, ratio: f64) -> Option<Ordering> {
    if ratio.is_nan() {
        return None;
    }
    if ratio >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if ratio < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    // In [-2^63, 2^63) and integral, so the cast is exact.
    let whole = ratio.floor();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal if ratio > whole => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(i64::from(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Ratio(n)
    }
}
