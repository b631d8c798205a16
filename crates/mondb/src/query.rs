//! Query builder and executor.
//!
//! A [`Query`] holds field clauses and sort keys. Running it filters with
//! [`filter`](crate::filter) and then sorts the survivors with
//! [`sort_by_keys`](crate::sort_by_keys), so it inherits both engines'
//! guarantees: original order among matches, stable ordering among ties.

use std::borrow::Cow;

use regex::Regex;

use crate::clause::{Clause, ClauseValue};
use crate::compare::{OrderKey, SortKey};
use crate::error::Result;
use crate::filter::filter;
use crate::monster::Monster;
use crate::op::Op;
use crate::sort::{sort_by_keys, CompareFn, Dir, OrderBy};
use crate::traits::Queryable;

/// A query for filtering and ordering record collections.
///
/// Queries consist of three clause groups:
/// - **AND**: All clauses must match
/// - **OR**: At least one clause must match (or none if empty)
/// - **NOT**: No clause may match
///
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
///       ∧ (no NOT clause matches)
/// ```
///
/// # Example
///
/// ```
/// use mondb::{Dir, Monster, Query, Race, SortKey};
///
/// let query = Query::<Monster>::new()
///     .and_gte(Monster::LEVEL, 50)
///     .or_eq(Monster::RACE, Race::Formless)
///     .or_eq(Monster::RACE, Race::DemiHuman)
///     .not_eq(Monster::BOSS, true)
///     .order_key(SortKey::BaseExpPerHp, Dir::Desc)
///     .order_key(SortKey::Name, Dir::Asc);
///
/// let monsters: Vec<Monster> = Vec::new();
/// assert!(query.run(&monsters).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Query<T> {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
    orderings: Vec<OrderBy<T>>,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Query {
            and_clauses: Vec::new(),
            or_clauses: Vec::new(),
            not_clauses: Vec::new(),
            orderings: Vec::new(),
        }
    }
}

impl<T> Query<T> {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items and leaves their order alone.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Generic clause builders
    // ========================================================================

    /// Adds an AND clause.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an OR clause.
    pub fn or(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds a NOT clause.
    pub fn not(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.not_clauses.push(Clause::new(field, op, value));
        self
    }

    // ========================================================================
    // AND shorthand methods
    // ========================================================================

    /// Adds an AND equality clause.
    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds an AND not-equal clause.
    pub fn and_ne(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Ne, value)
    }

    /// Adds an AND greater-than clause.
    pub fn and_gt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gt, value)
    }

    /// Adds an AND greater-than-or-equal clause.
    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    /// Adds an AND less-than clause.
    pub fn and_lt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lt, value)
    }

    /// Adds an AND less-than-or-equal clause.
    pub fn and_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lte, value)
    }

    /// Adds an AND contains clause (substring match).
    pub fn and_contains(self, field: &str, value: &str) -> Self {
        self.and(field, Op::Contains, value)
    }

    /// Adds an AND starts-with clause.
    pub fn and_startswith(self, field: &str, value: &str) -> Self {
        self.and(field, Op::StartsWith, value)
    }

    /// Adds an AND regex clause.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn and_regex(self, field: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.and(field, Op::Regex, regex))
    }

    /// Adds an AND in-set clause for enum codes.
    pub fn and_in<I>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<i32>,
    {
        let set: Vec<i32> = values.into_iter().map(Into::into).collect();
        self.and(field, Op::In, set)
    }

    // ========================================================================
    // OR shorthand methods
    // ========================================================================

    /// Adds an OR equality clause.
    pub fn or_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Eq, value)
    }

    /// Adds an OR greater-than-or-equal clause.
    pub fn or_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Gte, value)
    }

    /// Adds an OR less-than-or-equal clause.
    pub fn or_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Lte, value)
    }

    /// Adds an OR contains clause.
    pub fn or_contains(self, field: &str, value: &str) -> Self {
        self.or(field, Op::Contains, value)
    }

    /// Adds an OR regex clause.
    pub fn or_regex(self, field: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.or(field, Op::Regex, regex))
    }

    // ========================================================================
    // NOT shorthand methods
    // ========================================================================

    /// Adds a NOT equality clause.
    pub fn not_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Eq, value)
    }

    /// Adds a NOT contains clause.
    pub fn not_contains(self, field: &str, value: &str) -> Self {
        self.not(field, Op::Contains, value)
    }

    /// Adds a NOT in-set clause.
    pub fn not_in<I>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<i32>,
    {
        let set: Vec<i32> = values.into_iter().map(Into::into).collect();
        self.not(field, Op::In, set)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Adds a sort key. Earlier keys take priority over later ones.
    pub fn order_by(mut self, compare: CompareFn<T>, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(compare, dir));
        self
    }

    /// Adds an ascending sort key.
    pub fn order_asc(self, compare: CompareFn<T>) -> Self {
        self.order_by(compare, Dir::Asc)
    }

    /// Adds a descending sort key.
    pub fn order_desc(self, compare: CompareFn<T>) -> Self {
        self.order_by(compare, Dir::Desc)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the AND clauses.
    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    /// Returns the OR clauses.
    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    /// Returns the NOT clauses.
    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    /// Returns the sort keys.
    pub fn orderings(&self) -> &[OrderBy<T>] {
        &self.orderings
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }
}

impl<T: Queryable> Query<T> {
    /// Tests if a single item matches this query.
    pub fn matches(&self, item: &T) -> bool {
        let and_pass = self
            .and_clauses
            .iter()
            .all(|clause| clause.matches(&item.field_value(&clause.field)));
        if !and_pass {
            return false;
        }

        let or_pass = self.or_clauses.is_empty()
            || self
                .or_clauses
                .iter()
                .any(|clause| clause.matches(&item.field_value(&clause.field)));
        if !or_pass {
            return false;
        }

        !self
            .not_clauses
            .iter()
            .any(|clause| clause.matches(&item.field_value(&clause.field)))
    }

    /// Filters and sorts `items`.
    ///
    /// A query without clauses and without sort keys hands the input back
    /// borrowed. Otherwise the result is owned: matches in original order,
    /// then stably sorted by the sort keys.
    pub fn run<'a>(&self, items: &'a [T]) -> Cow<'a, [T]>
    where
        T: Clone,
    {
        let predicate = |item: &T| self.matches(item);
        let predicate: Option<&dyn Fn(&T) -> bool> = if self.is_empty() {
            None
        } else {
            Some(&predicate)
        };

        let mut results = filter(items, predicate);
        if !self.orderings.is_empty() {
            sort_by_keys(results.to_mut(), &self.orderings);
        }
        tracing::debug!(
            input = items.len(),
            output = results.len(),
            clauses = self.and_clauses.len() + self.or_clauses.len() + self.not_clauses.len(),
            keys = self.orderings.len(),
            "ran query"
        );
        results
    }

    /// Keeps only matching items, in place. Does not sort.
    pub fn retain(&self, items: &mut Vec<T>) {
        items.retain(|item| self.matches(item));
    }

    /// Counts the number of matching items.
    pub fn count(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(item)).count()
    }

    /// Returns `true` if any item matches.
    pub fn any(&self, items: &[T]) -> bool {
        items.iter().any(|item| self.matches(item))
    }

    /// Finds the first matching item in input order.
    pub fn find<'a>(&self, items: &'a [T]) -> Option<&'a T> {
        items.iter().find(|item| self.matches(item))
    }
}

impl Query<Monster> {
    /// Adds a sort key from the monster comparator catalog.
    pub fn order_key(self, key: SortKey, dir: Dir) -> Self {
        self.order_by(key.compare_fn(), dir)
    }

    /// Adds parsed or deserialized sort keys, in priority order.
    pub fn order_keys(mut self, keys: impl IntoIterator<Item = OrderKey>) -> Self {
        self.orderings.extend(keys.into_iter().map(OrderKey::order_by));
        self
    }
}
