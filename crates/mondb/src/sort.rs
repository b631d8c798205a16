//! Stable, direction-aware sorting.
//!
//! [`sort`] reorders a slice in place using a "less than" comparison and a
//! [`Dir`]. Descending order swaps the comparator's arguments instead of
//! reversing the ascending result, so records that compare equal keep their
//! original relative order in both directions. That is what lets callers
//! chain sorts: sort by name, then by size, and each size group stays in
//! name order.
//!
//! The merge sort here works on a permutation of indices and never assumes
//! the comparator is well behaved. A comparator that is not a strict weak
//! ordering produces an unspecified order, but always a permutation of the
//! input and never a panic.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Returns `true` iff `a` sorts strictly before `b` in ascending order.
///
/// Must behave like a strict weak ordering for the result to be meaningful.
pub type CompareFn<T> = fn(&T, &T) -> bool;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// One sort key: a comparator and the direction to apply it in.
pub struct OrderBy<T> {
    /// The "less than" comparator.
    pub compare: CompareFn<T>,
    /// The sort direction.
    pub dir: Dir,
}

impl<T> OrderBy<T> {
    /// Creates a new ordering with the given direction.
    pub fn new(compare: CompareFn<T>, dir: Dir) -> Self {
        OrderBy { compare, dir }
    }

    /// Creates a new ascending ordering.
    pub fn asc(compare: CompareFn<T>) -> Self {
        OrderBy::new(compare, Dir::Asc)
    }

    /// Creates a new descending ordering.
    pub fn desc(compare: CompareFn<T>) -> Self {
        OrderBy::new(compare, Dir::Desc)
    }

    /// Compares two records under this key, direction applied.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.dir.apply(ordering_of(self.compare, a, b))
    }
}

impl<T> Clone for OrderBy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OrderBy<T> {}

impl<T> fmt::Debug for OrderBy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBy")
            .field("compare", &(self.compare as *const ()))
            .field("dir", &self.dir)
            .finish()
    }
}

/// Turns a "less than" comparator into a three-way [`Ordering`].
pub fn ordering_of<T>(less: impl Fn(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sorts `records` in place by `less`, in direction `dir`.
///
/// The sort is stable for both directions.
///
/// # Example
///
/// ```
/// use mondb::{sort, Dir};
///
/// let mut words = vec!["bb", "a", "cc", "d"];
/// sort(&mut words, |a: &&str, b: &&str| a.len() < b.len(), Dir::Desc);
/// assert_eq!(words, ["bb", "cc", "a", "d"]);
/// ```
pub fn sort<T, F>(records: &mut [T], less: F, dir: Dir)
where
    F: Fn(&T, &T) -> bool,
{
    tracing::debug!(len = records.len(), %dir, "sorting records");
    match dir {
        Dir::Asc => stable_sort(records, |a, b| less(a, b)),
        Dir::Desc => stable_sort(records, |a, b| less(b, a)),
    }
}

/// Sorts `records` in place by several keys in one stable pass.
///
/// The first key is primary; later keys only break ties. Records equal
/// under every key keep their original order. With no keys the slice is
/// left untouched.
pub fn sort_by_keys<T>(records: &mut [T], keys: &[OrderBy<T>]) {
    if keys.is_empty() {
        return;
    }
    tracing::debug!(len = records.len(), keys = keys.len(), "sorting records by keys");
    stable_sort(records, |a, b| compare_by_keys(a, b, keys) == Ordering::Less);
}

/// Compares two records using a list of keys.
///
/// Uses the first key as the primary sort key, the second to break ties,
/// etc. If all keys compare equal, returns `Equal`.
pub fn compare_by_keys<T>(a: &T, b: &T, keys: &[OrderBy<T>]) -> Ordering {
    keys.iter()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Bottom-up merge sort over indices, then one in-place permutation.
///
/// `before(a, b)` must return `true` only when `a` has to move ahead of `b`.
/// Ties take the left run first, which is what makes the sort stable.
fn stable_sort<T, F>(records: &mut [T], before: F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = records.len();
    if len < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = vec![0; len];
    let mut width = 1;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(
                &order[start..mid],
                &order[mid..end],
                &mut merged[start..end],
                |right, left| before(&records[right], &records[left]),
            );
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    permute(records, order);
}

fn merge<F>(left: &[usize], right: &[usize], out: &mut [usize], mut right_first: F)
where
    F: FnMut(usize, usize) -> bool,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_right =
            j < right.len() && (i == left.len() || right_first(right[j], left[i]));
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

/// Moves `records[order[k]]` to position `k` for every `k`, following cycles.
fn permute<T>(records: &mut [T], mut order: Vec<usize>) {
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start {
                break;
            }
            records.swap(current, next);
            current = next;
        }
    }
}
