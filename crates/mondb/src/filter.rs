//! Predicate filtering.

use std::borrow::Cow;

/// Keeps the records matching `predicate`, in their original order.
///
/// With no predicate the input comes back as-is, borrowed. With a predicate
/// the result is always a new owned vector, empty when nothing matches, so
/// "no filter" and "filtered down to nothing" stay distinguishable.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use mondb::filter;
///
/// let levels = [3, 58, 12, 71];
///
/// let high = filter(&levels, Some(&|lv: &i32| *lv > 50));
/// assert_eq!(*high, [58, 71]);
///
/// let all = filter(&levels, None);
/// assert!(matches!(all, Cow::Borrowed(_)));
///
/// let none = filter(&levels, Some(&|_: &i32| false));
/// assert!(matches!(none, Cow::Owned(ref v) if v.is_empty()));
/// ```
pub fn filter<'a, T>(records: &'a [T], predicate: Option<&dyn Fn(&T) -> bool>) -> Cow<'a, [T]>
where
    T: Clone,
{
    let Some(predicate) = predicate else {
        return Cow::Borrowed(records);
    };

    let matched: Vec<T> = records
        .iter()
        .filter(|record| predicate(record))
        .cloned()
        .collect();
    tracing::debug!(input = records.len(), matched = matched.len(), "filtered records");
    Cow::Owned(matched)
}
