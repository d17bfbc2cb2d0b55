//! Linear-search helpers over sequences.
//!
//! Thin collaborators on top of [`Maybe`]: scan any `IntoIterator` for the
//! first or last element satisfying a predicate. A null source is
//! unrepresentable here; the receiver is always a concrete iterator.

use crate::maybe::Maybe;

/// Returns the first element of `source` satisfying `predicate`, or
/// `nothing` if no element matches.
///
/// The scan stops at the first match; elements after it are not visited.
///
/// # Examples
///
/// ```rust
/// use polysum::maybe::Maybe;
/// use polysum::sequence::first_matching;
///
/// let found = first_matching(vec![1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(found, Maybe::just(2));
///
/// let missing = first_matching(vec![1, 3], |n| n % 2 == 0);
/// assert_eq!(missing, Maybe::nothing());
/// ```
pub fn first_matching<I, P>(source: I, mut predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in source {
        if predicate(&item) {
            return Maybe::just(item);
        }
    }
    Maybe::nothing()
}

/// Returns the last element of `source` satisfying `predicate`, or
/// `nothing` if no element matches.
///
/// The whole sequence is scanned once; later matches replace earlier
/// ones.
///
/// # Examples
///
/// ```rust
/// use polysum::maybe::Maybe;
/// use polysum::sequence::last_matching;
///
/// let found = last_matching(vec![1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(found, Maybe::just(4));
/// ```
pub fn last_matching<I, P>(source: I, mut predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut found = Maybe::nothing();
    for item in source {
        if predicate(&item) {
            found = Maybe::just(item);
        }
    }
    found
}
