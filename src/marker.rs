//! The zero-information marker type.

use std::fmt;

/// A type with exactly one value, used where a signature requires a
/// payload that carries no information.
///
/// [`Maybe`](crate::maybe::Maybe) stores a `Unit` in its absent channel so
/// that the channel has a payload type without pretending to hold data.
/// Unlike `()`, `Unit` is a nameable local type that can implement or
/// derive whatever the sum algebra needs.
///
/// # Examples
///
/// ```rust
/// use polysum::marker::Unit;
/// use polysum::union::Sum2;
///
/// let absent: Sum2<i32, Unit> = Sum2::Last(Unit);
/// assert!(absent.is_last());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl fmt::Debug for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Unit")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}
