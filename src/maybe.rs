//! Optional values as a two-channel sum.
//!
//! [`Maybe<T>`] is the conventional two-channel specialization of the sum
//! family: the `First` channel holds a present value, the `Last` channel
//! holds the zero-information marker [`Unit`]. Every operation delegates
//! to the [`Sum2`] algebra, so the pass-through and exactly-once
//! guarantees are inherited rather than re-implemented.
//!
//! # Examples
//!
//! ```rust
//! use polysum::maybe::Maybe;
//!
//! let present = Maybe::just(5);
//! let doubled = present.map(|x| x * 2);
//! assert_eq!(doubled, Maybe::just(10));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.map(|x| x * 2), Maybe::nothing());
//!
//! let described = doubled.fold(|x| format!("got {x}"), || "empty".to_string());
//! assert_eq!(described, "got 10");
//! ```

use std::fmt;

use crate::marker::Unit;
use crate::union::Sum2;

/// An optional value: either `just` a `T` or `nothing`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maybe<T>(Sum2<T, Unit>);

impl<T> Maybe<T> {
    /// Lifts a value into the present channel.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self(Sum2::First(value))
    }

    /// Constructs the absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self(Sum2::Last(Unit))
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        self.0.is_first()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.0.is_last()
    }

    /// Transforms the present value, passing `nothing` through untouched.
    ///
    /// `transform` runs at most once, and only when a value is present.
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe(self.0.map_first(transform))
    }

    /// Chains a continuation on the present channel.
    ///
    /// The continuation's result is the whole result, so it may produce
    /// `nothing` and short-circuit the rest of a pipeline.
    #[inline]
    pub fn and_then<U, F>(self, continuation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        Maybe(self.0.bind_first(|value| continuation(value).0))
    }

    /// Total elimination: exactly one of the two handlers runs.
    #[inline]
    pub fn fold<Out, OnJust, OnNothing>(self, on_just: OnJust, on_nothing: OnNothing) -> Out
    where
        OnJust: FnOnce(T) -> Out,
        OnNothing: FnOnce() -> Out,
    {
        self.0.fold(on_just, |Unit| on_nothing())
    }

    /// Runs `action` on the present value by reference, returning the
    /// original unchanged whether or not the action ran.
    #[inline]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        Self(self.0.inspect_first(action))
    }

    /// Returns the present value or the supplied default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.fold(|value| value, || default)
    }

    /// Returns the present value or computes one from the thunk.
    ///
    /// The thunk runs only in the absent case.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(|value| value, default)
    }

    /// Converts into a standard [`Option`], consuming the value.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0.first()
    }
}

#[cfg(feature = "async")]
impl<T> Maybe<T> {
    /// Suspension-based [`map`](Self::map). Suspends only when a value is
    /// present.
    pub async fn map_async<U, F, Fut>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: std::future::Future<Output = U>,
    {
        Maybe(self.0.map_first_async(transform).await)
    }

    /// Suspension-based [`and_then`](Self::and_then). Suspends only when a
    /// value is present.
    pub async fn and_then_async<U, F, Fut>(self, continuation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: std::future::Future<Output = Maybe<U>>,
    {
        match self.0 {
            Sum2::First(value) => continuation(value).await,
            Sum2::Last(Unit) => Maybe::nothing(),
        }
    }

    /// Suspension-based [`fold`](Self::fold). Only the selected handler's
    /// future is created and awaited.
    pub async fn fold_async<Out, OnJust, OnNothing, FutJust, FutNothing>(
        self,
        on_just: OnJust,
        on_nothing: OnNothing,
    ) -> Out
    where
        OnJust: FnOnce(T) -> FutJust,
        OnNothing: FnOnce() -> FutNothing,
        FutJust: std::future::Future<Output = Out>,
        FutNothing: std::future::Future<Output = Out>,
    {
        self.0.fold_async(on_just, |Unit| on_nothing()).await
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.first_ref() {
            Some(value) => formatter.debug_tuple("Just").field(value).finish(),
            None => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or_else(Self::nothing, Self::just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn just_is_present() {
        let value = Maybe::just(42);
        assert!(value.is_just());
        assert!(!value.is_nothing());
    }

    #[rstest]
    fn option_conversion_round_trip() {
        let some: Maybe<i32> = Some(42).into();
        assert_eq!(Option::from(some), Some(42));

        let none: Maybe<i32> = None.into();
        assert_eq!(Option::<i32>::from(none), None);
    }
}
