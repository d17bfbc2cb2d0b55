//! Validated values with error accumulation.
//!
//! [`Validation<T, E>`] is the second conventional two-channel
//! specialization: the `First` channel holds a success value, the `Last`
//! channel holds one or more accumulated errors. It differs from a plain
//! `Result` in two ways: the failure channel is a non-empty collection,
//! and [`zip_with`](Validation::zip_with) combines two validations while
//! accumulating the errors of *both* failures instead of short-circuiting
//! on the first.
//!
//! The only place in the whole crate where a substitute value is ever
//! supplied is [`fallback_to`](Validation::fallback_to) and its thunk
//! forms: a failure is replaced by the fallback, while a success is
//! returned untouched and the fallback is never invoked or awaited.
//!
//! # Examples
//!
//! ```rust
//! use polysum::validation::Validation;
//!
//! fn positive(n: i32) -> Validation<i32, String> {
//!     if n > 0 {
//!         Validation::success(n)
//!     } else {
//!         Validation::failure(format!("{n} is not positive"))
//!     }
//! }
//!
//! let combined = positive(-1).zip_with(positive(-2), |a, b| a + b);
//! assert_eq!(
//!     combined.failure_errors(),
//!     Some(vec!["-1 is not positive".to_string(), "-2 is not positive".to_string()])
//! );
//!
//! let recovered = positive(-1).fallback_to(Validation::success(42));
//! assert_eq!(recovered, Validation::success(42));
//! ```

use std::fmt;

use crate::union::Sum2;

/// A success value or a non-empty collection of accumulated errors.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Validation<T, E>(Sum2<T, Vec<E>>);

impl<T, E> Validation<T, E> {
    /// Lifts a value into the success channel.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self(Sum2::First(value))
    }

    /// Constructs a failure carrying a single error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self(Sum2::Last(vec![error]))
    }

    /// Constructs a failure carrying the given errors.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty: a failure always carries at least one
    /// error.
    #[inline]
    pub fn failures(errors: Vec<E>) -> Self {
        assert!(
            !errors.is_empty(),
            "Validation::failures requires at least one error"
        );
        Self(Sum2::Last(errors))
    }

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.0.is_first()
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.0.is_last()
    }

    /// Consumes the validation, returning the success value if present.
    #[inline]
    pub fn success_value(self) -> Option<T> {
        self.0.first()
    }

    /// Consumes the validation, returning the accumulated errors if this
    /// is a failure.
    #[inline]
    pub fn failure_errors(self) -> Option<Vec<E>> {
        self.0.last()
    }

    /// Transforms the success value, passing failures through untouched.
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Validation(self.0.map_first(transform))
    }

    /// Transforms each accumulated error, passing successes through
    /// untouched.
    #[inline]
    pub fn map_errors<E2, F>(self, mut transform: F) -> Validation<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        Validation(
            self.0
                .map_last(|errors| errors.into_iter().map(&mut transform).collect()),
        )
    }

    /// Chains a continuation on the success channel.
    ///
    /// Unlike [`zip_with`](Self::zip_with) this short-circuits: an
    /// existing failure passes through and the continuation never runs.
    #[inline]
    pub fn and_then<U, F>(self, continuation: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        Validation(self.0.bind_first(|value| continuation(value).0))
    }

    /// Total elimination: exactly one of the two handlers runs.
    #[inline]
    pub fn fold<Out, OnSuccess, OnFailure>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> Out
    where
        OnSuccess: FnOnce(T) -> Out,
        OnFailure: FnOnce(Vec<E>) -> Out,
    {
        self.0.fold(on_success, on_failure)
    }

    /// Combines two validations, accumulating errors.
    ///
    /// Both successes combine through `combine`; if either side failed,
    /// the result is a failure carrying the errors of every failed side,
    /// in order, and `combine` never runs.
    pub fn zip_with<U, V, F>(self, other: Validation<U, E>, combine: F) -> Validation<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self.0, other.0) {
            (Sum2::First(left), Sum2::First(right)) => Validation::success(combine(left, right)),
            (Sum2::First(_), Sum2::Last(errors)) | (Sum2::Last(errors), Sum2::First(_)) => {
                Validation(Sum2::Last(errors))
            }
            (Sum2::Last(mut left), Sum2::Last(right)) => {
                left.extend(right);
                Validation(Sum2::Last(left))
            }
        }
    }

    /// Replaces a failure with the supplied fallback.
    ///
    /// A success is returned untouched; the fallback (and its errors, if
    /// it is itself a failure) only ever surfaces in the failure case.
    #[inline]
    pub fn fallback_to(self, fallback: Self) -> Self {
        match self.0 {
            Sum2::First(value) => Self::success(value),
            Sum2::Last(_) => fallback,
        }
    }

    /// Replaces a failure with the result of the supplied thunk.
    ///
    /// The thunk receives the accumulated errors and runs only in the
    /// failure case; a success is returned untouched.
    #[inline]
    pub fn fallback_with<F>(self, fallback: F) -> Self
    where
        F: FnOnce(Vec<E>) -> Self,
    {
        match self.0 {
            Sum2::First(value) => Self::success(value),
            Sum2::Last(errors) => fallback(errors),
        }
    }

    /// Converts into a standard [`Result`], consuming the validation.
    #[inline]
    pub fn into_result(self) -> Result<T, Vec<E>> {
        self.fold(Ok, Err)
    }
}

#[cfg(feature = "async")]
impl<T, E> Validation<T, E> {
    /// Suspension-based [`map`](Self::map). Suspends only on success.
    pub async fn map_async<U, F, Fut>(self, transform: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: std::future::Future<Output = U>,
    {
        Validation(self.0.map_first_async(transform).await)
    }

    /// Suspension-based [`and_then`](Self::and_then). Suspends only on
    /// success.
    pub async fn and_then_async<U, F, Fut>(self, continuation: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: std::future::Future<Output = Validation<U, E>>,
    {
        match self.0 {
            Sum2::First(value) => continuation(value).await,
            Sum2::Last(errors) => Validation(Sum2::Last(errors)),
        }
    }

    /// Suspension-based [`fallback_with`](Self::fallback_with).
    ///
    /// The thunk's future is created and awaited only in the failure
    /// case; a success completes without suspending.
    pub async fn fallback_with_async<F, Fut>(self, fallback: F) -> Self
    where
        F: FnOnce(Vec<E>) -> Fut,
        Fut: std::future::Future<Output = Self>,
    {
        match self.0 {
            Sum2::First(value) => Self::success(value),
            Sum2::Last(errors) => fallback(errors).await,
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Validation<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Sum2::First(value) => formatter.debug_tuple("Success").field(value).finish(),
            Sum2::Last(errors) => formatter.debug_tuple("Failure").field(errors).finish(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    /// Converts a `Result`, lifting an `Err` into a single-error failure.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Validation<T, E>> for Result<T, Vec<E>> {
    #[inline]
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_result()
    }
}
