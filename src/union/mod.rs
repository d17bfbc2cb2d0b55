//! Arity-polymorphic tagged unions and their operation algebra.
//!
//! This module provides the sum-type family [`Sum2`] through [`Sum8`]:
//! N-channel tagged unions in which exactly one channel is occupied at any
//! time. Every member carries the same uniform algebra:
//!
//! - **map** (`map_first` .. `map_last`): transform one channel's payload,
//!   pass every other channel through untouched;
//! - **bind** (`bind_first` ..): chain a continuation on one channel; the
//!   continuation's result becomes the whole result, so it may redirect
//!   the pipeline to any channel;
//! - **fold**: total elimination into one output type, one handler per
//!   channel, exhaustive by construction;
//! - **inspect** (`inspect_first` ..): run a side effect on one channel's
//!   payload by reference, returning the original union unchanged;
//! - **perform**: inspect with up to N optional actions, at most one of
//!   which runs.
//!
//! With the `async` feature each operation also has a suspension-based
//! `*_async` form (caller-supplied functions return futures, awaited only
//! on the matching channel) and a deferred-input form on the
//! [`Sum2FutureExt`]..[`Sum8FutureExt`] adapter traits, which resolve a
//! `Future` of a union and then delegate.
//!
//! Unions are immutable values: every operation consumes `self` and
//! returns either a freshly constructed union or the original moved back
//! out. No operation ever reads or fabricates a payload for a channel
//! other than the one it targets, and faults in caller-supplied functions
//! unwind to the caller untouched.
//!
//! # Examples
//!
//! ```rust
//! use polysum::union::{Sum2, Sum3};
//!
//! // Construction is the channel entry point: the tag comes from which
//! // variant was built, never from inspecting the value.
//! let number: Sum2<i32, String> = Sum2::First(5);
//!
//! // Map transforms only the matching channel.
//! let doubled = number.map_first(|x| x * 2);
//! assert_eq!(doubled, Sum2::First(10));
//!
//! // A non-matching map is a pass-through.
//! let same = doubled.map_last(|s: String| s.len());
//! assert_eq!(same, Sum2::First(10));
//!
//! // Bind may redirect to any channel of the result shape.
//! let report: Sum3<i32, String, bool> = Sum3::Second("err".to_string());
//! let redirected = report.bind_second(|s| {
//!     if s.is_empty() {
//!         Sum3::Second(s)
//!     } else {
//!         Sum3::Last(true)
//!     }
//! });
//! assert_eq!(redirected, Sum3::Last(true));
//!
//! // Fold eliminates totally: one handler per channel, exactly one runs.
//! let summary = redirected.fold(
//!     |n| format!("number {n}"),
//!     |s| format!("text {s}"),
//!     |b| format!("flag {b}"),
//! );
//! assert_eq!(summary, "flag true");
//! ```

mod engine;
mod sums;

pub use sums::{Sum2, Sum3, Sum4, Sum5, Sum6, Sum7, Sum8};

#[cfg(feature = "async")]
pub use sums::{
    Sum2FutureExt, Sum3FutureExt, Sum4FutureExt, Sum5FutureExt, Sum6FutureExt, Sum7FutureExt,
    Sum8FutureExt,
};
