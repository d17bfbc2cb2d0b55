//! # polysum
//!
//! Arity-polymorphic tagged unions (2..8 channels) with a uniform
//! operation algebra in synchronous and suspension-based forms.
//!
//! ## Overview
//!
//! The core of the crate is the sum-type family [`union::Sum2`] through
//! [`union::Sum8`]: N-channel tagged unions whose channels are named
//! `First`, `Second`, ..., `Last`. Exactly one channel is occupied at any
//! time, and every member carries the same algebra:
//!
//! - **Map**: transform one channel's payload, pass every other channel
//!   through untouched;
//! - **Bind**: chain a continuation on one channel, with full redirection
//!   to any channel of the result;
//! - **Fold**: total elimination with one handler per channel, exhaustive
//!   at compile time;
//! - **Inspect / Perform**: side-effecting observation with pass-through.
//!
//! With the `async` feature every operation also exists in a `*_async`
//! form (caller-supplied functions return futures, awaited only on the
//! matching channel) and on the `SumNFutureExt` adapter traits that accept
//! a deferred union as input.
//!
//! On top of the core sit two conventional two-channel specializations,
//! [`maybe::Maybe`] and [`validation::Validation`], plus the linear-search
//! helpers in [`sequence`].
//!
//! ## Feature Flags
//!
//! - `async`: suspension-based operation forms and the deferred-input
//!   adapter traits (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for the sums and specializations
//!
//! ## Example
//!
//! ```rust
//! use polysum::prelude::*;
//!
//! let value: Sum2<i32, String> = Sum2::First(5);
//! let result = value
//!     .map_first(|x| x * 2)
//!     .bind_first(|x| if x > 5 { Sum2::Last(format!("big: {x}")) } else { Sum2::First(x) })
//!     .fold(|x| x.to_string(), |s| s);
//! assert_eq!(result, "big: 10");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sum family, the adapter traits, and the
/// specializations.
///
/// # Usage
///
/// ```rust
/// use polysum::prelude::*;
/// ```
pub mod prelude {
    pub use crate::marker::Unit;
    pub use crate::maybe::Maybe;
    pub use crate::sequence::{first_matching, last_matching};
    pub use crate::union::*;
    pub use crate::validation::Validation;
}

pub mod marker;
pub mod maybe;
pub mod sequence;
pub mod union;
pub mod validation;
