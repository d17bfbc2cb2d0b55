//! The concrete sum-type family, `Sum2` through `Sum8`.
//!
//! Every member is produced by one [`define_sum!`](super::engine) invocation.
//! Channels are always named `First`, `Second`, ..., with the final channel
//! called `Last` regardless of arity, so `Sum2` has `First`/`Last` and
//! `Sum8` runs `First` through `Seventh` plus `Last`.

use super::engine::define_sum;

define_sum! {
    /// A two-channel tagged union.
    ///
    /// The smallest member of the family; `Maybe` and `Validation` are
    /// conventionally-named wrappers over this arity.
    Sum2, Sum2FutureExt {
        First / first : T1,
        Last / last : T2,
    }
}

define_sum! {
    /// A three-channel tagged union.
    Sum3, Sum3FutureExt {
        First / first : T1,
        Second / second : T2,
        Last / last : T3,
    }
}

define_sum! {
    /// A four-channel tagged union.
    Sum4, Sum4FutureExt {
        First / first : T1,
        Second / second : T2,
        Third / third : T3,
        Last / last : T4,
    }
}

define_sum! {
    /// A five-channel tagged union.
    Sum5, Sum5FutureExt {
        First / first : T1,
        Second / second : T2,
        Third / third : T3,
        Fourth / fourth : T4,
        Last / last : T5,
    }
}

define_sum! {
    /// A six-channel tagged union.
    Sum6, Sum6FutureExt {
        First / first : T1,
        Second / second : T2,
        Third / third : T3,
        Fourth / fourth : T4,
        Fifth / fifth : T5,
        Last / last : T6,
    }
}

define_sum! {
    /// A seven-channel tagged union.
    Sum7, Sum7FutureExt {
        First / first : T1,
        Second / second : T2,
        Third / third : T3,
        Fourth / fourth : T4,
        Fifth / fifth : T5,
        Sixth / sixth : T6,
        Last / last : T7,
    }
}

define_sum! {
    /// An eight-channel tagged union, the widest member of the family.
    Sum8, Sum8FutureExt {
        First / first : T1,
        Second / second : T2,
        Third / third : T3,
        Fourth / fourth : T4,
        Fifth / fifth : T5,
        Sixth / sixth : T6,
        Seventh / seventh : T7,
        Last / last : T8,
    }
}

// Auto-trait pins: the unions add no synchronization or interior
// mutability of their own.
static_assertions::assert_impl_all!(Sum2<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Sum8<u8, u16, u32, u64, i8, i16, i32, i64>: Send, Sync, Copy);
