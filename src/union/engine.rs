//! Macro engine generating the sum-type family.
//!
//! One `define_sum!` invocation produces a complete N-channel union: the
//! enum itself, channel predicates and extractors, the per-channel
//! map/bind/inspect operations in synchronous and suspension-based forms,
//! the total `fold` eliminator, the optional-action `perform` inspector,
//! and the future-extension trait that lifts the whole algebra onto
//! deferred unions. Adding an arity is a single invocation in `sums.rs`.

/// Generates one member of the sum-type family.
///
/// Channels are listed in order as `Variant / method_stem : TypeParam`.
/// The recursive `@channels` rules walk the list with a before/after split
/// so each channel's operations can name the output type with only that
/// channel's type parameter replaced. The `@ext` rules accumulate the same
/// method set into the future-extension trait, which is emitted once at
/// the end of the recursion.
macro_rules! define_sum {
    (
        $(#[$meta:meta])*
        $name:ident, $ext:ident {
            $( $variant:ident / $method:ident : $ty:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
        pub enum $name<$($ty),+> {
            $(
                #[doc = concat!(
                    "Channel `", stringify!($variant),
                    "`, holding a payload of type `", stringify!($ty), "`."
                )]
                $variant($ty),
            )+
        }

        impl<$($ty: ::std::fmt::Debug),+> ::std::fmt::Debug for $name<$($ty),+> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(
                        Self::$variant(value) => {
                            formatter.debug_tuple(stringify!($variant)).field(value).finish()
                        }
                    )+
                }
            }
        }

        ::paste::paste! {
            impl<$($ty),+> $name<$($ty),+> {
                $(
                    #[doc = concat!(
                        "Returns `true` if the `", stringify!($variant),
                        "` channel is occupied."
                    )]
                    #[inline]
                    pub const fn [<is_ $method>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }

                    #[doc = concat!(
                        "Consumes the union, returning the `", stringify!($variant),
                        "` payload if that channel is occupied."
                    )]
                    #[inline]
                    pub fn $method(self) -> Option<$ty> {
                        match self {
                            Self::$variant(value) => Some(value),
                            _ => None,
                        }
                    }

                    #[doc = concat!(
                        "Borrows the `", stringify!($variant),
                        "` payload if that channel is occupied."
                    )]
                    #[inline]
                    pub const fn [<$method _ref>](&self) -> Option<&$ty> {
                        match self {
                            Self::$variant(value) => Some(value),
                            _ => None,
                        }
                    }
                )+

                /// Total elimination: applies the handler whose channel matches
                /// the tag and returns its result.
                ///
                /// Exactly one handler runs. Supplying a handler for every
                /// channel is enforced by this signature, so exhaustiveness is
                /// checked at compile time rather than at run time.
                #[allow(clippy::too_many_arguments)]
                #[inline]
                pub fn fold<Out, $([<On $variant>]),+>(
                    self,
                    $([<on_ $method>]: [<On $variant>]),+
                ) -> Out
                where
                    $([<On $variant>]: FnOnce($ty) -> Out,)+
                {
                    match self {
                        $(Self::$variant(value) => [<on_ $method>](value),)+
                    }
                }

                /// Suspension-based [`fold`](Self::fold).
                ///
                /// Only the matching handler's future is created and awaited;
                /// the other handlers are neither called nor scheduled.
                #[cfg(feature = "async")]
                #[allow(clippy::too_many_arguments)]
                pub async fn fold_async<Out, $([<On $variant>], [<Fut $variant>]),+>(
                    self,
                    $([<on_ $method>]: [<On $variant>]),+
                ) -> Out
                where
                    $(
                        [<On $variant>]: FnOnce($ty) -> [<Fut $variant>],
                        [<Fut $variant>]: ::std::future::Future<Output = Out>,
                    )+
                {
                    match self {
                        $(Self::$variant(value) => [<on_ $method>](value).await,)+
                    }
                }

                /// Runs at most one of the supplied optional actions, the one
                /// whose channel matches the tag, then returns the union
                /// unchanged either way. Every slot may be `None`.
                #[allow(clippy::too_many_arguments)]
                pub fn perform<$([<On $variant>]),+>(
                    self,
                    $([<on_ $method>]: Option<[<On $variant>]>),+
                ) -> Self
                where
                    $([<On $variant>]: FnOnce(&$ty),)+
                {
                    match &self {
                        $(
                            Self::$variant(value) => {
                                if let Some(action) = [<on_ $method>] {
                                    action(value);
                                }
                            }
                        )+
                    }
                    self
                }

                /// Suspension-based [`perform`](Self::perform).
                ///
                /// Suspends only when a matching action exists and runs;
                /// otherwise completes without awaiting anything.
                #[cfg(feature = "async")]
                #[allow(clippy::too_many_arguments)]
                pub async fn perform_async<$([<On $variant>], [<Fut $variant>]),+>(
                    self,
                    $([<on_ $method>]: Option<[<On $variant>]>),+
                ) -> Self
                where
                    $(
                        [<On $variant>]: FnOnce(&$ty) -> [<Fut $variant>],
                        [<Fut $variant>]: ::std::future::Future<Output = ()>,
                    )+
                {
                    match &self {
                        $(
                            Self::$variant(value) => {
                                if let Some(action) = [<on_ $method>] {
                                    action(value).await;
                                }
                            }
                        )+
                    }
                    self
                }
            }
        }

        define_sum! { @channels $name [$($ty),+] [] $(($variant, $method, $ty))+ }

        #[cfg(feature = "async")]
        define_sum! { @ext $name $ext [$($ty),+] {} [] $(($variant, $method, $ty))+ }
    };

    // ------------------------------------------------------------------
    // Per-channel inherent operations, generated with a before/after split
    // of the channel list around the current channel.
    // ------------------------------------------------------------------

    (@channels $name:ident [$($all:ident),+] [$(($bv:ident, $bm:ident, $bt:ident))*]) => {};

    (@channels $name:ident [$($all:ident),+]
        [$(($bv:ident, $bm:ident, $bt:ident))*]
        ($cv:ident, $cm:ident, $ct:ident)
        $(($av:ident, $am:ident, $at:ident))*
    ) => {
        define_sum! { @channel $name [$($all),+]
            [$(($bv, $bm, $bt))*] ($cv, $cm, $ct) [$(($av, $am, $at))*]
        }
        define_sum! { @channels $name [$($all),+]
            [$(($bv, $bm, $bt))* ($cv, $cm, $ct)] $(($av, $am, $at))*
        }
    };

    (@channel $name:ident [$($all:ident),+]
        [$(($bv:ident, $bm:ident, $bt:ident))*]
        ($cv:ident, $cm:ident, $ct:ident)
        [$(($av:ident, $am:ident, $at:ident))*]
    ) => {
        ::paste::paste! {
            impl<$($all),+> $name<$($all),+> {
                #[doc = concat!(
                    "Transforms the `", stringify!($cv), "` payload with `transform`, ",
                    "leaving every other channel's payload untouched.\n\n",
                    "`transform` runs at most once, and only when the `",
                    stringify!($cv), "` channel is occupied; otherwise the union ",
                    "passes through re-typed for the new channel type."
                )]
                #[inline]
                pub fn [<map_ $cm>]<U, F>(self, transform: F) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> U,
                {
                    match self {
                        Self::$cv(value) => $name::$cv(transform(value)),
                        $(Self::$bv(value) => $name::$bv(value),)*
                        $(Self::$av(value) => $name::$av(value),)*
                    }
                }

                #[doc = concat!(
                    "Suspension-based [`map_", stringify!($cm), "`](Self::map_", stringify!($cm), "). ",
                    "The transform's future is created and awaited only when the `",
                    stringify!($cv), "` channel is occupied; the mismatch path never suspends."
                )]
                #[cfg(feature = "async")]
                pub async fn [<map_ $cm _async>]<U, F, Fut>(
                    self,
                    transform: F,
                ) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> Fut,
                    Fut: ::std::future::Future<Output = U>,
                {
                    match self {
                        Self::$cv(value) => $name::$cv(transform(value).await),
                        $(Self::$bv(value) => $name::$bv(value),)*
                        $(Self::$av(value) => $name::$av(value),)*
                    }
                }

                #[doc = concat!(
                    "Chains a continuation on the `", stringify!($cv), "` channel.\n\n",
                    "When the `", stringify!($cv), "` channel is occupied, the ",
                    "continuation's result *is* the result, whatever channel it ",
                    "carries, so a continuation may redirect the pipeline to any ",
                    "other channel. On a mismatch the continuation never runs and ",
                    "the union passes through re-typed."
                )]
                #[inline]
                pub fn [<bind_ $cm>]<U, F>(self, continuation: F) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> $name<$($bt,)* U $(, $at)*>,
                {
                    match self {
                        Self::$cv(value) => continuation(value),
                        $(Self::$bv(value) => $name::$bv(value),)*
                        $(Self::$av(value) => $name::$av(value),)*
                    }
                }

                #[doc = concat!(
                    "Suspension-based [`bind_", stringify!($cm), "`](Self::bind_", stringify!($cm), "). ",
                    "Suspends only on the matching channel."
                )]
                #[cfg(feature = "async")]
                pub async fn [<bind_ $cm _async>]<U, F, Fut>(
                    self,
                    continuation: F,
                ) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> Fut,
                    Fut: ::std::future::Future<Output = $name<$($bt,)* U $(, $at)*>>,
                {
                    match self {
                        Self::$cv(value) => continuation(value).await,
                        $(Self::$bv(value) => $name::$bv(value),)*
                        $(Self::$av(value) => $name::$av(value),)*
                    }
                }

                #[doc = concat!(
                    "Runs `action` by shared reference when the `", stringify!($cv),
                    "` channel is occupied, then returns the original union ",
                    "unchanged whether or not the action ran."
                )]
                #[inline]
                pub fn [<inspect_ $cm>]<F>(self, action: F) -> Self
                where
                    F: FnOnce(&$ct),
                {
                    if let Self::$cv(value) = &self {
                        action(value);
                    }
                    self
                }

                #[doc = concat!(
                    "Suspension-based [`inspect_", stringify!($cm), "`](Self::inspect_", stringify!($cm), "). ",
                    "Suspends only when the `", stringify!($cv), "` channel is occupied."
                )]
                #[cfg(feature = "async")]
                pub async fn [<inspect_ $cm _async>]<F, Fut>(self, action: F) -> Self
                where
                    F: FnOnce(&$ct) -> Fut,
                    Fut: ::std::future::Future<Output = ()>,
                {
                    if let Self::$cv(value) = &self {
                        action(value).await;
                    }
                    self
                }
            }
        }
    };

    // ------------------------------------------------------------------
    // Future-extension trait: the deferred-input adapter layer. Methods
    // are accumulated per channel, then the trait is emitted once with
    // the whole-union operations appended.
    // ------------------------------------------------------------------

    (@ext $name:ident $ext:ident [$($all:ident),+] { $($acc:tt)* }
        [$(($bv:ident, $bm:ident, $bt:ident))*]
        ($cv:ident, $cm:ident, $ct:ident)
        $(($av:ident, $am:ident, $at:ident))*
    ) => {
        define_sum! { @ext $name $ext [$($all),+]
            {
                $($acc)*

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::map_", stringify!($cm), "`]."
                )]
                async fn [<map_ $cm>]<U, F>(self, transform: F) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> U,
                {
                    self.await.[<map_ $cm>](transform)
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::map_", stringify!($cm), "_async`]."
                )]
                async fn [<map_ $cm _async>]<U, F, Fut>(
                    self,
                    transform: F,
                ) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> Fut,
                    Fut: ::std::future::Future<Output = U>,
                {
                    self.await.[<map_ $cm _async>](transform).await
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::bind_", stringify!($cm), "`]."
                )]
                async fn [<bind_ $cm>]<U, F>(self, continuation: F) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> $name<$($bt,)* U $(, $at)*>,
                {
                    self.await.[<bind_ $cm>](continuation)
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::bind_", stringify!($cm), "_async`]."
                )]
                async fn [<bind_ $cm _async>]<U, F, Fut>(
                    self,
                    continuation: F,
                ) -> $name<$($bt,)* U $(, $at)*>
                where
                    F: FnOnce($ct) -> Fut,
                    Fut: ::std::future::Future<Output = $name<$($bt,)* U $(, $at)*>>,
                {
                    self.await.[<bind_ $cm _async>](continuation).await
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::inspect_", stringify!($cm), "`]."
                )]
                async fn [<inspect_ $cm>]<F>(self, action: F) -> $name<$($all),+>
                where
                    F: FnOnce(&$ct),
                {
                    self.await.[<inspect_ $cm>](action)
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::inspect_", stringify!($cm), "_async`]."
                )]
                async fn [<inspect_ $cm _async>]<F, Fut>(self, action: F) -> $name<$($all),+>
                where
                    F: FnOnce(&$ct) -> Fut,
                    Fut: ::std::future::Future<Output = ()>,
                {
                    self.await.[<inspect_ $cm _async>](action).await
                }
            }
            [$(($bv, $bm, $bt))* ($cv, $cm, $ct)]
            $(($av, $am, $at))*
        }
    };

    (@ext $name:ident $ext:ident [$($all:ident),+] { $($acc:tt)* }
        [$(($bv:ident, $bm:ident, $bt:ident))*]
    ) => {
        ::paste::paste! {
            #[doc = concat!(
                "The whole [`", stringify!($name), "`] algebra on deferred unions.\n\n",
                "Implemented for every `Future` resolving to a [`", stringify!($name),
                "`]. Each method resolves the input first, then delegates to the ",
                "corresponding instance operation, strictly in that order. Faults ",
                "while resolving or delegating propagate through the adapter future ",
                "untouched; nothing is buffered, retried, or timed out here."
            )]
            #[allow(async_fn_in_trait)]
            pub trait $ext<$($all),+>:
                ::std::future::Future<Output = $name<$($all),+>> + Sized
            {
                $($acc)*

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::fold`]."
                )]
                #[allow(clippy::too_many_arguments)]
                async fn fold<Out, $([<On $bv>]),*>(
                    self,
                    $([<on_ $bm>]: [<On $bv>]),*
                ) -> Out
                where
                    $([<On $bv>]: FnOnce($bt) -> Out,)*
                {
                    self.await.fold($([<on_ $bm>]),*)
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::fold_async`]."
                )]
                #[allow(clippy::too_many_arguments)]
                async fn fold_async<Out, $([<On $bv>], [<Fut $bv>]),*>(
                    self,
                    $([<on_ $bm>]: [<On $bv>]),*
                ) -> Out
                where
                    $(
                        [<On $bv>]: FnOnce($bt) -> [<Fut $bv>],
                        [<Fut $bv>]: ::std::future::Future<Output = Out>,
                    )*
                {
                    self.await.fold_async($([<on_ $bm>]),*).await
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::perform`]."
                )]
                #[allow(clippy::too_many_arguments)]
                async fn perform<$([<On $bv>]),*>(
                    self,
                    $([<on_ $bm>]: Option<[<On $bv>]>),*
                ) -> $name<$($all),+>
                where
                    $([<On $bv>]: FnOnce(&$bt),)*
                {
                    self.await.perform($([<on_ $bm>]),*)
                }

                #[doc = concat!(
                    "Resolves the deferred union, then delegates to [`",
                    stringify!($name), "::perform_async`]."
                )]
                #[allow(clippy::too_many_arguments)]
                async fn perform_async<$([<On $bv>], [<Fut $bv>]),*>(
                    self,
                    $([<on_ $bm>]: Option<[<On $bv>]>),*
                ) -> $name<$($all),+>
                where
                    $(
                        [<On $bv>]: FnOnce(&$bt) -> [<Fut $bv>],
                        [<Fut $bv>]: ::std::future::Future<Output = ()>,
                    )*
                {
                    self.await.perform_async($([<on_ $bm>]),*).await
                }
            }

            impl<Fut, $($all),+> $ext<$($all),+> for Fut where
                Fut: ::std::future::Future<Output = $name<$($all),+>>
            {
            }
        }
    };
}

pub(crate) use define_sum;
