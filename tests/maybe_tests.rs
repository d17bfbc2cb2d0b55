//! Unit tests for the `Maybe` specialization.

use polysum::maybe::Maybe;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
fn just_and_nothing_are_distinct() {
    assert!(Maybe::just(1).is_just());
    assert!(Maybe::<i32>::nothing().is_nothing());
    assert_ne!(Maybe::just(1), Maybe::nothing());
}

#[rstest]
fn debug_formats_both_states() {
    assert_eq!(format!("{:?}", Maybe::just(5)), "Just(5)");
    assert_eq!(format!("{:?}", Maybe::<i32>::nothing()), "Nothing");
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn map_transforms_present_values_only() {
    assert_eq!(Maybe::just(5).map(|x| x * 2), Maybe::just(10));
    assert_eq!(Maybe::<i32>::nothing().map(|x| x * 2), Maybe::nothing());
}

#[rstest]
fn and_then_can_produce_nothing() {
    let result = Maybe::just(5).and_then(|x| {
        if x > 3 {
            Maybe::nothing()
        } else {
            Maybe::just(x)
        }
    });
    assert_eq!(result, Maybe::<i32>::nothing());
}

#[rstest]
fn and_then_skips_continuation_when_absent() {
    let result = Maybe::<i32>::nothing()
        .and_then(|_| -> Maybe<i32> { panic!("continuation must not run") });
    assert_eq!(result, Maybe::nothing());
}

#[rstest]
fn fold_runs_exactly_one_handler() {
    let described = Maybe::just(10).fold(|x| format!("got {x}"), || "empty".to_string());
    assert_eq!(described, "got 10");

    let described = Maybe::<i32>::nothing().fold(|x| format!("got {x}"), || "empty".to_string());
    assert_eq!(described, "empty");
}

#[rstest]
fn inspect_passes_through() {
    let seen = AtomicUsize::new(0);
    let result = Maybe::just(7).inspect(|x| {
        seen.store(*x as usize, Ordering::SeqCst);
    });
    assert_eq!(result, Maybe::just(7));
    assert_eq!(seen.load(Ordering::SeqCst), 7);
}

#[rstest]
fn unwrap_or_else_runs_thunk_only_when_absent() {
    assert_eq!(Maybe::just(1).unwrap_or_else(|| panic!("present")), 1);
    assert_eq!(Maybe::<i32>::nothing().unwrap_or_else(|| 9), 9);
    assert_eq!(Maybe::<i32>::nothing().unwrap_or(4), 4);
}

// =============================================================================
// Suspension Forms
// =============================================================================

#[cfg(feature = "async")]
mod suspension {
    use super::*;
    use futures::FutureExt;
    use futures::future;

    #[rstest]
    #[tokio::test]
    async fn map_async_transforms_present_values() {
        let result = Maybe::just(5).map_async(|x| async move { x * 2 }).await;
        assert_eq!(result, Maybe::just(10));
    }

    #[rstest]
    fn map_async_never_suspends_when_absent() {
        let result = Maybe::<i32>::nothing()
            .map_async(|_| future::pending::<i32>())
            .now_or_never();
        assert_eq!(result, Some(Maybe::nothing()));
    }

    #[rstest]
    #[tokio::test]
    async fn and_then_async_chains_and_redirects() {
        let result = Maybe::just(5)
            .and_then_async(|x| async move {
                if x > 3 {
                    Maybe::nothing()
                } else {
                    Maybe::just(x)
                }
            })
            .await;
        assert_eq!(result, Maybe::<i32>::nothing());
    }

    #[rstest]
    #[tokio::test]
    async fn fold_async_selects_one_handler() {
        let result = Maybe::<i32>::nothing()
            .fold_async(future::ready, || future::ready(-1))
            .await;
        assert_eq!(result, -1);
    }
}
