//! Unit tests for the `Validation` specialization.
//!
//! The distinguishing behaviors under test: error accumulation through
//! `zip_with`, and the fallback operations that substitute a value only
//! in the failure channel.

use polysum::validation::Validation;
use rstest::rstest;

fn positive(n: i32) -> Validation<i32, String> {
    if n > 0 {
        Validation::success(n)
    } else {
        Validation::failure(format!("{n} is not positive"))
    }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn failure_carries_a_single_error() {
    let failed: Validation<i32, String> = Validation::failure("bad".to_string());
    assert_eq!(failed.failure_errors(), Some(vec!["bad".to_string()]));
}

#[rstest]
fn failures_carries_all_errors_in_order() {
    let failed: Validation<i32, &str> = Validation::failures(vec!["a", "b"]);
    assert_eq!(failed.failure_errors(), Some(vec!["a", "b"]));
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn map_touches_only_the_success_channel() {
    assert_eq!(positive(2).map(|x| x * 10), Validation::success(20));

    let failed = positive(-1).map(|x| x * 10);
    assert!(failed.is_failure());
}

#[rstest]
fn map_errors_touches_only_the_failure_channel() {
    let relabeled = positive(-1).map_errors(|e| e.len());
    assert_eq!(relabeled.failure_errors(), Some(vec![18]));

    let intact = positive(3).map_errors(|e: String| e.len());
    assert_eq!(intact.success_value(), Some(3));
}

#[rstest]
fn and_then_short_circuits_on_failure() {
    let result = positive(-1)
        .and_then(|_| -> Validation<i32, String> { panic!("continuation must not run") });
    assert!(result.is_failure());
}

#[rstest]
fn zip_with_combines_successes() {
    let combined = positive(2).zip_with(positive(3), |a, b| a + b);
    assert_eq!(combined, Validation::success(5));
}

#[rstest]
fn zip_with_accumulates_errors_from_both_sides() {
    let combined = positive(-1).zip_with(positive(-2), |a, b| a + b);
    assert_eq!(
        combined.failure_errors(),
        Some(vec![
            "-1 is not positive".to_string(),
            "-2 is not positive".to_string(),
        ])
    );
}

#[rstest]
fn zip_with_keeps_errors_of_the_single_failed_side() {
    let combined = positive(4).zip_with(positive(-2), |a, b| a + b);
    assert_eq!(
        combined.failure_errors(),
        Some(vec!["-2 is not positive".to_string()])
    );
}

// =============================================================================
// Fallback
// =============================================================================

#[rstest]
fn fallback_to_replaces_a_failure() {
    let recovered = positive(-1).fallback_to(Validation::success(42));
    assert_eq!(recovered, Validation::success(42));
}

#[rstest]
fn fallback_to_leaves_a_success_untouched() {
    let intact = Validation::<i32, String>::success(7).fallback_to(Validation::success(42));
    assert_eq!(intact, Validation::success(7));
}

#[rstest]
fn fallback_with_receives_the_accumulated_errors() {
    let recovered = positive(-1).fallback_with(|errors| {
        assert_eq!(errors.len(), 1);
        Validation::success(0)
    });
    assert_eq!(recovered, Validation::success(0));
}

#[rstest]
fn fallback_with_never_invokes_the_thunk_on_success() {
    let intact = Validation::<i32, String>::success(7)
        .fallback_with(|_| panic!("fallback must not run"));
    assert_eq!(intact, Validation::success(7));
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
    async fn map_async_transforms_successes() {
        let result = positive(2).map_async(|x| async move { x * 10 }).await;
        assert_eq!(result, Validation::success(20));
    }

    #[rstest]
    #[tokio::test]
    async fn fallback_with_async_replaces_a_failure() {
        let recovered = positive(-1)
            .fallback_with_async(|errors| async move {
                Validation::failures(errors).fallback_to(Validation::success(42))
            })
            .await;
        assert_eq!(recovered, Validation::success(42));
    }

    #[rstest]
    fn fallback_with_async_never_suspends_on_success() {
        let result = Validation::<i32, String>::success(7)
            .fallback_with_async(|_| future::pending::<Validation<i32, String>>())
            .now_or_never();
        assert_eq!(result, Some(Validation::success(7)));
    }
}
