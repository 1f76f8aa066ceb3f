#![cfg(feature = "async")]
//! Tests for MaybeT over a Deferred computation.
//!
//! The transformer attaches its logic as a continuation and must never
//! intercept a rejection.

use maybe_t::Matcher;
use maybe_t::effect::{Deferred, EffectKind, lift_effect};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// =============================================================================
// Round Trip Tests
// =============================================================================

#[rstest]
#[tokio::test]
async fn lift_effect_resolves_to_original_value() {
    let deferred: Deferred<Option<&str>, String> = Deferred::resolved(Some("hi"));
    let result = lift_effect(deferred).as_nullable().await;
    assert_eq!(result, Ok(Some("hi")));
}

#[rstest]
#[tokio::test]
async fn rejected_value_propagates_unchanged() {
    let deferred: Deferred<Option<i32>, String> = Deferred::rejected("hey".to_string());
    let result = lift_effect(deferred).as_nullable().await;
    assert_eq!(result, Err("hey".to_string()));
}

// =============================================================================
// map Tests
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_over_present_value() {
    let deferred: Deferred<Option<i32>, String> = Deferred::resolved(Some(5));
    let result = lift_effect(deferred).map(|value| Some(value + 1)).as_nullable().await;
    assert_eq!(result, Ok(Some(6)));
}

#[rstest]
#[tokio::test]
async fn map_appends_to_string() {
    let deferred: Deferred<Option<String>, ()> = Deferred::resolved(Some("hey".to_string()));
    let result = lift_effect(deferred)
        .map(|value| Some(value + " there"))
        .as_type::<Deferred<Option<String>, ()>>()
        .expect("wrapped effect is a Deferred")
        .await;
    assert_eq!(result, Ok(Some("hey there".to_string())));
}

#[rstest]
#[tokio::test]
async fn map_does_not_invoke_function_on_absent_value() {
    let deferred: Deferred<Option<i32>, String> = Deferred::resolved(None);
    let result = lift_effect(deferred)
        .map(|_: i32| -> Option<i32> { panic!("map must not run on an absent value") })
        .as_nullable()
        .await;
    assert_eq!(result, Ok(None));
}

#[rstest]
#[tokio::test]
async fn map_does_not_invoke_function_on_rejection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);

    let deferred: Deferred<Option<i32>, &str> = Deferred::rejected("boom");
    let result = lift_effect(deferred)
        .map(move |value| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Some(value)
        })
        .map(|value| Some(value * 2))
        .as_nullable()
        .await;

    assert_eq!(result, Err("boom"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn map_attaches_continuation_without_running_it() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);

    let deferred: Deferred<Option<i32>, ()> = Deferred::new(async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(Some(1))
    });
    let mapped = lift_effect(deferred).map(move |value| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Some(value + 1)
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(mapped.as_nullable().await, Ok(Some(2)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn map_turns_absent_handler_result_into_absent_value() {
    let deferred: Deferred<Option<i32>, ()> = Deferred::resolved(Some(1));
    let result = lift_effect(deferred)
        .map(|value| (value > 1).then_some(value))
        .map(|_: i32| -> Option<i32> { panic!("map must not run on an absent value") })
        .as_nullable()
        .await;
    assert_eq!(result, Ok(None));
}

// =============================================================================
// case_of / or_else Tests
// =============================================================================

#[rstest]
#[tokio::test]
async fn case_of_resolves_absent_slot() {
    let deferred: Deferred<Option<i32>, ()> = Deferred::resolved(None);
    let result = lift_effect(deferred)
        .case_of(
            Matcher::new()
                .some(|value: i32| Some(value.to_string()))
                .none(|| Some("nothing".to_string())),
        )
        .as_nullable()
        .await;
    assert_eq!(result, Ok(Some("nothing".to_string())));
}

#[rstest]
#[tokio::test]
async fn or_else_resolves_single_slot() {
    let absent: Deferred<Option<i32>, ()> = Deferred::resolved(None);
    let present: Deferred<Option<i32>, ()> = Deferred::resolved(Some(1));

    assert_eq!(lift_effect(absent).or_else(3).await, Ok(3));
    assert_eq!(lift_effect(present).or_else(3).await, Ok(1));
}

#[rstest]
#[tokio::test]
async fn or_else_keeps_rejection() {
    let deferred: Deferred<Option<i32>, &str> = Deferred::rejected("nope");
    assert_eq!(lift_effect(deferred).or_else_with(|| 3).await, Err("nope"));
}

// =============================================================================
// as_type / kind Tests
// =============================================================================

#[rstest]
fn as_type_rejects_deferred_assertion_on_collection() {
    let error = lift_effect(vec![Some("hi")])
        .as_type::<Deferred<Option<&str>, ()>>()
        .unwrap_err();
    assert!(error.expected.contains("Deferred"));
}

#[rstest]
fn as_type_rejects_collection_assertion_on_deferred() {
    let deferred: Deferred<Option<i32>, ()> = Deferred::resolved(Some(1));
    let error = lift_effect(deferred).as_type::<Vec<Option<i32>>>().unwrap_err();
    assert!(error.expected.contains("Vec"));
    assert!(error.found.contains("Deferred"));
}

#[rstest]
fn kind_is_deferred() {
    let deferred: Deferred<Option<i32>, ()> = Deferred::resolved(None);
    assert_eq!(lift_effect(deferred).kind(), EffectKind::Deferred);
}
