//! Unit tests for Result<V, E>.
//!
//! Result represents the outcome of an operation that can fail:
//! - `Success(V)`: the operation produced a value
//! - `Failure(E)`: the operation failed with a domain error
//!
//! Tests cover constructors, inspection, the railway transformations and
//! the aggregation helpers.

#![cfg(feature = "result")]

use outcomes::{ContractError, Maybe, Record, Rejection, Result, Unit};
use rstest::rstest;
use std::cell::{Cell, RefCell};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn success_and_failure_are_exclusive() {
    let success: Result<i32, String> = Result::success(1);
    let failure: Result<i32, String> = Result::failure("bad".to_string());
    assert!(success.is_success() && !success.is_failure());
    assert!(failure.is_failure() && !failure.is_success());
}

#[rstest]
fn success_unit_carries_unit() {
    assert_eq!(Result::<Unit, String>::success_unit(), Result::success(Unit));
}

#[rstest]
fn success_if_with_evaluates_predicate() {
    let calls = Cell::new(0);
    let outcome = Result::success_if_with(
        || {
            calls.set(calls.get() + 1);
            false
        },
        1,
        "rejected",
    );
    assert_eq!(outcome, Result::failure("rejected"));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn try_catch_converts_std_error() {
    let parsed = Result::try_catch(|| "12".parse::<i32>(), |error| error.to_string());
    assert_eq!(parsed, Result::success(12));

    let failed: Result<i32, String> =
        Result::try_catch(|| "x".parse::<i32>(), |error| format!("parse: {error}"));
    assert_eq!(
        failed,
        Result::failure("parse: invalid digit found in string".to_string())
    );
}

#[rstest]
fn catch_unwind_converts_panic() {
    let outcome: Result<i32, String> =
        Result::catch_unwind(|| panic!("boom"), |rejection: Rejection| rejection.to_string());
    assert_eq!(outcome, Result::failure("panicked: boom".to_string()));
}

#[rstest]
fn std_result_round_trip() {
    let outcome: Result<i32, String> = Ok(5).into();
    assert_eq!(outcome, Result::success(5));
    let back: std::result::Result<i32, String> = outcome.into();
    assert_eq!(back, Ok(5));
}

// =============================================================================
// Inspection
// =============================================================================

#[rstest]
fn accessors_on_both_branches() {
    let success: Result<i32, &str> = Result::success(3);
    let failure: Result<i32, &str> = Result::failure("e");

    assert_eq!(success.value(), Some(&3));
    assert_eq!(success.error(), None);
    assert_eq!(failure.error(), Some(&"e"));

    assert_eq!(success.try_get_value(), Ok(3));
    assert_eq!(failure.try_get_value(), Err(ContractError::NoValue));
    assert_eq!(success.try_get_error(), Err(ContractError::NoError));

    assert_eq!(failure.get_value_or_default(0), 0);
    assert_eq!(failure.get_value_or_else(|error| error.len() as i32), 1);
    assert_eq!(success.get_error_or_default("none"), "none");
}

#[rstest]
#[should_panic(expected = "no value")]
fn get_value_or_panic_on_failure_panics() {
    let _ = Result::<i32, &str>::failure("e").get_value_or_panic();
}

#[rstest]
#[should_panic(expected = "no error")]
fn get_error_or_panic_on_success_panics() {
    let _ = Result::<i32, &str>::success(1).get_error_or_panic();
}

#[rstest]
fn to_maybe_discards_error() {
    assert_eq!(Result::<i32, &str>::success(1).to_maybe(), Maybe::some(1));
    assert_eq!(Result::<i32, &str>::failure("e").to_maybe(), Maybe::none());
}

// =============================================================================
// Railway Semantics
// =============================================================================

#[rstest]
fn chained_validation_stops_at_first_violation() {
    let outcome = Result::<i32, String>::success(150)
        .ensure(|age| *age >= 0, "negative".to_string())
        .ensure(|age| *age <= 130, "implausible".to_string())
        .ensure(|_| panic!("not reached"), "unused".to_string())
        .map(|age| age + 1);
    assert_eq!(outcome, Result::failure("implausible".to_string()));
}

#[rstest]
fn scenario_positive_number_is_doubled() {
    let outcome = Result::<i32, &str>::success(5)
        .ensure(|n| *n > 0, "must be positive")
        .map(|n| n * 2);
    assert_eq!(outcome, Result::success(10));
}

#[rstest]
fn scenario_failure_skips_map_and_tap() {
    let called = Cell::new(false);
    let outcome = Result::<i32, &str>::failure("bad")
        .map(|n| n * 2)
        .tap(|_| called.set(true));
    assert_eq!(outcome, Result::failure("bad"));
    assert!(!called.get());
}

#[rstest]
fn scenario_compensate_recovers() {
    let outcome = Result::<String, &str>::failure("err")
        .compensate(|error| Result::<String, &str>::success(format!("recovered:{error}")));
    assert_eq!(outcome, Result::success("recovered:err".to_string()));
}

#[rstest]
fn ensure_with_derives_error_from_value() {
    let outcome = Result::<i32, String>::success(-4)
        .ensure_with(|n| *n >= 0, |n| format!("{n} is negative"));
    assert_eq!(outcome, Result::failure("-4 is negative".to_string()));
}

#[rstest]
fn success_only_steps_do_not_run_on_failure() {
    let calls = Cell::new(0);
    let bump = || calls.set(calls.get() + 1);

    let outcome = Result::<i32, String>::failure("bad".to_string())
        .map(|n| {
            bump();
            n
        })
        .bind(|n| {
            bump();
            Result::success(n)
        })
        .ensure(
            |_| {
                bump();
                true
            },
            "unused".to_string(),
        )
        .check(|_| {
            bump();
            Result::<(), String>::success(())
        })
        .tap(|_| bump())
        .on_success_try(
            |n| {
                bump();
                Ok::<i32, String>(n)
            },
            |error| error,
        );

    assert_eq!(outcome, Result::failure("bad".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn failure_only_steps_do_not_run_on_success() {
    let calls = Cell::new(0);
    let outcome = Result::<i32, String>::success(1)
        .map_error(|error| {
            calls.set(calls.get() + 1);
            error
        })
        .tap_failure(|_| calls.set(calls.get() + 1))
        .compensate(|error| {
            calls.set(calls.get() + 1);
            Result::<i32, String>::failure(error)
        });
    assert_eq!(outcome, Result::success(1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn check_keeps_original_value() {
    let outcome = Result::<&str, String>::success("bob")
        .check(|name| Result::success_if(name.len() >= 3, name.len(), "too short".to_string()));
    assert_eq!(outcome, Result::success("bob"));

    let rejected = Result::<&str, String>::success("al")
        .check(|name| Result::success_if(name.len() >= 3, name.len(), "too short".to_string()));
    assert_eq!(rejected, Result::failure("too short".to_string()));
}

#[rstest]
#[case(true, Result::failure("checked".to_string()))]
#[case(false, Result::success(1))]
fn check_if_only_validates_when_condition_holds(
    #[case] condition: bool,
    #[case] expected: Result<i32, String>,
) {
    let outcome = Result::<i32, String>::success(1)
        .check_if(condition, |_| Result::<(), String>::failure("checked".to_string()));
    assert_eq!(outcome, expected);
}

#[rstest]
fn tap_variants_observe_without_changing() {
    let log = RefCell::new(Vec::new());
    let outcome = Result::<i32, String>::success(2)
        .tap(|n| log.borrow_mut().push(format!("value {n}")))
        .tap_if(false, |_| log.borrow_mut().push("skipped".to_string()))
        .tap_if_with(|n| *n == 2, |_| log.borrow_mut().push("two".to_string()))
        .tap_either(|result| log.borrow_mut().push(format!("settled {result}")));
    assert_eq!(outcome, Result::success(2));
    assert_eq!(
        *log.borrow(),
        vec!["value 2", "two", "settled Success(2)"]
    );
}

#[rstest]
fn on_success_try_converts_thrown_error() {
    let outcome = Result::<&str, String>::success("abc")
        .on_success_try(|text| text.parse::<i32>(), |error| error.to_string());
    assert_eq!(
        outcome,
        Result::failure("invalid digit found in string".to_string())
    );
}

#[rstest]
fn compensate_receives_original_error() {
    let outcome = Result::<i32, String>::failure("offline".to_string())
        .compensate(|error| Result::<i32, String>::success_if(error == "offline", 0, error));
    assert_eq!(outcome, Result::success(0));
}

#[rstest]
fn fold_and_finally_collapse() {
    let success = Result::<i32, String>::success(2);
    assert_eq!(success.clone().fold(|n| n * 10, |error| error.len() as i32), 20);
    assert!(success.finally(|result| result.is_success()));
}

#[rstest]
fn convert_failure_changes_value_type() {
    let failure = Result::<i32, String>::failure("e".to_string());
    let converted: Result<bool, String> = failure.convert_failure().unwrap();
    assert_eq!(converted, Result::failure("e".to_string()));

    let success = Result::<i32, String>::success(1);
    assert_eq!(
        success.convert_failure::<bool>(),
        Err(ContractError::ConvertSuccess)
    );
}

// =============================================================================
// Aggregation
// =============================================================================

#[rstest]
fn choose_drops_failures() {
    let values = Result::choose(vec![
        Result::<i32, &str>::success(1),
        Result::failure("x"),
        Result::success(3),
    ]);
    assert_eq!(values, vec![1, 3]);
}

#[rstest]
fn combine_succeeds_with_keyed_record() {
    let combined = Result::combine([
        ("a", Result::<i32, String>::success(1)),
        ("b", Result::success(2)),
    ]);
    let record = combined.get_value_or_panic();
    assert_eq!(record["a"], 1);
    assert_eq!(record["b"], 2);
    assert_eq!(record.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[rstest]
fn combine_versus_combine_in_order() {
    let entries = || {
        [
            ("first", Result::<i32, &str>::failure("A")),
            ("second", Result::failure("B")),
            ("third", Result::success(3)),
        ]
    };
    assert_eq!(Result::combine(entries()), Result::failure("A, B".to_string()));
    assert_eq!(
        Result::combine_in_order(entries()),
        Result::failure("A".to_string())
    );
}

#[rstest]
fn combine_empty_input() {
    let combined = Result::combine(Vec::<(String, Result<i32, String>)>::new());
    assert_eq!(combined, Result::success(Record::new()));
}

#[rstest]
#[case(Result::success(1), "Success(1)")]
#[case(Result::failure("e".to_string()), "Failure(e)")]
fn display(#[case] result: Result<i32, String>, #[case] expected: &str) {
    assert_eq!(result.to_string(), expected);
}
