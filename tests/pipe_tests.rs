//! Integration tests for `pipe!` and `Pipe::pipe`.
//!
//! Both thread a container through single-argument operators left to
//! right. Operators may change the container type.

#![cfg(feature = "result")]

use outcomes::operators::{maybe, result};
use outcomes::{Maybe, Pipe, Result, pipe};
use rstest::rstest;

#[rstest]
fn pipe_identity_returns_container() {
    assert_eq!(pipe!(Result::<i32, String>::success(1)), Result::success(1));
}

#[rstest]
fn pipe_macro_and_method_agree() {
    let via_macro = pipe!(
        Maybe::some(4),
        maybe::map(|n: i32| n + 1),
        maybe::bind(|n: i32| if n % 2 == 1 { Maybe::some(n) } else { Maybe::none() }),
    );
    let via_method = Maybe::some(4)
        .pipe(maybe::map(|n: i32| n + 1))
        .pipe(maybe::bind(|n: i32| if n % 2 == 1 { Maybe::some(n) } else { Maybe::none() }));
    assert_eq!(via_macro, Maybe::some(5));
    assert_eq!(via_macro, via_method);
}

#[rstest]
fn pipe_can_change_container_type() {
    let outcome = pipe!(
        Maybe::some("42"),
        maybe::to_result("missing".to_string()),
        result::bind(|text: &str| {
            Result::try_catch(|| text.parse::<i32>(), |error| error.to_string())
        }),
    );
    assert_eq!(outcome, Result::success(42));
}

#[rstest]
fn pipe_short_circuits_like_methods() {
    let outcome = pipe!(
        Result::<i32, String>::failure("early".to_string()),
        result::map(|n: i32| n * 2),
        result::tap(|_: &i32| panic!("not reached")),
        result::map_error(|error: String| error.to_uppercase()),
    );
    assert_eq!(outcome, Result::failure("EARLY".to_string()));
}

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn pipe_finishes_on_async_container() {
    use outcomes::operators::result_async;

    let outcome = pipe!(
        Result::<i32, String>::success(2),
        |result: Result<i32, String>| result.to_async(),
        result_async::map_async(|n: i32| async move { n * 21 }),
        result_async::tap_failure(|_: &String| panic!("not reached")),
    )
    .await;
    assert_eq!(outcome, Result::success(42));
}
