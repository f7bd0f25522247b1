//! The `pipe!` macro for left-to-right operator application.

/// Pipes a container through a series of operators from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Folds left: `...g(f(x))`
///
/// Each operator only needs to implement [`FnOnce`]. Operators may change
/// the container type, so a chain can start from a `Result` and finish on a
/// `ResultAsync`.
///
/// # Examples
///
/// ## Operators from `operators`
///
/// ```
/// use outcomes::{pipe, Result};
/// use outcomes::operators::result::{ensure, map};
///
/// let outcome = pipe!(
///     Result::<i32, String>::success(5),
///     ensure(|number: &i32| *number > 0, "must be positive".to_string()),
///     map(|number: i32| number * 2),
/// );
/// assert_eq!(outcome, Result::success(10));
/// ```
///
/// ## Plain closures
///
/// ```
/// use outcomes::{pipe, Maybe};
///
/// let maybe = pipe!(
///     Maybe::some(3),
///     |maybe: Maybe<i32>| maybe.map(|number| number + 1),
///     |maybe: Maybe<i32>| maybe.bind(|number| Maybe::from((number > 3).then_some(number))),
/// );
/// assert_eq!(maybe, Maybe::some(4));
/// ```
///
/// ## Identity
///
/// ```
/// use outcomes::{pipe, Maybe};
///
/// assert_eq!(pipe!(Maybe::some(1)), Maybe::some(1));
/// ```
#[macro_export]
macro_rules! pipe {
    ($container:expr $(,)?) => {
        $container
    };

    ($container:expr, $operator:expr $(,)?) => {
        $operator($container)
    };

    ($container:expr, $operator:expr, $($remaining_operators:expr),+ $(,)?) => {
        $crate::pipe!($operator($container), $($remaining_operators),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_identity() {
        assert_eq!(pipe!(42), 42);
    }

    #[test]
    fn test_pipe_single_operator() {
        let double = |value: i32| value * 2;
        assert_eq!(pipe!(5, double), 10);
    }

    #[test]
    fn test_pipe_folds_left() {
        let add_one = |value: i32| value + 1;
        let double = |value: i32| value * 2;
        // double(5) = 10, add_one(10) = 11
        assert_eq!(pipe!(5, double, add_one), 11);
        // add_one(5) = 6, double(6) = 12
        assert_eq!(pipe!(5, add_one, double), 12);
    }

    #[test]
    fn test_pipe_trailing_comma() {
        let negate = |value: i32| -value;
        assert_eq!(pipe!(3, negate,), -3);
    }
}
