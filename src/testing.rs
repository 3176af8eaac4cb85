//! Test helpers for code that defines checkers
//!
//! Teaching packages end up with many small checkers, and their tests all ask
//! the same two questions: does the value pass through, and does the failure
//! say the right thing? The macros here keep those assertions short.
//!
//! # Examples
//!
//! ```
//! use turnstile::{assert_fails_with, assert_passes, checker};
//!
//! let check_positive = checker(|x: &i32| *x > 0, "'%s' must be positive.");
//!
//! assert_passes!(check_positive.check(3, "count"));
//! assert_fails_with!(check_positive.check(-3, "count"), "count");
//! ```

/// Assert that a check passed.
///
/// Panics with the failure's message otherwise.
///
/// # Example
///
/// ```
/// use turnstile::{assert_passes, checker};
///
/// let check_nonempty = checker(|s: &String| !s.is_empty(), "'%s' must be nonempty.");
/// assert_passes!(check_nonempty.check(String::from("hi"), "greeting"));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            Ok(_) => {}
            Err(e) => panic!("expected the check to pass, got: {}", e),
        }
    };
}

/// Assert that a check failed.
///
/// Panics with the passed-through value otherwise.
///
/// # Example
///
/// ```
/// use turnstile::{assert_fails, checker};
///
/// let check_nonempty = checker(|s: &String| !s.is_empty(), "'%s' must be nonempty.");
/// assert_fails!(check_nonempty.check(String::new(), "greeting"));
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($result:expr) => {
        match $result {
            Err(_) => {}
            Ok(v) => panic!("expected the check to fail, got Ok({:?})", v),
        }
    };
}

/// Assert that a check failed and its message contains a fragment.
///
/// # Example
///
/// ```
/// use turnstile::{assert_fails_with, checker};
///
/// let check_positive = checker(|x: &i32| *x > 0, "'%s' must be positive.");
/// assert_fails_with!(check_positive.check(-1, "count"), "'count' must be positive.");
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($result:expr, $fragment:expr) => {
        match $result {
            Err(e) => {
                let message = e.to_string();
                assert!(
                    message.contains($fragment),
                    "failure message {:?} does not contain {:?}",
                    message,
                    $fragment
                );
            }
            Ok(v) => panic!("expected the check to fail, got Ok({:?})", v),
        }
    };
}

#[cfg(feature = "proptest")]
use crate::checker::Checker;

/// Assert a checker is transparent over generated inputs.
///
/// For every generated value, the checker must either pass the value through
/// unchanged or fail as `Invalid` - never mutate, never fail with a misuse
/// kind. This is the core checker contract, stated once for all of a
/// package's checkers.
///
/// # Example
///
/// ```
/// use proptest::prelude::*;
/// use turnstile::{checker, testing::assert_transparent};
///
/// let check_short = checker(|s: &String| s.len() < 8, "'%s' must be short.");
/// assert_transparent(&check_short, any::<String>());
/// ```
#[cfg(feature = "proptest")]
pub fn assert_transparent<T, S>(checker: &Checker<T>, strategy: S)
where
    T: Clone + PartialEq + std::fmt::Debug,
    S: proptest::strategy::Strategy<Value = T>,
{
    use proptest::test_runner::TestRunner;
    use proptest::{prop_assert, prop_assert_eq};

    let mut runner = TestRunner::default();
    let outcome = runner.run(&strategy, |value| {
        match checker.check(value.clone(), "value") {
            Ok(out) => {
                prop_assert_eq!(out, value);
            }
            Err(err) => {
                prop_assert!(err.is_invalid(), "unexpected failure kind: {:?}", err);
            }
        }
        Ok(())
    });
    if let Err(err) = outcome {
        panic!("checker is not transparent: {}", err);
    }
}
