//! The checker factory
//!
//! [`checker`] turns a predicate and a message template into a reusable
//! [`Checker`]: a validation function that returns its input unchanged when
//! the predicate holds and fails with a message naming the offending argument
//! when it does not. Because a successful check is transparent, checkers chain
//! with `?` without disturbing the value flowing through.
//!
//! # Examples
//!
//! ```
//! use turnstile::{checker, CheckError};
//!
//! fn scale(factor: i32) -> Result<i32, CheckError> {
//!     let check_positive = checker(|x: &i32| *x > 0, "'%s' must be positive.");
//!     let factor = check_positive.check(factor, "factor")?;
//!     Ok(factor * 10)
//! }
//!
//! assert_eq!(scale(3), Ok(30));
//! assert_eq!(
//!     scale(-3).unwrap_err().to_string(),
//!     "'factor' must be positive."
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::CheckError;
use crate::predicate::Predicate;
use crate::template::MessageTemplate;

/// A reusable validation function produced by [`checker`].
///
/// Contract: `check(value, name)` returns `Ok(value)` untouched when the
/// predicate holds, and `Err(CheckError::Invalid)` with the rendered template
/// otherwise. `name` is the source-level name of the expression the caller is
/// checking; it fills the template's slot so the failure identifies *which*
/// argument was bad, not what its value happened to be.
///
/// Checkers are `Clone` (the predicate is shared) and `Send + Sync`, so a set
/// defined once at startup can be used from anywhere.
pub struct Checker<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    template: MessageTemplate,
}

/// Build a [`Checker`] from a predicate and a one-slot message template.
///
/// The predicate may be any closure `Fn(&T) -> bool` or a ready-made
/// [`predicate`](crate::predicate). The template's single `%s` slot receives
/// the argument name at failure time.
///
/// # Examples
///
/// ```
/// use turnstile::checker;
///
/// let check_nonempty = checker(
///     |s: &String| !s.is_empty(),
///     "'%s' must be a nonempty string.",
/// );
///
/// assert_eq!(
///     check_nonempty.check(String::from("hi"), "greeting"),
///     Ok(String::from("hi"))
/// );
///
/// let err = check_nonempty.check(String::new(), "greeting").unwrap_err();
/// assert_eq!(err.to_string(), "'greeting' must be a nonempty string.");
/// ```
pub fn checker<T, P>(predicate: P, template: impl Into<MessageTemplate>) -> Checker<T>
where
    P: Predicate<T> + 'static,
{
    Checker {
        predicate: Arc::new(move |value: &T| predicate.holds(value)),
        template: template.into(),
    }
}

impl<T> Checker<T> {
    pub(crate) fn from_parts(
        predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
        template: MessageTemplate,
    ) -> Self {
        Checker {
            predicate,
            template,
        }
    }

    /// Run the check.
    ///
    /// On success the value passes through unchanged; on failure the template
    /// is rendered with `name` and the value is consumed by the error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::checker;
    ///
    /// let check_one_digit = checker(|n: &u32| *n < 10, "'%s' must be a single digit.");
    /// assert_eq!(check_one_digit.check(7, "digit"), Ok(7));
    /// assert!(check_one_digit.check(12, "digit").is_err());
    /// ```
    pub fn check(&self, value: T, name: &str) -> Result<T, CheckError> {
        if (self.predicate)(&value) {
            return Ok(value);
        }
        let message = self.template.render(name);
        #[cfg(feature = "tracing")]
        tracing::debug!("check of `{}` failed: {}", name, message);
        Err(CheckError::invalid(message))
    }

    /// Render the failure message for `name` without running a check.
    ///
    /// Useful for help text and for asserting on messages in tests.
    pub fn message_for(&self, name: &str) -> String {
        self.template.render(name)
    }

    /// The checker's message template.
    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }
}

impl<T> Clone for Checker<T> {
    fn clone(&self) -> Self {
        Checker {
            predicate: Arc::clone(&self.predicate),
            template: self.template.clone(),
        }
    }
}

impl<T> fmt::Debug for Checker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{one_char, positive};

    #[test]
    fn passing_check_is_identity() {
        let check = checker(positive::<i32>(), "'%s' must be positive.");
        assert_eq!(check.check(5, "count"), Ok(5));
    }

    #[test]
    fn failing_check_names_the_argument() {
        let check = checker(positive::<i32>(), "'%s' must be positive.");
        let err = check.check(-5, "count").unwrap_err();
        assert!(err.is_invalid());
        assert_eq!(err.to_string(), "'count' must be positive.");
    }

    #[test]
    fn closure_predicates_work() {
        let check = checker(|s: &String| s.len() == 1, "'%s' must be length == 1");
        let err = check.check(String::from("abc"), "pch").unwrap_err();
        assert_eq!(err.to_string(), "'pch' must be length == 1");
    }

    #[test]
    fn library_predicates_work_for_strings() {
        let check = checker(one_char(), "'%s' must be length == 1");
        assert_eq!(check.check(String::from("x"), "pch"), Ok(String::from("x")));
    }

    #[test]
    fn checks_chain_transparently() {
        let check_positive = checker(positive::<i32>(), "'%s' must be positive.");
        let check_small = checker(|x: &i32| *x < 100, "'%s' must be under 100.");

        let run = |n: i32| -> Result<i32, CheckError> {
            let n = check_positive.check(n, "n")?;
            let n = check_small.check(n, "n")?;
            Ok(n)
        };

        assert_eq!(run(42), Ok(42));
        assert_eq!(
            run(-1).unwrap_err().to_string(),
            "'n' must be positive."
        );
        assert_eq!(
            run(200).unwrap_err().to_string(),
            "'n' must be under 100."
        );
    }

    #[test]
    fn message_for_renders_without_checking() {
        let check = checker(positive::<i32>(), "'%s' must be positive.");
        assert_eq!(check.message_for("width"), "'width' must be positive.");
    }

    #[test]
    fn clones_share_the_predicate() {
        let check = checker(positive::<i32>(), "'%s' must be positive.");
        let clone = check.clone();
        assert_eq!(clone.check(1, "x"), Ok(1));
        assert!(clone.check(-1, "x").is_err());
    }

    #[cfg(feature = "tracing")]
    mod tracing_events {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn failing_check_emits_a_debug_event() {
            let check = checker(positive::<i32>(), "'%s' must be positive.");
            let _ = check.check(-1, "count");
            assert!(logs_contain("check of `count` failed"));
        }

        #[traced_test]
        #[test]
        fn passing_check_is_silent() {
            let check = checker(positive::<i32>(), "'%s' must be positive.");
            let _ = check.check(1, "count");
            assert!(!logs_contain("check of `count` failed"));
        }
    }
}
