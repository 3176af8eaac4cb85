//! The referenced checker factory
//!
//! [`checker_against`] builds checkers whose predicate compares the checked
//! value to a second, caller-supplied *reference* value - a membership list,
//! an upper bound read from configuration, another argument. The message
//! template has two slots: the argument name, then a rendering of the
//! reference (see [`Describe`](crate::Describe)).
//!
//! Calling a referenced checker without its reference is a mis-wired
//! pipeline, not bad input; it fails with
//! [`MissingReference`](crate::CheckKind::MissingReference) before the
//! predicate ever runs.
//!
//! # Examples
//!
//! ```
//! use turnstile::checker_against;
//!
//! let check_among = checker_against(
//!     |x: &String, allowed: &Vec<&str>| allowed.contains(&x.as_str()),
//!     "'%s' is not among %s",
//! );
//!
//! let hosts = vec!["Alice", "Bob", "Carl"];
//!
//! assert_eq!(
//!     check_among.check(String::from("Carl"), "host", &hosts),
//!     Ok(String::from("Carl"))
//! );
//!
//! let err = check_among
//!     .check(String::from("Robert"), "host", &hosts)
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "'host' is not among (\"Alice\", \"Bob\", \"Carl\")"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::checker::Checker;
use crate::describe::Describe;
use crate::error::CheckError;
use crate::template::MessageTemplate;

/// A validation function that checks a value against a reference value.
///
/// Produced by [`checker_against`]. Same pass-through contract as
/// [`Checker`], with a reference as the extra input: `check(value, name, reference)`
/// returns `Ok(value)` untouched on success.
pub struct CheckerAgainst<T, R> {
    predicate: Arc<dyn Fn(&T, &R) -> bool + Send + Sync>,
    template: MessageTemplate,
}

/// Build a [`CheckerAgainst`] from a two-value predicate and a two-slot
/// message template.
///
/// The first `%s` receives the argument name, the second the reference's
/// [`Describe`] rendering.
///
/// # Examples
///
/// ```
/// use turnstile::checker_against;
///
/// let check_at_most = checker_against(
///     |x: &u32, limit: &u32| x <= limit,
///     "'%s' must be at most %s",
/// );
///
/// assert_eq!(check_at_most.check(3, "retries", &5), Ok(3));
/// assert_eq!(
///     check_at_most.check(9, "retries", &5).unwrap_err().to_string(),
///     "'retries' must be at most 5"
/// );
/// ```
pub fn checker_against<T, R, P>(
    predicate: P,
    template: impl Into<MessageTemplate>,
) -> CheckerAgainst<T, R>
where
    P: Fn(&T, &R) -> bool + Send + Sync + 'static,
{
    CheckerAgainst {
        predicate: Arc::new(predicate),
        template: template.into(),
    }
}

impl<T, R> CheckerAgainst<T, R> {
    /// Run the check against `reference`.
    ///
    /// On success the value passes through unchanged.
    pub fn check(&self, value: T, name: &str, reference: &R) -> Result<T, CheckError>
    where
        R: Describe,
    {
        if (self.predicate)(&value, reference) {
            return Ok(value);
        }
        let message = self.template.render_with(name, &reference.describe());
        #[cfg(feature = "tracing")]
        tracing::debug!("check of `{}` failed: {}", name, message);
        Err(CheckError::invalid(message))
    }

    /// Run the check when the reference may have been left unwired.
    ///
    /// A `None` reference fails with `MissingReference` before the predicate
    /// is evaluated, so a predicate that would dereference the reference can
    /// never fault on an absent one.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::checker_against;
    ///
    /// let check_member = checker_against(
    ///     |x: &i32, allowed: &Vec<i32>| allowed.contains(x),
    ///     "'%s' is not among %s",
    /// );
    ///
    /// let err = check_member.check_opt(1, "level", None).unwrap_err();
    /// assert!(err.is_missing_reference());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "no reference argument supplied while checking `level`"
    /// );
    /// ```
    pub fn check_opt(&self, value: T, name: &str, reference: Option<&R>) -> Result<T, CheckError>
    where
        R: Describe,
    {
        match reference {
            Some(reference) => self.check(value, name, reference),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("check of `{}` ran without a reference", name);
                Err(CheckError::missing_reference(name))
            }
        }
    }

    /// Render the failure message for `name` and `reference` without running
    /// a check.
    pub fn message_for(&self, name: &str, reference: &R) -> String
    where
        R: Describe,
    {
        self.template.render_with(name, &reference.describe())
    }

    /// The checker's message template.
    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    /// Fix the reference, producing an ordinary single-argument [`Checker`].
    ///
    /// The reference's rendering is baked into the message template, so the
    /// bound checker fails with the same message the unbound one would have.
    /// Binding is how referenced checkers join a
    /// [`Registry`](crate::Registry) pipeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::checker_against;
    ///
    /// let check_among = checker_against(
    ///     |x: &String, allowed: &Vec<&str>| allowed.contains(&x.as_str()),
    ///     "'%s' is not among %s",
    /// );
    ///
    /// let check_host = check_among.bind(vec!["Alice", "Bob", "Carl"]);
    /// let err = check_host.check(String::from("Robert"), "host").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "'host' is not among (\"Alice\", \"Bob\", \"Carl\")"
    /// );
    /// ```
    pub fn bind(self, reference: R) -> Checker<T>
    where
        T: 'static,
        R: Describe + Send + Sync + 'static,
    {
        let template = self.template.with_second_slot(&reference.describe());
        let predicate = self.predicate;
        Checker::from_parts(
            Arc::new(move |value: &T| predicate(value, &reference)),
            template,
        )
    }
}

impl<T, R> Clone for CheckerAgainst<T, R> {
    fn clone(&self) -> Self {
        CheckerAgainst {
            predicate: Arc::clone(&self.predicate),
            template: self.template.clone(),
        }
    }
}

impl<T, R> fmt::Debug for CheckerAgainst<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckerAgainst")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
