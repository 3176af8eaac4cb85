//! The check sequencer
//!
//! A [`Registry`] holds named checkers and applies several of them to one
//! value in order. Names follow the convention the checkers themselves are
//! defined under - `check_nonempty`, `check_positive` - and a sequencing call
//! only spells the suffixes: the registry's [`NameFormat`] (default
//! `check_%s`) expands `"nonempty"` to `"check_nonempty"` before lookup.
//!
//! The registry is an ordinary lookup table built by the application. It is
//! written while checkers are defined and only read afterwards; sequencing
//! never mutates it, so a registry behind an `Arc` or `OnceLock` serves
//! concurrent callers without locking.
//!
//! # Examples
//!
//! ```
//! use turnstile::{checker, Registry};
//!
//! let mut registry = Registry::new();
//! registry.insert(
//!     "check_nonempty",
//!     checker(|s: &String| !s.is_empty(), "'%s' must be a nonempty string."),
//! );
//! registry.insert(
//!     "check_lower",
//!     checker(
//!         |s: &String| s.chars().all(|c| !c.is_uppercase()),
//!         "'%s' must be lowercase.",
//!     ),
//! );
//!
//! let id = String::from("flipper");
//! let id = registry.apply(id, "id", &["nonempty", "lower"]).unwrap();
//! assert_eq!(id, "flipper");
//!
//! let err = registry
//!     .apply(String::from("Flipper"), "id", &["nonempty", "lower"])
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "'id' must be lowercase.");
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::against::CheckerAgainst;
use crate::checker::Checker;
use crate::error::CheckError;
use crate::template::MessageTemplate;

/// Expansion pattern from a short suffix to a full checker name.
///
/// The single `%s` slot receives the suffix.
///
/// # Examples
///
/// ```
/// use turnstile::NameFormat;
///
/// assert_eq!(NameFormat::default().expand("nonempty"), "check_nonempty");
/// assert_eq!(NameFormat::new("is_%s").expand("valid"), "is_valid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFormat {
    template: MessageTemplate,
}

impl NameFormat {
    /// A format from a `%s` pattern.
    pub fn new(format: impl Into<MessageTemplate>) -> Self {
        NameFormat {
            template: format.into(),
        }
    }

    /// Expand a suffix to a full checker name.
    pub fn expand(&self, suffix: &str) -> String {
        self.template.render(suffix)
    }
}

impl Default for NameFormat {
    /// The conventional `check_%s` prefix.
    fn default() -> Self {
        NameFormat::new("check_%s")
    }
}

enum Registered<T> {
    Checker(Checker<T>),
    // A referenced checker registered without a bound reference. It cannot
    // run; applying it reports the mis-wiring.
    Unbound,
}

/// Named checkers plus the [`NameFormat`] used to resolve suffixes.
///
/// Populated by whatever code defines checkers, consulted by [`apply`](Registry::apply),
/// never mutated by sequencing itself.
pub struct Registry<T> {
    format: NameFormat,
    checks: HashMap<String, Registered<T>>,
}

impl<T> Registry<T> {
    /// An empty registry with the default `check_%s` format.
    pub fn new() -> Self {
        Registry::with_format(NameFormat::default())
    }

    /// An empty registry with a custom name format.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::{checker, NameFormat, Registry};
    ///
    /// let mut registry = Registry::with_format(NameFormat::new("must_be_%s"));
    /// registry.insert("must_be_positive", checker(|x: &i32| *x > 0, "'%s' must be positive."));
    /// assert_eq!(registry.apply(3, "n", &["positive"]), Ok(3));
    /// ```
    pub fn with_format(format: NameFormat) -> Self {
        Registry {
            format,
            checks: HashMap::new(),
        }
    }

    /// Register a checker under its full name.
    ///
    /// The name should already be in the registry's expanded form, e.g.
    /// `check_nonempty` for the default format. Re-inserting a name replaces
    /// the earlier checker.
    pub fn insert(&mut self, name: impl Into<String>, checker: Checker<T>) {
        self.checks.insert(name.into(), Registered::Checker(checker));
    }

    /// Register a referenced checker *without* binding its reference.
    ///
    /// A referenced checker cannot run on one argument alone, so applying it
    /// through the registry fails with
    /// [`MissingReference`](crate::CheckKind::MissingReference). This mirrors
    /// the classic mis-wired pipeline: the checker was defined and named, but
    /// the sequencing call has no reference to hand it. Bind a reference
    /// first ([`CheckerAgainst::bind`]) to register a runnable checker.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::{checker_against, Registry};
    ///
    /// let check_among = checker_against(
    ///     |x: &i32, allowed: &Vec<i32>| allowed.contains(x),
    ///     "'%s' is not among %s",
    /// );
    ///
    /// let mut registry = Registry::new();
    /// registry.insert_against("check_among", check_among);
    ///
    /// let err = registry.apply(7, "level", &["among"]).unwrap_err();
    /// assert!(err.is_missing_reference());
    /// ```
    pub fn insert_against<R>(&mut self, name: impl Into<String>, checker: CheckerAgainst<T, R>) {
        let _ = checker;
        self.checks.insert(name.into(), Registered::Unbound);
    }

    /// Is a checker registered under this full name?
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Registered full names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(String::as_str)
    }

    /// Number of registered checkers.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The format used to expand suffixes.
    pub fn format(&self) -> &NameFormat {
        &self.format
    }

    /// Apply the named checks to `value`, in order, failing fast.
    ///
    /// Each suffix is expanded via the registry's format and resolved; the
    /// value threads through each checker unchanged on success. The first
    /// failure propagates untouched - later checkers are not attempted, and
    /// the sequencer adds no wrapping of its own. An empty suffix list
    /// returns the value and never errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::{checker, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.insert("check_positive", checker(|x: &i32| *x > 0, "'%s' must be positive."));
    ///
    /// assert_eq!(registry.apply(3, "n", &["positive"]), Ok(3));
    /// assert_eq!(registry.apply(3, "n", &[]), Ok(3));
    ///
    /// let err = registry.apply(3, "n", &["whole"]).unwrap_err();
    /// assert_eq!(err.to_string(), "no checker named `check_whole` is registered");
    /// ```
    pub fn apply(&self, value: T, name: &str, suffixes: &[&str]) -> Result<T, CheckError> {
        let mut value = value;
        for suffix in suffixes {
            let full = self.format.expand(suffix);
            match self.checks.get(&full) {
                Some(Registered::Checker(checker)) => {
                    value = checker.check(value, name)?;
                }
                Some(Registered::Unbound) => {
                    return Err(CheckError::missing_reference(name));
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("no checker named `{}` is registered", full);
                    return Err(CheckError::unknown_checker(full));
                }
            }
        }
        Ok(value)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Registry::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Registry")
            .field("format", &self.format)
            .field("names", &names)
            .finish()
    }
}
