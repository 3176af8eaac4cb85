//! Checker failures
//!
//! Every checker in this crate fails with a [`CheckError`]. Three things can
//! go wrong, and they are deliberately distinct:
//!
//! - [`CheckKind::Invalid`]: the predicate rejected the value. This is the
//!   only kind an end user of a validated function should ever see; its
//!   message names the offending argument.
//! - [`CheckKind::MissingReference`]: a referenced checker ran without its
//!   reference value. The validation pipeline is mis-wired; the input data is
//!   not at fault.
//! - [`CheckKind::UnknownChecker`]: the sequencer could not resolve a checker
//!   name. The validation definition itself is broken.
//!
//! All three propagate immediately and stop further checks; nothing is
//! retried or aggregated.
//!
//! # Examples
//!
//! ```
//! use turnstile::CheckError;
//!
//! let err = CheckError::invalid("'count' must be a character.")
//!     .context("validating plot arguments");
//!
//! assert!(err.is_invalid());
//! assert_eq!(err.context_trail(), &["validating plot arguments"]);
//! println!("{}", err);
//! // 'count' must be a character.
//! //   -> validating plot arguments
//! ```

use std::error::Error as StdError;
use std::fmt;

/// What went wrong during a check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckKind {
    /// The predicate rejected the value; carries the rendered message.
    Invalid {
        /// Human-readable message naming the offending argument.
        message: String,
    },
    /// A referenced checker ran without its reference value.
    MissingReference {
        /// Name of the argument that was being checked.
        argument: String,
    },
    /// The sequencer found no checker registered under this name.
    UnknownChecker {
        /// The full, expanded checker name that failed to resolve.
        name: String,
    },
}

/// A checker failure, with an optional caller-supplied context trail.
///
/// Checkers themselves never add context; the trail is for validated
/// functions that want to label where in their argument handling a failure
/// surfaced.
///
/// # Examples
///
/// ```
/// use turnstile::checker;
///
/// let must_be_short = checker(|s: &String| s.len() <= 3, "'%s' is too long");
/// let err = must_be_short
///     .check(String::from("unwieldy"), "label")
///     .unwrap_err()
///     .context("drawing the legend");
///
/// assert_eq!(err.to_string(), "'label' is too long\n  -> drawing the legend");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckError {
    kind: CheckKind,
    context: Vec<String>,
}

impl CheckError {
    /// A predicate rejection carrying an already-rendered message.
    pub fn invalid(message: impl Into<String>) -> Self {
        CheckError {
            kind: CheckKind::Invalid {
                message: message.into(),
            },
            context: Vec::new(),
        }
    }

    /// A referenced checker was invoked without its reference.
    pub fn missing_reference(argument: impl Into<String>) -> Self {
        CheckError {
            kind: CheckKind::MissingReference {
                argument: argument.into(),
            },
            context: Vec::new(),
        }
    }

    /// No checker is registered under `name`.
    pub fn unknown_checker(name: impl Into<String>) -> Self {
        CheckError {
            kind: CheckKind::UnknownChecker { name: name.into() },
            context: Vec::new(),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &CheckKind {
        &self.kind
    }

    /// True for a predicate rejection.
    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, CheckKind::Invalid { .. })
    }

    /// True for a missing-reference misuse.
    pub fn is_missing_reference(&self) -> bool {
        matches!(self.kind, CheckKind::MissingReference { .. })
    }

    /// True for a failed checker-name lookup.
    pub fn is_unknown_checker(&self) -> bool {
        matches!(self.kind, CheckKind::UnknownChecker { .. })
    }

    /// Append a context line.
    ///
    /// Context accumulates in the order added, innermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::CheckError;
    ///
    /// let err = CheckError::invalid("'x' must be positive")
    ///     .context("scaling the axis")
    ///     .context("drawing the plot");
    ///
    /// assert_eq!(err.context_trail(), &["scaling the axis", "drawing the plot"]);
    /// ```
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// The context lines added so far.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CheckKind::Invalid { message } => f.write_str(message)?,
            CheckKind::MissingReference { argument } => write!(
                f,
                "no reference argument supplied while checking `{}`",
                argument
            )?,
            CheckKind::UnknownChecker { name } => {
                write!(f, "no checker named `{}` is registered", name)?
            }
        }
        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }
        Ok(())
    }
}

impl StdError for CheckError {}
