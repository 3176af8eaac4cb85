//! # Turnstile
//!
//! > *"Pass through unchanged, or not at all."*
//!
//! Human-readable argument checking for teaching-friendly Rust APIs.
//!
//! ## Philosophy
//!
//! Functions written for students fail best by *naming the argument* that was
//! wrong, not by dumping its value. **Turnstile** builds that style of
//! validation from two factories and a sequencer:
//!
//! - [`checker`] turns a predicate and a message template into a reusable
//!   checking function that returns its input unchanged on success;
//! - [`checker_against`] does the same for predicates that compare the value
//!   to a second, caller-supplied reference;
//! - [`Registry::apply`] runs a named sequence of checks over one value,
//!   failing fast on the first rejection.
//!
//! Because every checker is transparent on success, validation chains thread
//! a value through with `?` and hand it back untouched.
//!
//! ## Quick Example
//!
//! ```rust
//! use turnstile::{check, checker, CheckError};
//!
//! // Define checkers once, next to the functions they guard.
//! fn greet(name: String) -> Result<String, CheckError> {
//!     let check_nonempty = checker(
//!         |s: &String| !s.is_empty(),
//!         "'%s' must be a nonempty string.",
//!     );
//!     let name = check!(check_nonempty, name)?;
//!     Ok(format!("Hello, {}!", name))
//! }
//!
//! assert_eq!(greet(String::from("Ada")).unwrap(), "Hello, Ada!");
//! assert_eq!(
//!     greet(String::new()).unwrap_err().to_string(),
//!     "'name' must be a nonempty string."
//! );
//! ```
//!
//! ## Sequencing named checks
//!
//! ```rust
//! use turnstile::{checker, Registry};
//!
//! let mut registry = Registry::new();
//! registry.insert(
//!     "check_nonempty",
//!     checker(|s: &String| !s.is_empty(), "'%s' must be a nonempty string."),
//! );
//! registry.insert(
//!     "check_short",
//!     checker(|s: &String| s.len() <= 20, "'%s' must be 20 bytes or fewer."),
//! );
//!
//! let title = registry
//!     .apply(String::from("Sepal width"), "title", &["nonempty", "short"])
//!     .unwrap();
//! assert_eq!(title, "Sepal width");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when checks fail or lookups miss
//! - `serde`: `Serialize`/`Deserialize` for [`CheckError`] and [`MessageTemplate`]
//! - `proptest`: property-testing support in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod against;
pub mod checker;
pub mod describe;
pub mod error;
pub mod name;
pub mod predicate;
pub mod registry;
pub mod template;
pub mod testing;

// Re-exports
pub use against::{checker_against, CheckerAgainst};
pub use checker::{checker, Checker};
pub use describe::Describe;
pub use error::{CheckError, CheckKind};
pub use registry::{NameFormat, Registry};
pub use template::MessageTemplate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::against::{checker_against, CheckerAgainst};
    pub use crate::checker::{checker, Checker};
    pub use crate::describe::Describe;
    pub use crate::error::{CheckError, CheckKind};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::registry::{NameFormat, Registry};
    pub use crate::template::MessageTemplate;
}
