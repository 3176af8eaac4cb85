//! Predicates: the boolean tests embedded in checkers
//!
//! A checker is born from a predicate and a message template. Any closure
//! `Fn(&T) -> bool` is a predicate, and for the common teaching cases this
//! module ships a small ready-made vocabulary plus logical combinators so
//! checker definitions read declaratively:
//!
//! ```
//! use turnstile::checker;
//! use turnstile::predicate::{alphabetic, non_empty, PredicateExt};
//!
//! // Text predicates implement Predicate for both str and String, so
//! // combining them names the type explicitly.
//! let check_name = checker(
//!     PredicateExt::<String>::and(non_empty(), alphabetic()),
//!     "'%s' must be a nonempty alphabetic string.",
//! );
//!
//! assert!(check_name.check(String::from("Ada"), "name").is_ok());
//! assert!(check_name.check(String::from("B-52"), "name").is_err());
//! ```

mod logic;
mod numeric;
mod text;

pub use logic::{And, Not, Or, Predicate, PredicateExt};
pub use numeric::{
    at_least, at_most, non_negative, positive, within, AtLeast, AtMost, NonNegative, Positive,
    Within,
};
pub use text::{alphabetic, non_empty, one_char, starts_with, Alphabetic, NonEmpty, OneChar, StartsWith};
