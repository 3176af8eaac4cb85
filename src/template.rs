//! Message templates for checker failure messages
//!
//! Checkers are configured with a message at creation time, but the message
//! cannot be finished until a check fails: the first slot is filled with the
//! name of the argument being checked, and referenced checkers fill a second
//! slot with a rendering of the reference value. Rust's `format!` requires its
//! format string at compile time, so `MessageTemplate` implements the small
//! runtime subset checkers need: `%s` substitutes the next argument, `%%` is a
//! literal percent sign.
//!
//! # Examples
//!
//! ```
//! use turnstile::MessageTemplate;
//!
//! let tpl = MessageTemplate::new("'%s' must be a character.");
//! assert_eq!(tpl.render("count"), "'count' must be a character.");
//!
//! let tpl = MessageTemplate::new("'%s' is not among %s");
//! assert_eq!(
//!     tpl.render_with("who", "(\"Alice\", \"Bob\")"),
//!     "'who' is not among (\"Alice\", \"Bob\")"
//! );
//! ```

use std::fmt;

/// A failure-message template with `%s` placeholders.
///
/// Single-argument checkers use templates with one slot, filled with the
/// checked argument's name. Referenced checkers use two slots; the second is
/// filled with a textual rendering of the reference value.
///
/// # Examples
///
/// ```
/// use turnstile::MessageTemplate;
///
/// let tpl = MessageTemplate::new("'%s' must be positive.");
/// assert_eq!(tpl.slots(), 1);
/// assert_eq!(tpl.render("age"), "'age' must be positive.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageTemplate {
    text: String,
}

impl MessageTemplate {
    /// Create a template from its source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::MessageTemplate;
    ///
    /// let tpl = MessageTemplate::new("100%% sure '%s' is wrong");
    /// assert_eq!(tpl.render("x"), "100% sure 'x' is wrong");
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        MessageTemplate { text: text.into() }
    }

    /// The template's source text, placeholders intact.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of `%s` slots in the template.
    ///
    /// `%%` escapes are not counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile::MessageTemplate;
    ///
    /// assert_eq!(MessageTemplate::new("'%s' is not among %s").slots(), 2);
    /// assert_eq!(MessageTemplate::new("no placeholders").slots(), 0);
    /// ```
    pub fn slots(&self) -> usize {
        let mut count = 0;
        let mut chars = self.text.chars();
        while let Some(c) = chars.next() {
            if c == '%' {
                if let Some('s') = chars.next() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Render the template with the argument name in the first slot.
    ///
    /// Unfilled slots are left in place; checker factories document the slot
    /// arity they expect rather than erroring here.
    pub fn render(&self, name: &str) -> String {
        substitute(&self.text, &[name])
    }

    /// Render the template with the argument name and a reference rendering.
    pub fn render_with(&self, name: &str, reference: &str) -> String {
        substitute(&self.text, &[name, reference])
    }

    /// Fill the second slot now, leaving the first for render time.
    ///
    /// Used when a referenced checker binds its reference: the reference text
    /// is baked in, percent signs escaped so a later `render` reads them as
    /// literals.
    pub(crate) fn with_second_slot(&self, reference: &str) -> MessageTemplate {
        let escaped = reference.replace('%', "%%");
        let mut out = String::with_capacity(self.text.len() + escaped.len());
        let mut seen = 0;
        let mut chars = self.text.chars();
        while let Some(c) = chars.next() {
            if c == '%' {
                match chars.next() {
                    Some('s') if seen == 1 => {
                        out.push_str(&escaped);
                        seen += 1;
                    }
                    Some('s') => {
                        out.push_str("%s");
                        seen += 1;
                    }
                    Some(other) => {
                        out.push('%');
                        out.push(other);
                    }
                    None => out.push('%'),
                }
            } else {
                out.push(c);
            }
        }
        MessageTemplate { text: out }
    }
}

impl From<&str> for MessageTemplate {
    fn from(text: &str) -> Self {
        MessageTemplate::new(text)
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        MessageTemplate::new(text)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Substitute `%s` slots left to right, decoding `%%` escapes.
///
/// Slots beyond the supplied arguments stay verbatim; surplus arguments are
/// ignored.
fn substitute(text: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut next = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => {
                if let Some(arg) = args.get(next) {
                    out.push_str(arg);
                    next += 1;
                } else {
                    out.push_str("%s");
                }
            }
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_first_slot() {
        let tpl = MessageTemplate::new("'%s' must be a character.");
        assert_eq!(tpl.render("count"), "'count' must be a character.");
    }

    #[test]
    fn render_with_fills_both_slots() {
        let tpl = MessageTemplate::new("'%s' is not among %s");
        assert_eq!(tpl.render_with("size", "(1, 2, 3)"), "'size' is not among (1, 2, 3)");
    }

    #[test]
    fn unfilled_slots_stay_verbatim() {
        let tpl = MessageTemplate::new("'%s' is not among %s");
        assert_eq!(tpl.render("size"), "'size' is not among %s");
    }

    #[test]
    fn percent_escape() {
        let tpl = MessageTemplate::new("'%s' must be under 100%%");
        assert_eq!(tpl.render("rate"), "'rate' must be under 100%");
    }

    #[test]
    fn stray_percent_passes_through() {
        let tpl = MessageTemplate::new("50% of '%s' is odd");
        assert_eq!(tpl.render("n"), "50% of 'n' is odd");
    }

    #[test]
    fn slot_counting() {
        assert_eq!(MessageTemplate::new("").slots(), 0);
        assert_eq!(MessageTemplate::new("'%s'").slots(), 1);
        assert_eq!(MessageTemplate::new("'%s' vs %s").slots(), 2);
        assert_eq!(MessageTemplate::new("100%% done").slots(), 0);
    }

    #[test]
    fn with_second_slot_keeps_first_open() {
        let tpl = MessageTemplate::new("'%s' is not among %s");
        let bound = tpl.with_second_slot("(\"a\", \"b\")");
        assert_eq!(bound.render("x"), "'x' is not among (\"a\", \"b\")");
    }

    #[test]
    fn with_second_slot_escapes_percent_in_reference() {
        let tpl = MessageTemplate::new("'%s' must match %s");
        let bound = tpl.with_second_slot("%s-shaped");
        assert_eq!(bound.render("pat"), "'pat' must match %s-shaped");
    }

    #[test]
    fn display_shows_source_text() {
        let tpl = MessageTemplate::new("'%s' must be set");
        assert_eq!(tpl.to_string(), "'%s' must be set");
    }
}
