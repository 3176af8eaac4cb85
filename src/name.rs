//! Argument-name capture for failure messages
//!
//! Failure messages name the argument that was being checked, so the explicit
//! `name` parameter on [`Checker::check`](crate::Checker::check) is the
//! primary, fully portable way to supply it. The [`check!`](crate::check) and
//! [`check_against!`](crate::check_against) macros recover the original
//! call-site ergonomics: they `stringify!` the value expression and reduce it
//! to a bare identifier with [`argument_name`].
//!
//! The reduction is a best-effort textual heuristic, not a parser. It handles
//! the shapes that come up when checking arguments - a variable, a field, a
//! borrowed or cloned variable, a value wrapped in a constructor call - and
//! hands anything else through verbatim.
//!
//! # Examples
//!
//! ```
//! use turnstile::{check, checker};
//!
//! let check_positive = checker(|x: &i32| *x > 0, "'%s' must be positive.");
//!
//! let count = -4;
//! let err = check!(check_positive, count).unwrap_err();
//! assert_eq!(err.to_string(), "'count' must be positive.");
//! ```

/// Reduce a stringified call-site expression to the name worth reporting.
///
/// Rules, applied repeatedly until nothing changes:
///
/// - leading `&`, `*` and `mut` are stripped;
/// - `receiver.method(...)` reduces to `receiver`;
/// - `callee(args)` with a plain path callee reduces to its first argument;
/// - a parenthesized expression reduces to its inside.
///
/// Whatever remains is returned, identifier or not; a literal like
/// `"Robert"` stays `"Robert"`, which is exactly what the failure message
/// should say when a literal was checked.
///
/// # Examples
///
/// ```
/// use turnstile::name::argument_name;
///
/// assert_eq!(argument_name("count"), "count");
/// assert_eq!(argument_name("f(count)"), "count");
/// assert_eq!(argument_name("String::from(name)"), "name");
/// assert_eq!(argument_name("name.clone()"), "name");
/// assert_eq!(argument_name("&mut width"), "width");
/// assert_eq!(argument_name("user.name"), "user.name");
/// assert_eq!(argument_name("\"Robert\""), "\"Robert\"");
/// ```
pub fn argument_name(expr: &str) -> String {
    let mut text = expr.trim();
    loop {
        let stripped = strip_prefixes(text);
        if let Some(inner) = unwrap_call(stripped) {
            text = inner.trim();
            continue;
        }
        text = stripped;
        break;
    }
    text.to_string()
}

fn strip_prefixes(mut text: &str) -> &str {
    loop {
        if let Some(rest) = text.strip_prefix('&').or_else(|| text.strip_prefix('*')) {
            text = rest.trim_start();
        } else if let Some(rest) = text.strip_prefix("mut ") {
            text = rest.trim_start();
        } else {
            return text;
        }
    }
}

/// Unwrap one trailing call layer: `recv.method(...)` to `recv`,
/// `path(args)` to the first argument, `(expr)` to `expr`. `None` when the
/// text does not end in a call or group.
fn unwrap_call(text: &str) -> Option<&str> {
    if !text.ends_with(')') {
        return None;
    }
    // Match the final ')' to its '(' scanning backward.
    let mut depth = 0i32;
    let mut open = None;
    for (i, c) in text.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    open = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let open = open?;

    let head = text[..open].trim_end();
    let inner = text[open + 1..text.len() - 1].trim();

    if head.is_empty() {
        // parenthesized expression
        return if inner.is_empty() { None } else { Some(inner) };
    }
    if let Some((receiver, method)) = head.rsplit_once('.') {
        if is_identifier(method) && !receiver.trim().is_empty() {
            return Some(receiver.trim());
        }
    }
    if is_identifier_path(head) && !inner.is_empty() {
        return Some(first_argument(inner));
    }
    None
}

fn first_argument(args: &str) -> &str {
    let mut depth = 0i32;
    for (i, c) in args.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => return args[..i].trim_end(),
            _ => {}
        }
    }
    args
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// `a`, `a.b`, `a::b`, `a::b.c` - dotted chains of path segments.
fn is_identifier_path(text: &str) -> bool {
    !text.is_empty()
        && text
            .split('.')
            .all(|part| !part.is_empty() && part.split("::").all(is_identifier))
}

/// Check a value, capturing its expression text as the argument name.
///
/// `check!(checker, value)` expands to a [`Checker::check`](crate::Checker::check)
/// call whose `name` is [`argument_name`]`(stringify!(value))`.
///
/// # Examples
///
/// ```
/// use turnstile::{check, checker};
///
/// let check_nonempty = checker(|s: &String| !s.is_empty(), "'%s' must be nonempty.");
///
/// let label = String::new();
/// let err = check!(check_nonempty, label).unwrap_err();
/// assert_eq!(err.to_string(), "'label' must be nonempty.");
/// ```
#[macro_export]
macro_rules! check {
    ($checker:expr, $value:expr) => {{
        let name = $crate::name::argument_name(stringify!($value));
        $checker.check($value, &name)
    }};
}

/// Check a value against a reference, capturing the value's expression text.
///
/// # Examples
///
/// ```
/// use turnstile::{check_against, checker_against};
///
/// let check_among = checker_against(
///     |x: &&str, allowed: &Vec<&str>| allowed.contains(x),
///     "'%s' is not among %s",
/// );
///
/// let hosts = vec!["Alice", "Bob", "Carl"];
/// let who = "Robert";
/// let err = check_against!(check_among, who, hosts).unwrap_err();
/// assert_eq!(err.to_string(), "'who' is not among (\"Alice\", \"Bob\", \"Carl\")");
/// ```
#[macro_export]
macro_rules! check_against {
    ($checker:expr, $value:expr, $reference:expr) => {{
        let name = $crate::name::argument_name(stringify!($value));
        $checker.check($value, &name, &$reference)
    }};
}
