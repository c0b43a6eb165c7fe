//! Shorten fully qualified type paths as rendered by the compiler.
//!
//! `core::any::type_name` spells every path in full (`alloc::vec::Vec<demo::Person>`). Reflection output wants the
//! source-level spelling a user would write in scope (`Vec<Person>`), so each path segment is reduced to its final
//! identifier while generic arguments, references, tuples and arrays keep their punctuation.

use std::borrow::Cow;

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Reduce every path in a rendered type to its last segment.
///
/// ## Parameters
/// - `path`: A type as rendered by the compiler, e.g. `core::option::Option<&alloc::string::String>`.
///
/// ## Returns
/// - (`Cow<str>`): borrowed when the input is a single plain path (or has no path separators at all), owned
///   otherwise.
///
/// ## Notes
/// - A `::` that does not follow an identifier (as in `<T as Trait>::Assoc`) is kept verbatim.
/// - The result is never longer than the input.
pub fn shorten_type_path(path: &str) -> Cow<'_, str> {
    if !path.contains("::") {
        return Cow::Borrowed(path);
    }
    if path.chars().all(|c| is_ident_char(c) || c == ':') {
        let start = path.rfind("::").map_or(0, |i| i + 2);
        return Cow::Borrowed(&path[start..]);
    }

    let mut out = String::with_capacity(path.len());
    // Byte offset in `out` where the identifier currently being written starts.
    let mut segment_start = 0;
    let mut chars = path.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            if out.len() == segment_start {
                out.push_str("::");
                segment_start = out.len();
            } else {
                out.truncate(segment_start);
            }
        } else {
            out.push(c);
            if !is_ident_char(c) {
                segment_start = out.len();
            }
        }
    }
    Cow::Owned(out)
}
